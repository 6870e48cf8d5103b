//! # Loan Policies
//!
//! A loan policy decides whether items may be borrowed and for how long, when they
//! are due if the library is closed, how often they may be renewed, and how recalls
//! and holds shorten or extend a loan.
//!
//! The form only shows the parts that apply: a non-loanable policy has no loan,
//! renewal or request settings, a fixed profile has no loan period, and so on.
//! [`normalize`] strips whatever the form hid so stale values never reach storage.

mod model;
mod normalize;
mod validate;

pub use crate::model::{
    DueDateManagement, FixedDueDateSchedule, Holds, LoanPolicy, LoanProfile, LoansPolicy, Recalls,
    RenewFrom, RenewalsPolicy, RequestManagement, schedule_options,
};
pub use crate::normalize::normalize;
pub use crate::validate::validate;

use circ_domain::sections::Section;
use circ_domain::validation::ErrorMap;
use circ_kernel::form::SettingsForm;
use strum_macros::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum LoanPolicySection {
    General,
    Recalls,
    Holds,
}

impl Section for LoanPolicySection {}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoanPolicyForm;

impl SettingsForm for LoanPolicyForm {
    type Values = LoanPolicy;
    type Record = LoanPolicy;

    const NAME: &'static str = "loan-policy";

    fn validate(values: &LoanPolicy) -> ErrorMap {
        validate(values)
    }

    fn normalize(values: &LoanPolicy) -> LoanPolicy {
        normalize(values)
    }
}
