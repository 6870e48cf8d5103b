//! # Fine Policies
//!
//! A fine policy says how much a patron is charged per interval an item is overdue,
//! separately for ordinary loans and for recalled items, and caps both charges.
//!
//! A fine of zero means "no fine": [`normalize`] removes it entirely so the stored
//! policy carries no `overdueFine`/`overdueRecallFine` key.

mod model;
mod normalize;
mod validate;

pub use crate::model::{FineField, FineInterval, FinePolicy, OverdueFine};
pub use crate::normalize::normalize;
pub use crate::validate::validate;

use circ_domain::sections::Section;
use circ_domain::validation::ErrorMap;
use circ_kernel::form::SettingsForm;
use strum_macros::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum FinePolicySection {
    General,
    OverdueFine,
}

impl Section for FinePolicySection {}

#[derive(Debug, Clone, Copy, Default)]
pub struct FinePolicyForm;

impl SettingsForm for FinePolicyForm {
    type Values = FinePolicy;
    type Record = FinePolicy;

    const NAME: &'static str = "fine-policy";

    fn validate(values: &FinePolicy) -> ErrorMap {
        validate(values)
    }

    fn normalize(values: &FinePolicy) -> FinePolicy {
        normalize(values)
    }
}
