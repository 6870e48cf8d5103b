//! # Notice Policies
//!
//! A notice policy lists notice rules for loan events and for request events. Each
//! rule picks a patron notice template and the event that triggers it. Time-based
//! events (a due date, an expiring request or hold) additionally say how long before
//! or after the event the notice goes out, and may repeat.

mod model;
mod normalize;
mod validate;

pub use crate::model::{
    Frequency, NoticeFormat, NoticePolicy, NoticeRule, SendOptions, TriggeringEvent, template_options,
};
pub use crate::normalize::normalize;
pub use crate::validate::validate;

use circ_domain::sections::Section;
use circ_domain::validation::ErrorMap;
use circ_kernel::form::SettingsForm;
use strum_macros::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum NoticePolicySection {
    General,
    LoanNotices,
    RequestNotices,
    FeeFineNotices,
}

impl Section for NoticePolicySection {
    fn default_open(self) -> bool {
        !matches!(self, Self::FeeFineNotices)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoticePolicyForm;

impl SettingsForm for NoticePolicyForm {
    type Values = NoticePolicy;
    type Record = NoticePolicy;

    const NAME: &'static str = "notice-policy";

    fn validate(values: &NoticePolicy) -> ErrorMap {
        validate(values)
    }

    fn normalize(values: &NoticePolicy) -> NoticePolicy {
        normalize(values)
    }
}
