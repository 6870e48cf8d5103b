//! # Lost Item Fee Policies
//!
//! When an overdue item is declared lost, and what the patron is billed for it:
//! the item's cost, a processing fee, and what happens to those charges once the
//! item comes back or is replaced.

mod model;
mod normalize;
mod validate;

pub use crate::model::{ChargeAmountItem, ChargeType, LostItemAction, LostItemFeePolicy};
pub use crate::normalize::normalize;
pub use crate::validate::validate;

use circ_domain::sections::Section;
use circ_domain::validation::ErrorMap;
use circ_kernel::form::SettingsForm;
use strum_macros::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum LostItemFeePolicySection {
    General,
    LostItemFee,
}

impl Section for LostItemFeePolicySection {}

#[derive(Debug, Clone, Copy, Default)]
pub struct LostItemFeePolicyForm;

impl SettingsForm for LostItemFeePolicyForm {
    type Values = LostItemFeePolicy;
    type Record = LostItemFeePolicy;

    const NAME: &'static str = "lost-item-fee-policy";

    fn validate(values: &LostItemFeePolicy) -> ErrorMap {
        validate(values)
    }

    fn normalize(values: &LostItemFeePolicy) -> LostItemFeePolicy {
        normalize(values)
    }
}
