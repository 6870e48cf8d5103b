//! # Loan History
//!
//! One config record (`LOAN_HISTORY`/`loan_history`) decides when closed loans are
//! anonymized: immediately, after an interval, or never. Loans that had fees or fines
//! can be treated separately, with per-payment-method exceptions.

mod model;
mod normalize;
mod validate;

pub use crate::model::{ClosingType, ClosingTypes, LoanException, LoanHistorySettings};
pub use crate::normalize::normalize;
pub use crate::validate::validate;

use circ_domain::constants::{LOAN_HISTORY_CONFIG_NAME, LOAN_HISTORY_MODULE};
use circ_domain::validation::ErrorMap;
use circ_kernel::form::{ConfigForm, SettingsForm, merge_stored};
use circ_kernel::store::ConfigRecord;

/// Stored settings spread over the defaults; anything unreadable yields the defaults.
pub fn get_initial_values(records: &[ConfigRecord]) -> LoanHistorySettings {
    merge_stored(records, LoanHistorySettings::default())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoanHistoryForm;

impl SettingsForm for LoanHistoryForm {
    type Values = LoanHistorySettings;
    type Record = LoanHistorySettings;

    const NAME: &'static str = "loan-history";

    fn validate(values: &LoanHistorySettings) -> ErrorMap {
        validate(values)
    }

    fn normalize(values: &LoanHistorySettings) -> LoanHistorySettings {
        normalize(values)
    }
}

impl ConfigForm for LoanHistoryForm {
    const MODULE: &'static str = LOAN_HISTORY_MODULE;
    const CONFIG_NAME: &'static str = LOAN_HISTORY_CONFIG_NAME;

    fn initial_values(records: &[ConfigRecord]) -> LoanHistorySettings {
        get_initial_values(records)
    }
}
