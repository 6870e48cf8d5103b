use crate::model::LoanHistorySettings;
use tracing::debug;

/// Drops periods that no interval closing type uses, and the fee/fine block when
/// such loans are not treated separately.
pub fn normalize(settings: &LoanHistorySettings) -> LoanHistorySettings {
    let mut normalized = settings.clone();

    if !normalized.is_loan_interval() {
        normalized.loan = None;
    }

    if !normalized.treat_enabled {
        if normalized.closing_type.fee_fine.is_some() || !normalized.loan_exceptions.is_empty() {
            debug!("Fee/fine loan history is not treated separately, dropping its settings");
        }
        normalized.closing_type.fee_fine = None;
        normalized.fee_fine = None;
        normalized.loan_exceptions.clear();
        return normalized;
    }

    if !normalized.is_fee_fine_interval() {
        normalized.fee_fine = None;
    }
    for exception in normalized.loan_exceptions.iter_mut().filter(|e| !e.is_interval()) {
        exception.period = None;
    }

    normalized
}
