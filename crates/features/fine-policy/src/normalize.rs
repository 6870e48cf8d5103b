use crate::model::{FinePolicy, OverdueFine};
use circ_domain::input::NumberInput;
use tracing::debug;

/// Returns a copy of `policy` without fines whose quantity is zero or blank.
pub fn normalize(policy: &FinePolicy) -> FinePolicy {
    let mut normalized = policy.clone();

    if normalized.overdue_fine.as_ref().is_some_and(is_no_fine) {
        debug!("Dropping zero overdue fine");
        normalized.overdue_fine = None;
    }
    if normalized.overdue_recall_fine.as_ref().is_some_and(is_no_fine) {
        debug!("Dropping zero overdue recall fine");
        normalized.overdue_recall_fine = None;
    }

    normalized
}

fn is_no_fine(fine: &OverdueFine) -> bool {
    fine.quantity.as_ref().is_some_and(NumberInput::is_zero_or_blank)
}
