use crate::model::{FineField, FinePolicy};
use circ_domain::validation::{Checks, ErrorMap, ErrorToken};
use strum::IntoEnumIterator;

pub fn validate(policy: &FinePolicy) -> ErrorMap {
    let mut checks = Checks::new();

    checks.required_text("name", policy.name.as_deref());

    for field in FineField::iter() {
        checks.non_negative_number_if_filled(field.path(), policy.value(field));
    }

    if policy.is_required_max_value() {
        checks.fail("maxOverdueFine", ErrorToken::MaxOverdueFineRequired);
    }
    if policy.is_required_max_recall_overdue_fine() {
        checks.fail("maxOverdueRecallFine", ErrorToken::MaxOverdueRecallFineRequired);
    }

    if let Some(fine) = policy.overdue_fine.as_ref().filter(|f| f.is_charged()) {
        checks.required_select("overdueFine.intervalId", fine.interval_id.as_ref());
    }
    if let Some(fine) = policy.overdue_recall_fine.as_ref().filter(|f| f.is_charged()) {
        checks.required_select("overdueRecallFine.intervalId", fine.interval_id.as_ref());
    }

    checks.finish()
}
