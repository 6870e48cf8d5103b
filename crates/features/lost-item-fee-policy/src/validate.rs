use crate::model::LostItemFeePolicy;
use circ_domain::period::Period;
use circ_domain::validation::{Checks, ErrorMap, ErrorToken};

pub fn validate(policy: &LostItemFeePolicy) -> ErrorMap {
    let mut checks = Checks::new();

    checks.required_text("name", policy.name.as_deref());

    aging_period(&mut checks, "itemAgedLostOverdue", policy.item_aged_lost_overdue.as_ref());
    aging_period(&mut checks, "patronBilledAfterAgedLost", policy.patron_billed_after_aged_lost.as_ref());

    let amount = policy.charge_amount_item.as_ref().and_then(|c| c.amount.as_ref());
    if policy.is_another_cost() {
        checks.positive_number("chargeAmountItem.amount", amount);
    }
    checks.non_negative_number_if_filled("chargeAmountItem.amount", amount);

    if policy.is_actual_cost() {
        checks.required_period("lostItemChargeFeeFine", policy.lost_item_charge_fee_fine.as_ref());
    } else {
        aging_period(&mut checks, "lostItemChargeFeeFine", policy.lost_item_charge_fee_fine.as_ref());
    }

    checks.non_negative_number_if_filled("lostItemProcessingFee", policy.lost_item_processing_fee.as_ref());
    if policy.has_lost_item_processing_fee() && !policy.charges_processing_fee() {
        checks.fail("chargeAmountItemPatron", ErrorToken::ProcessingFeeChargeTarget);
    }

    if policy.is_replacement_allowed() {
        checks.non_negative_number_if_filled(
            "replacementProcessingFee",
            policy.replacement_processing_fee.as_ref(),
        );
    }

    checks.finish()
}

/// Optional period that may be zero; a non-zero duration needs its interval.
fn aging_period(checks: &mut Checks, path: &str, period: Option<&Period>) {
    let Some(period) = period else {
        return;
    };
    let duration_path = format!("{path}.duration");
    checks.non_negative_integer_if_filled(&duration_path, period.duration.as_ref());
    if !period.is_zero_or_blank() {
        checks.required_select(&format!("{path}.intervalId"), period.interval_id.as_ref());
    }
}
