use crate::model::LostItemFeePolicy;
use circ_domain::period::Period;
use tracing::debug;

/// Drops periods left at zero or blank, and the replacement fee when replacement
/// is not allowed.
pub fn normalize(policy: &LostItemFeePolicy) -> LostItemFeePolicy {
    let mut normalized = policy.clone();

    for period in [
        &mut normalized.item_aged_lost_overdue,
        &mut normalized.patron_billed_after_aged_lost,
        &mut normalized.lost_item_charge_fee_fine,
    ] {
        if period.as_ref().is_some_and(Period::is_zero_or_blank) {
            *period = None;
        }
    }

    if !normalized.is_replacement_allowed() && normalized.replacement_processing_fee.is_some() {
        debug!("Dropping replacement fee of a policy without replacement");
        normalized.replacement_processing_fee = None;
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn zero_periods_and_unused_replacement_fee_are_dropped() {
        let policy = LostItemFeePolicy::from_value(json!({
            "name": "Lost",
            "itemAgedLostOverdue": { "duration": 0, "intervalId": "Days" },
            "patronBilledAfterAgedLost": { "duration": "", "intervalId": "Days" },
            "lostItemChargeFeeFine": { "duration": 6, "intervalId": "Weeks" },
            "replacementAllowed": false,
            "replacementProcessingFee": 5
        }))
        .unwrap();

        assert_eq!(
            serde_json::to_value(normalize(&policy)).unwrap(),
            json!({
                "name": "Lost",
                "lostItemChargeFeeFine": { "duration": 6, "intervalId": "Weeks" },
                "replacementAllowed": false
            })
        );
    }

    #[test]
    fn replacement_fee_kept_when_allowed() {
        let policy = LostItemFeePolicy::from_value(json!({
            "replacementAllowed": true,
            "replacementProcessingFee": "2.50"
        }))
        .unwrap();
        assert_eq!(normalize(&policy), policy);
    }
}
