use crate::model::{NoticePolicy, NoticeRule};
use tracing::debug;

/// Strips send options the rule's event and frequency cannot use.
pub fn normalize(policy: &NoticePolicy) -> NoticePolicy {
    let mut normalized = policy.clone();
    normalized.loan_notices.iter_mut().chain(normalized.request_notices.iter_mut()).for_each(normalize_rule);
    normalized
}

fn normalize_rule(rule: &mut NoticeRule) {
    if !rule.is_time_based() {
        if rule.send_options.take().is_some() {
            debug!(event = ?rule.triggering_event, "Dropping send options of an event-driven notice");
        }
        return;
    }
    if !rule.is_recurring()
        && let Some(options) = rule.send_options.as_mut()
    {
        options.recurring_period = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn event_driven_rules_lose_their_send_options() {
        let policy = NoticePolicy::from_value(json!({
            "name": "Default",
            "loanNotices": [{
                "templateId": "t-1",
                "triggeringEvent": "Check out",
                "frequency": "Recurring",
                "sendOptions": { "timing": 1, "recurringPeriod": { "duration": 1, "intervalId": "Days" } }
            }]
        }))
        .unwrap();
        assert_eq!(normalize(&policy).loan_notices[0].send_options, None);
    }

    #[test]
    fn one_time_rules_lose_the_recurring_period() {
        let policy = NoticePolicy::from_value(json!({
            "requestNotices": [{
                "triggeringEvent": "Request expiration",
                "frequency": "One time",
                "sendOptions": { "timing": 2, "intervalId": "Days", "recurringPeriod": { "duration": 1 } }
            }]
        }))
        .unwrap();
        let options = normalize(&policy).request_notices[0].send_options.clone().unwrap();
        assert_eq!(options.recurring_period, None);
        assert_eq!(options.interval_id, Some(circ_domain::period::IntervalId::Days));
    }
}
