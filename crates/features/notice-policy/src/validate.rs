use crate::model::{NoticePolicy, NoticeRule};
use circ_domain::validation::{Checks, ErrorMap, ErrorToken, ListErrors};
use circ_patron_notices::PatronNoticeCategory;

pub fn validate(policy: &NoticePolicy) -> ErrorMap {
    let mut checks = Checks::new();

    checks.required_text("name", policy.name.as_deref());
    checks.list("loanNotices", validate_rules(&policy.loan_notices, PatronNoticeCategory::Loan));
    checks.list("requestNotices", validate_rules(&policy.request_notices, PatronNoticeCategory::Request));

    checks.finish()
}

fn validate_rules(rules: &[NoticeRule], category: PatronNoticeCategory) -> ListErrors {
    ListErrors { items: rules.iter().map(|rule| validate_rule(rule, category)).collect(), error: None }
}

/// Paths are relative to the rule.
fn validate_rule(rule: &NoticeRule, category: PatronNoticeCategory) -> ErrorMap {
    let mut checks = Checks::new();

    checks.required_select("templateId", rule.template_id.as_ref());
    checks.required_select("triggeringEvent", rule.triggering_event.as_ref());
    if rule.triggering_event.is_some_and(|event| event.category() != category) {
        checks.fail("triggeringEvent", ErrorToken::TriggeringEventMismatch);
    }

    if rule.is_time_based() {
        let options = rule.send_options.as_ref();
        checks.positive_integer("sendOptions.timing", options.and_then(|o| o.timing.as_ref()));
        if rule.is_recurring() {
            checks.required_period("sendOptions.recurringPeriod", options.and_then(|o| o.recurring_period.as_ref()));
        }
    }

    checks.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn policy(value: serde_json::Value) -> NoticePolicy {
        NoticePolicy::from_value(value).unwrap()
    }

    fn rule_errors(errors: &ErrorMap, list: &str, index: usize) -> ErrorMap {
        errors.list(list).map(|l| l.items[index].clone()).unwrap_or_default()
    }

    #[test]
    fn time_based_rule_needs_timing() {
        let mut value = json!({
            "name": "Due date notices",
            "loanNotices": [{ "templateId": "t-1", "triggeringEvent": "Due date", "frequency": "One time" }]
        });
        let errors = validate(&policy(value.clone()));
        assert_eq!(rule_errors(&errors, "loanNotices", 0).token("sendOptions.timing"), Some(ErrorToken::Required));

        value["loanNotices"][0]["sendOptions"] = json!({ "timing": 10 });
        assert!(validate(&policy(value)).is_empty());
    }

    #[test]
    fn event_driven_rules_need_no_timing() {
        let errors = validate(&policy(json!({
            "name": "Checkout",
            "loanNotices": [{ "templateId": "t-1", "triggeringEvent": "Check out" }]
        })));
        assert!(errors.is_empty());
    }

    #[test]
    fn only_invalid_rules_carry_errors() {
        let errors = validate(&policy(json!({
            "name": "Mixed",
            "requestNotices": [
                { "templateId": "t-1", "triggeringEvent": "Available" },
                { "templateId": "", "triggeringEvent": "" }
            ]
        })));
        let list = errors.list("requestNotices").unwrap();
        assert!(list.items[0].is_empty());
        assert_eq!(list.items[1].token("templateId"), Some(ErrorToken::SelectRequired));
        assert_eq!(list.items[1].token("triggeringEvent"), Some(ErrorToken::SelectRequired));
    }

    #[test]
    fn request_event_in_loan_list_is_rejected() {
        let errors = validate(&policy(json!({
            "name": "Wrong list",
            "loanNotices": [{ "templateId": "t-1", "triggeringEvent": "Hold request" }]
        })));
        assert_eq!(
            rule_errors(&errors, "loanNotices", 0).token("triggeringEvent"),
            Some(ErrorToken::TriggeringEventMismatch)
        );
    }

    #[test]
    fn recurring_rule_needs_a_period() {
        let errors = validate(&policy(json!({
            "name": "Reminders",
            "requestNotices": [{
                "templateId": "t-1",
                "triggeringEvent": "Hold expiration",
                "frequency": "Recurring",
                "sendOptions": { "timing": 1, "recurringPeriod": { "duration": "", "intervalId": "Hours" } }
            }]
        })));
        assert_eq!(
            rule_errors(&errors, "requestNotices", 0).token("sendOptions.recurringPeriod.duration"),
            Some(ErrorToken::Required)
        );
    }

    #[test]
    fn name_is_required() {
        let errors = validate(&NoticePolicy::default());
        assert_eq!(errors.paths().collect::<Vec<_>>(), vec!["name"]);
    }
}
