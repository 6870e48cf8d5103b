use circ_domain::input::NumberInput;
use circ_domain::period::{IntervalId, Period};
use circ_domain::sections::Sections;
use circ_kernel::form::prepare_submission;
use circ_notice_policy::{
    Frequency, NoticePolicy, NoticePolicyForm, NoticePolicySection, NoticeRule, SendOptions, TriggeringEvent,
    normalize,
};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn rule() -> impl Strategy<Value = NoticeRule> {
    let events: Vec<TriggeringEvent> = TriggeringEvent::iter().collect();
    (
        proptest::option::of(proptest::sample::select(events)),
        proptest::option::of(prop_oneof![Just(Frequency::OneTime), Just(Frequency::Recurring)]),
        proptest::option::of((proptest::option::of(1_i64..10), any::<bool>())),
    )
        .prop_map(|(triggering_event, frequency, options)| NoticeRule {
            template_id: Some("t-1".to_owned()),
            triggering_event,
            frequency,
            send_options: options.map(|(timing, recurring)| SendOptions {
                timing: timing.map(NumberInput::Integer),
                interval_id: Some(IntervalId::Days),
                recurring_period: recurring.then(|| Period::new(1_u32, IntervalId::Days)),
            }),
            ..NoticeRule::new_rule()
        })
}

fn policy() -> impl Strategy<Value = NoticePolicy> {
    (proptest::collection::vec(rule(), 0..4), proptest::collection::vec(rule(), 0..4)).prop_map(
        |(loan_notices, request_notices)| NoticePolicy {
            name: Some("Generated".to_owned()),
            loan_notices,
            request_notices,
            ..NoticePolicy::default()
        },
    )
}

proptest! {
    #[test]
    fn normalize_is_idempotent(policy in policy()) {
        let once = normalize(&policy);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn event_driven_rules_never_recur(policy in policy()) {
        let normalized = normalize(&policy);
        for rule in normalized.loan_notices.iter().chain(&normalized.request_notices) {
            let recurring_period = rule.send_options.as_ref().and_then(|o| o.recurring_period.as_ref());
            if !rule.is_time_based() || !rule.is_recurring() {
                prop_assert!(recurring_period.is_none());
            }
        }
    }
}

#[test]
fn submission_normalizes_accepted_policies() {
    let policy = NoticePolicy {
        name: Some("Due date".to_owned()),
        active: Some(true),
        loan_notices: vec![NoticeRule {
            template_id: Some("t-1".to_owned()),
            triggering_event: Some(TriggeringEvent::DueDate),
            send_options: Some(SendOptions {
                timing: Some(NumberInput::from("10")),
                interval_id: Some(IntervalId::Days),
                recurring_period: Some(Period::new(1_u32, IntervalId::Days)),
            }),
            ..NoticeRule::new_rule()
        }],
        ..NoticePolicy::default()
    };

    let record = prepare_submission::<NoticePolicyForm>(&policy).unwrap();
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["loanNotices"][0]["frequency"], "One time");
    assert_eq!(json["loanNotices"][0]["triggeringEvent"], "Due date");
    assert!(json["loanNotices"][0]["sendOptions"].get("recurringPeriod").is_none());
    assert!(record.is_active());
}

#[test]
fn fee_fine_section_starts_collapsed() {
    let sections = Sections::<NoticePolicySection>::new();
    assert!(sections.is_open(NoticePolicySection::LoanNotices));
    assert!(!sections.is_open(NoticePolicySection::FeeFineNotices));
    assert!(!sections.all_open());
    assert!(sections.expand_all(true).all_open());
}
