use circ_domain::input::NumberInput;
use circ_fine_policy::{FineInterval, FinePolicy, FinePolicyForm, OverdueFine, normalize, validate};
use circ_kernel::form::prepare_submission;
use proptest::prelude::*;

fn number() -> impl Strategy<Value = NumberInput> {
    prop_oneof![
        (-5_i64..50).prop_map(NumberInput::Integer),
        (-5.0_f64..50.0).prop_map(NumberInput::Float),
        Just(NumberInput::from("")),
        Just(NumberInput::from("0")),
        (0_u32..100).prop_map(|n| NumberInput::from(n.to_string())),
        Just(NumberInput::from("abc")),
    ]
}

fn fine() -> impl Strategy<Value = Option<OverdueFine>> {
    proptest::option::of((proptest::option::of(number()), proptest::option::of(Just(FineInterval::Day))).prop_map(
        |(quantity, interval_id)| OverdueFine { quantity, interval_id },
    ))
}

fn policy() -> impl Strategy<Value = FinePolicy> {
    (fine(), proptest::option::of(number()), fine(), proptest::option::of(number())).prop_map(
        |(overdue_fine, max_overdue_fine, overdue_recall_fine, max_overdue_recall_fine)| FinePolicy {
            name: Some("Generated".to_owned()),
            overdue_fine,
            max_overdue_fine,
            overdue_recall_fine,
            max_overdue_recall_fine,
            ..FinePolicy::default_policy()
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
    fn positive_quantity_with_non_positive_max_requires_max(quantity in 1_i64..100, max in -10_i64..=0) {
        let policy = FinePolicy {
            overdue_fine: Some(OverdueFine::new(quantity, FineInterval::Day)),
            max_overdue_fine: Some(NumberInput::Integer(max)),
            ..FinePolicy::default_policy()
        };
        prop_assert!(policy.is_required_max_value());
    }

    #[test]
    fn validator_is_idempotent(policy in policy()) {
        prop_assert_eq!(validate(&policy), validate(&policy));
    }

    #[test]
    fn accepted_submissions_never_carry_zero_fines(policy in policy()) {
        if let Ok(record) = prepare_submission::<FinePolicyForm>(&policy) {
            let json = serde_json::to_value(&record).unwrap();
            if let Some(fine) = json.get("overdueFine") {
                prop_assert!(fine.get("quantity").is_none_or(|q| *q != 0 && *q != ""));
            }
        }
    }
}

#[test]
fn zero_fine_policy_serializes_without_fine_keys() {
    let json = serde_json::to_value(normalize(&FinePolicy::default_policy())).unwrap();
    assert!(json.get("overdueFine").is_none());
    assert!(json.get("overdueRecallFine").is_none());
    assert_eq!(json["countClosed"], true);
}
