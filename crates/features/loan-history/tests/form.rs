use circ_domain::period::{IntervalId, Period};
use circ_kernel::form::{SubmissionError, load, save};
use circ_kernel::store::{ConfigRecord, ConfigStore, MemoryConfigStore};
use circ_loan_history::{
    ClosingType, ClosingTypes, LoanException, LoanHistoryForm, LoanHistorySettings, get_initial_values, normalize,
};
use proptest::prelude::*;

fn closing_type() -> impl Strategy<Value = Option<ClosingType>> {
    proptest::option::of(prop_oneof![
        Just(ClosingType::Immediately),
        Just(ClosingType::Interval),
        Just(ClosingType::Never),
    ])
}

fn period() -> impl Strategy<Value = Option<Period>> {
    proptest::option::of((0_u32..5).prop_map(|d| Period::new(d, IntervalId::Days)))
}

prop_compose! {
    fn settings()(
        loan_type in closing_type(),
        fee_fine_type in closing_type(),
        loan in period(),
        fee_fine in period(),
        treat_enabled in any::<bool>(),
        exceptions in proptest::collection::vec((closing_type(), period()), 0..3),
    ) -> LoanHistorySettings {
        LoanHistorySettings {
            closing_type: ClosingTypes { loan: loan_type, fee_fine: fee_fine_type },
            loan,
            fee_fine,
            treat_enabled,
            loan_exceptions: exceptions
                .into_iter()
                .map(|(closing_type, period)| LoanException {
                    payment_method: Some("Cash".to_owned()),
                    closing_type,
                    period,
                })
                .collect(),
        }
    }
}

proptest! {
    #[test]
    fn normalize_is_idempotent(settings in settings()) {
        let once = normalize(&settings);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn periods_follow_interval_closing(settings in settings()) {
        let normalized = normalize(&settings);
        prop_assert!(normalized.loan.is_none() || normalized.is_loan_interval());
        prop_assert!(normalized.fee_fine.is_none() || normalized.is_fee_fine_interval());
        prop_assert!(normalized.treat_enabled || normalized.loan_exceptions.is_empty());
    }
}

#[test]
fn nothing_stored_yields_defaults() {
    assert_eq!(get_initial_values(&[]), LoanHistorySettings::default());
}

#[test]
fn stored_keys_win_over_defaults() {
    let record = ConfigRecord::new(
        "LOAN_HISTORY",
        "loan_history",
        r#"{"closingType":{"loan":"interval"},"loan":{"duration":1,"intervalId":"Weeks"}}"#,
    );
    let values = get_initial_values(&[record]);
    assert!(values.is_loan_interval());
    assert!(!values.treat_enabled);
    assert!(values.loan_exceptions.is_empty());
}

#[test]
fn malformed_record_yields_defaults() {
    for raw in ["{oops", "[]", r#"{"closingType":{"loan":"soon"}}"#] {
        let record = ConfigRecord::new("LOAN_HISTORY", "loan_history", raw);
        assert_eq!(get_initial_values(&[record]), LoanHistorySettings::default(), "{raw}");
    }
}

#[test]
fn unreadable_key_keeps_the_other_stored_settings() {
    let record = ConfigRecord::new(
        "LOAN_HISTORY",
        "loan_history",
        r#"{"closingType":{"loan":"soon"},"treatEnabled":true,"feeFine":{"duration":2,"intervalId":"Days"}}"#,
    );
    let values = get_initial_values(&[record]);
    assert_eq!(values.closing_type, LoanHistorySettings::default().closing_type);
    assert!(values.treat_enabled);
    assert_eq!(values.fee_fine, Some(Period::new(2_u32, IntervalId::Days)));
}

#[test]
fn save_then_load() {
    let mut store = MemoryConfigStore::new();
    let settings = LoanHistorySettings {
        closing_type: ClosingTypes { loan: Some(ClosingType::Interval), fee_fine: Some(ClosingType::Immediately) },
        loan: Some(Period::new(2_u32, IntervalId::Weeks)),
        fee_fine: Some(Period::new(1_u32, IntervalId::Days)),
        treat_enabled: true,
        loan_exceptions: Vec::new(),
    };

    let saved = save::<LoanHistoryForm>(&mut store, &settings).unwrap();
    assert!(saved.id.is_some());
    assert_eq!(store.records("LOAN_HISTORY", "loan_history").unwrap().len(), 1);

    let loaded = load::<LoanHistoryForm>(&store).unwrap();
    assert_eq!(loaded.fee_fine, None);
    assert_eq!(loaded.loan, settings.loan);

    save::<LoanHistoryForm>(&mut store, &loaded).unwrap();
    assert_eq!(store.len(), 1);
}

#[test]
fn invalid_settings_are_not_saved() {
    let mut store = MemoryConfigStore::new();
    let settings = LoanHistorySettings {
        closing_type: ClosingTypes { loan: Some(ClosingType::Interval), fee_fine: None },
        ..LoanHistorySettings::default()
    };

    let err = save::<LoanHistoryForm>(&mut store, &settings).unwrap_err();
    assert!(matches!(err, SubmissionError::Invalid { .. }));
    assert!(store.is_empty());
}
