use circ_domain::constants::{
    CHECKOUT_CONFIG_NAME, CHECKOUT_MODULE, LOAN_HISTORY_CONFIG_NAME, LOAN_HISTORY_MODULE,
};
use circ_domain::identifiers::PatronIdentifier;
use circ_domain::validation::ErrorToken;

#[test]
fn constants_match_record_coordinates() {
    assert_eq!(CHECKOUT_MODULE, "CHECKOUT");
    assert_eq!(CHECKOUT_CONFIG_NAME, "other_settings");
    assert_eq!(LOAN_HISTORY_MODULE, "LOAN_HISTORY");
    assert_eq!(LOAN_HISTORY_CONFIG_NAME, "loan_history");
}

#[test]
fn identifier_keys_match_stored_strings() {
    let keys: Vec<_> = PatronIdentifier::master_list().into_iter().map(PatronIdentifier::key).collect();
    assert_eq!(keys, ["barcode", "externalSystemId", "id", "username"]);
}

#[test]
fn error_tokens_are_message_ids() {
    assert_eq!(ErrorToken::Required.message_id(), "ui-circulation.settings.validate.fillIn");
    assert_eq!(
        ErrorToken::SelectPatronIdentifier.to_string(),
        "ui-circulation.settings.checkout.validate.selectContinue"
    );
    assert_eq!(
        "ui-circulation.settings.patronNotices.errors.nameExists".parse::<ErrorToken>().ok(),
        Some(ErrorToken::NameExists)
    );
}
