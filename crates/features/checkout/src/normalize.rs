use crate::{CheckoutFormValues, CheckoutSettings};
use circ_domain::constants::DEFAULT_CHECKOUT_TIMEOUT_MINUTES;
use circ_domain::identifiers::{PatronIdentifier, PatronIdentifierSet};
use tracing::{debug, warn};

/// Folds form values into the persisted settings over the master identifier list.
pub fn normalize(values: &CheckoutFormValues) -> CheckoutSettings {
    normalize_with(values, &PatronIdentifier::master_list())
}

/// Same as [`normalize`], with `identifiers` giving the checkbox order.
pub fn normalize_with(values: &CheckoutFormValues, identifiers: &[PatronIdentifier]) -> CheckoutSettings {
    let selected = PatronIdentifierSet::from_idents(&values.idents, identifiers);

    let duration = values
        .checkout_timeout_duration
        .as_positive_integer()
        .unwrap_or_else(|| {
            warn!(
                raw = %values.checkout_timeout_duration,
                fallback = DEFAULT_CHECKOUT_TIMEOUT_MINUTES,
                "Checkout timeout is not a positive whole number of minutes"
            );
            DEFAULT_CHECKOUT_TIMEOUT_MINUTES
        });

    let settings = CheckoutSettings {
        audio_alerts_enabled: values.audio_alerts_enabled.is_true(),
        pref_patron_identifier: selected.to_keys(identifiers),
        checkout_timeout: values.checkout_timeout,
        checkout_timeout_duration: duration,
    };
    debug!(identifiers = %settings.pref_patron_identifier, "Normalized checkout settings");
    settings
}

/// The persisted settings serialized as the config record's JSON value.
///
/// # Errors
/// Returns the serializer's error if the settings cannot be written as JSON.
pub fn normalize_to_json(values: &CheckoutFormValues) -> Result<String, serde_json::Error> {
    serde_json::to_string(&normalize(values))
}
