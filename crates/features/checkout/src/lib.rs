//! # Checkout Settings
//!
//! The checkout screen stores one config record (`CHECKOUT`/`other_settings`) holding:
//!
//! * the patron identifiers a scanned value may match, as comma-joined keys,
//! * whether audio alerts play,
//! * whether an idle checkout session times out, and after how many minutes.
//!
//! The form edits identifiers as one checkbox per master-list entry; [`normalize`]
//! folds them back into keys and [`get_initial_values`] unfolds stored keys again.

mod normalize;
mod validate;

pub use crate::normalize::{normalize, normalize_to_json, normalize_with};
pub use crate::validate::validate;

use circ_domain::config::CheckoutDefaults;
use circ_domain::constants::{CHECKOUT_CONFIG_NAME, CHECKOUT_MODULE};
use circ_domain::identifiers::{PatronIdentifier, PatronIdentifierSet};
use circ_domain::input::{BoolInput, NumberInput};
use circ_domain::validation::ErrorMap;
use circ_kernel::form::{ConfigForm, SettingsForm, merge_stored};
use circ_kernel::store::ConfigRecord;
use serde::{Deserialize, Serialize};

/// Persisted checkout settings. Field order matches the stored JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSettings {
    pub audio_alerts_enabled: bool,
    pub pref_patron_identifier: String,
    pub checkout_timeout: bool,
    pub checkout_timeout_duration: u32,
}

impl CheckoutSettings {
    pub fn identifiers(&self) -> PatronIdentifierSet {
        PatronIdentifierSet::parse_keys(&self.pref_patron_identifier)
    }
}

impl From<&CheckoutDefaults> for CheckoutSettings {
    fn from(defaults: &CheckoutDefaults) -> Self {
        Self {
            audio_alerts_enabled: defaults.audio_alerts_enabled,
            pref_patron_identifier: defaults.pref_patron_identifier.clone(),
            checkout_timeout: defaults.checkout_timeout,
            checkout_timeout_duration: defaults.checkout_timeout_duration,
        }
    }
}

/// Stored record as read back. Records written by older clients may carry the
/// duration or the alert flag as strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSettings {
    audio_alerts_enabled: BoolInput,
    pref_patron_identifier: String,
    checkout_timeout: bool,
    checkout_timeout_duration: NumberInput,
}

impl From<&CheckoutDefaults> for StoredSettings {
    fn from(defaults: &CheckoutDefaults) -> Self {
        Self {
            audio_alerts_enabled: defaults.audio_alerts_enabled.into(),
            pref_patron_identifier: defaults.pref_patron_identifier.clone(),
            checkout_timeout: defaults.checkout_timeout,
            checkout_timeout_duration: defaults.checkout_timeout_duration.into(),
        }
    }
}

/// Values edited by the checkout form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutFormValues {
    /// One checkbox per identifier of the master list, in the same order.
    #[serde(default)]
    pub idents: Vec<bool>,
    #[serde(default)]
    pub audio_alerts_enabled: BoolInput,
    #[serde(default)]
    pub checkout_timeout: bool,
    pub checkout_timeout_duration: NumberInput,
}

impl CheckoutFormValues {
    /// Builds form values from a raw JSON object.
    ///
    /// # Errors
    /// Fails when the value does not have the form-values shape.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn has_identifier(&self) -> bool {
        self.idents.iter().any(|checked| *checked)
    }
}

/// Initial form values from the stored records, using the built-in defaults.
pub fn get_initial_values(records: &[ConfigRecord]) -> CheckoutFormValues {
    get_initial_values_with(records, &CheckoutDefaults::default(), &PatronIdentifier::master_list())
}

/// Initial form values from the first stored record spread over `defaults`.
///
/// A record that cannot be parsed yields the defaults unchanged.
pub fn get_initial_values_with(
    records: &[ConfigRecord],
    defaults: &CheckoutDefaults,
    identifiers: &[PatronIdentifier],
) -> CheckoutFormValues {
    let stored = merge_stored(records, StoredSettings::from(defaults));
    let idents = PatronIdentifierSet::parse_keys(&stored.pref_patron_identifier).to_idents(identifiers);

    CheckoutFormValues {
        idents,
        audio_alerts_enabled: stored.audio_alerts_enabled,
        checkout_timeout: stored.checkout_timeout,
        checkout_timeout_duration: stored.checkout_timeout_duration,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CheckoutForm;

impl SettingsForm for CheckoutForm {
    type Values = CheckoutFormValues;
    type Record = CheckoutSettings;

    const NAME: &'static str = "checkout";

    fn validate(values: &CheckoutFormValues) -> ErrorMap {
        validate(values)
    }

    fn normalize(values: &CheckoutFormValues) -> CheckoutSettings {
        normalize(values)
    }
}

impl ConfigForm for CheckoutForm {
    const MODULE: &'static str = CHECKOUT_MODULE;
    const CONFIG_NAME: &'static str = CHECKOUT_CONFIG_NAME;

    fn initial_values(records: &[ConfigRecord]) -> CheckoutFormValues {
        get_initial_values(records)
    }
}
