use crate::constants::DEFAULT_CHECKOUT_TIMEOUT_MINUTES;
use crate::identifiers::PatronIdentifier;
use serde::Deserialize;
use std::path::PathBuf;

/// Defaults table for the circulation settings workspace.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CirculationConfig {
    pub checkout: CheckoutDefaults,
    /// Master list of identifiers offered on the checkout form, in display order.
    pub patron_identifiers: Vec<PatronIdentifier>,
    pub logging: LoggingConfig,
}

/// Checkout settings used when nothing (or nothing parsable) is stored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CheckoutDefaults {
    pub pref_patron_identifier: String,
    pub audio_alerts_enabled: bool,
    pub checkout_timeout: bool,
    pub checkout_timeout_duration: u32,
}

/// Logger settings for hosts embedding this workspace.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub name: String,
    pub level: String,
    pub console: bool,
    pub json: bool,
    pub directory: Option<PathBuf>,
    pub env_filter: Option<String>,
}

// --- Default ---

impl Default for CirculationConfig {
    fn default() -> Self {
        Self {
            checkout: CheckoutDefaults::default(),
            patron_identifiers: PatronIdentifier::master_list(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for CheckoutDefaults {
    fn default() -> Self {
        Self {
            pref_patron_identifier: String::new(),
            audio_alerts_enabled: false,
            checkout_timeout: true,
            checkout_timeout_duration: DEFAULT_CHECKOUT_TIMEOUT_MINUTES,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            name: "circulation".to_owned(),
            level: "info".to_owned(),
            console: true,
            json: false,
            directory: None,
            env_filter: None,
        }
    }
}
