//! Facade crate for the circulation settings core.
//! Re-exports the domain and kernel primitives and every settings form.
//! Keep this crate thin: it composes the other crates and bridges the config
//! table to the logger, nothing more.
//!
//! ## Usage
//! ```rust,ignore
//! let config = circulation::load_settings_config(Some("config/circulation"))?;
//! let _logger = circulation::init_logging(&config.logging)?;
//! let values = circulation::checkout::get_initial_values_with(&records, &config.checkout, &config.patron_identifiers);
//! ```

pub use circ_domain as domain;
pub use circ_kernel as kernel;
#[cfg(feature = "logging")]
pub use circ_logger as logger;

pub use circ_checkout as checkout;
pub use circ_fine_policy as fine_policy;
pub use circ_loan_history as loan_history;
pub use circ_loan_policy as loan_policy;
pub use circ_lost_item_fee_policy as lost_item_fee_policy;
pub use circ_notice_policy as notice_policy;
pub use circ_patron_notices as patron_notices;

use circ_domain::config::CirculationConfig;
use circ_kernel::config::{ConfigError, load_config};
use std::path::Path;

/// Loads the defaults table from `path` (or `circulation.*`), with `CIRC__` overrides.
///
/// # Errors
/// Returns [`ConfigError`] when the file is missing or does not fit [`CirculationConfig`].
pub fn load_settings_config(path: Option<impl AsRef<Path>>) -> Result<CirculationConfig, ConfigError> {
    load_config(path)
}

/// Installs the global subscriber described by the `logging` table.
///
/// # Errors
/// [`logger::LoggerError::InvalidConfiguration`] for an unknown level name; see
/// [`logger::LoggerBuilder::init`] for the rest.
#[cfg(feature = "logging")]
pub fn init_logging(
    config: &circ_domain::config::LoggingConfig,
) -> Result<logger::Logger, logger::LoggerError> {
    let level = config
        .level
        .parse::<logger::LevelFilter>()
        .map_err(|e| logger::LoggerError::invalid(format!("Unknown log level '{}': {e}", config.level)))?;

    let mut builder =
        logger::Logger::builder(config.name.as_str()).level(level).console(config.console).json(config.json);
    if let Some(directory) = &config.directory {
        builder = builder.directory(directory);
    }
    if let Some(filter) = &config.env_filter {
        builder = builder.env_filter(filter.as_str());
    }
    builder.init()
}
