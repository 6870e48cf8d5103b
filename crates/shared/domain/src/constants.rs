//! Configuration-record coordinates used by the host's settings store.

/// Module owning the checkout settings record.
pub const CHECKOUT_MODULE: &str = "CHECKOUT";
/// Config name of the checkout settings record.
pub const CHECKOUT_CONFIG_NAME: &str = "other_settings";

/// Module owning the loan history settings record.
pub const LOAN_HISTORY_MODULE: &str = "LOAN_HISTORY";
/// Config name of the loan history settings record.
pub const LOAN_HISTORY_CONFIG_NAME: &str = "loan_history";

/// Minutes of inactivity before checkout times out when nothing is stored.
pub const DEFAULT_CHECKOUT_TIMEOUT_MINUTES: u32 = 3;
