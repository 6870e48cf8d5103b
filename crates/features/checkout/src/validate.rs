use crate::CheckoutFormValues;
use circ_domain::validation::{Checks, ErrorMap, ErrorToken, ListErrors};

/// At least one identifier must be checked and the timeout must be a whole number
/// of minutes greater than zero.
pub fn validate(values: &CheckoutFormValues) -> ErrorMap {
    let mut checks = Checks::new();

    if !values.has_identifier() {
        checks.list("idents", ListErrors { items: Vec::new(), error: Some(ErrorToken::SelectPatronIdentifier) });
    }

    if !values.checkout_timeout_duration.is_positive_integer() {
        checks.fail("checkoutTimeoutDuration", ErrorToken::TimeoutDuration);
    }

    checks.finish()
}
