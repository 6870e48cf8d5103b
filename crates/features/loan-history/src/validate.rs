use crate::model::{LoanException, LoanHistorySettings};
use circ_domain::validation::{Checks, ErrorMap, ListErrors};

pub fn validate(settings: &LoanHistorySettings) -> ErrorMap {
    let mut checks = Checks::new();

    checks.required_select("closingType.loan", settings.closing_type.loan.as_ref());
    if settings.is_loan_interval() {
        checks.required_period("loan", settings.loan.as_ref());
    }

    if settings.is_treat_enabled() {
        checks.required_select("closingType.feeFine", settings.closing_type.fee_fine.as_ref());
        if settings.is_fee_fine_interval() {
            checks.required_period("feeFine", settings.fee_fine.as_ref());
        }
        checks.list("loanExceptions", ListErrors {
            items: settings.loan_exceptions.iter().map(validate_exception).collect(),
            error: None,
        });
    }

    checks.finish()
}

fn validate_exception(exception: &LoanException) -> ErrorMap {
    let mut checks = Checks::new();

    checks.required_select("paymentMethod", exception.payment_method.as_ref());
    checks.required_select("closingType", exception.closing_type.as_ref());
    if exception.is_interval() {
        checks.required_period("period", exception.period.as_ref());
    }

    checks.finish()
}
