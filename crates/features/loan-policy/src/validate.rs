use crate::model::{LoanPolicy, LoanProfile};
use circ_domain::period::Period;
use circ_domain::validation::{Checks, ErrorMap, ErrorToken};

pub fn validate(policy: &LoanPolicy) -> ErrorMap {
    let mut checks = Checks::new();

    checks.required_text("name", policy.name.as_deref());

    if policy.is_loanable() {
        validate_loans(&mut checks, policy);
        if policy.is_renewable() {
            validate_renewals(&mut checks, policy);
        }
        validate_requests(&mut checks, policy);
    }

    checks.finish()
}

fn validate_loans(checks: &mut Checks, policy: &LoanPolicy) {
    let loans = policy.loans_policy.as_ref();

    checks.required_select("loansPolicy.profileId", loans.and_then(|l| l.profile_id.as_ref()));

    if policy.is_profile_rolling() {
        checks.required_period("loansPolicy.period", loans.and_then(|l| l.period.as_ref()));
    }
    if policy.is_profile_fixed() {
        checks.required_select(
            "loansPolicy.fixedDueDateScheduleId",
            loans.and_then(|l| l.fixed_due_date_schedule_id.as_ref()),
        );
    }

    checks.required_select(
        "loansPolicy.closedLibraryDueDateManagementId",
        loans.and_then(|l| l.closed_library_due_date_management_id.as_ref()),
    );

    if policy.is_opening_time_offset_active() {
        checks.required_period("loansPolicy.openingTimeOffset", loans.and_then(|l| l.opening_time_offset.as_ref()));
    }

    if let Some(grace) = loans.and_then(|l| l.grace_period.as_ref()).filter(|p| p.has_duration()) {
        checks.non_negative_integer_if_filled("loansPolicy.gracePeriod.duration", grace.duration.as_ref());
        checks.required_select("loansPolicy.gracePeriod.intervalId", grace.interval_id.as_ref());
    }
}

fn validate_renewals(checks: &mut Checks, policy: &LoanPolicy) {
    let renewals = policy.renewals_policy.as_ref();

    if !policy.is_unlimited_renewals() {
        match renewals.and_then(|r| r.number_allowed.as_ref()) {
            None => checks.fail("renewalsPolicy.numberAllowed", ErrorToken::Required),
            Some(n) if n.is_blank() => checks.fail("renewalsPolicy.numberAllowed", ErrorToken::Required),
            Some(n) => checks.non_negative_integer_if_filled("renewalsPolicy.numberAllowed", Some(n)),
        }
    }

    if policy.is_different_period() {
        match policy.profile() {
            Some(LoanProfile::Rolling) => {
                checks.required_period("renewalsPolicy.period", renewals.and_then(|r| r.period.as_ref()));
            },
            Some(LoanProfile::Fixed) => checks.required_select(
                "renewalsPolicy.alternateFixedDueDateScheduleId",
                renewals.and_then(|r| r.alternate_fixed_due_date_schedule_id.as_ref()),
            ),
            Some(LoanProfile::Indefinite) | None => {},
        }
    }
}

fn validate_requests(checks: &mut Checks, policy: &LoanPolicy) {
    let Some(requests) = policy.request_management.as_ref() else {
        return;
    };

    let periods: [(&str, Option<&Period>); 5] = [
        (
            "requestManagement.recalls.alternateGracePeriod",
            requests.recalls.as_ref().and_then(|r| r.alternate_grace_period.as_ref()),
        ),
        (
            "requestManagement.recalls.minimumGuaranteedLoanPeriod",
            requests.recalls.as_ref().and_then(|r| r.minimum_guaranteed_loan_period.as_ref()),
        ),
        (
            "requestManagement.recalls.recallReturnInterval",
            requests.recalls.as_ref().and_then(|r| r.recall_return_interval.as_ref()),
        ),
        (
            "requestManagement.holds.alternateCheckoutLoanPeriod",
            requests.holds.as_ref().and_then(|h| h.alternate_checkout_loan_period.as_ref()),
        ),
        (
            "requestManagement.holds.alternateRenewalLoanPeriod",
            requests.holds.as_ref().and_then(|h| h.alternate_renewal_loan_period.as_ref()),
        ),
    ];

    for (path, period) in periods {
        checks.period_if_filled(path, period);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn policy(value: serde_json::Value) -> LoanPolicy {
        LoanPolicy::from_value(value).unwrap()
    }

    #[test]
    fn rolling_policy_without_period_fails_on_the_period() {
        let errors = validate(&policy(json!({
            "name": "Standard",
            "loanable": true,
            "loansPolicy": { "profileId": "Rolling", "closedLibraryDueDateManagementId": "CURRENT_DUE_DATE" }
        })));
        assert_eq!(errors.token("loansPolicy.period"), Some(ErrorToken::Required));

        let errors = validate(&policy(json!({
            "name": "Standard",
            "loanable": true,
            "loansPolicy": {
                "profileId": "Rolling",
                "period": { "duration": 3, "intervalId": "Days" },
                "closedLibraryDueDateManagementId": "CURRENT_DUE_DATE"
            }
        })));
        assert!(!errors.has_errors_under("loansPolicy.period"));
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn period_parts_are_checked_separately() {
        let errors = validate(&policy(json!({
            "name": "Standard",
            "loanable": true,
            "loansPolicy": {
                "profileId": "Rolling",
                "period": { "duration": "0", "intervalId": "" },
                "closedLibraryDueDateManagementId": "CURRENT_DUE_DATE"
            }
        })));
        assert_eq!(errors.token("loansPolicy.period.duration"), Some(ErrorToken::IntegerGreaterThanZero));
        assert_eq!(errors.token("loansPolicy.period.intervalId"), Some(ErrorToken::SelectRequired));
        assert!(!errors.contains("loansPolicy.period"));
    }

    #[test]
    fn fixed_profile_needs_a_schedule() {
        let errors = validate(&policy(json!({
            "name": "Semester",
            "loanable": true,
            "loansPolicy": { "profileId": "Fixed", "fixedDueDateScheduleId": "" }
        })));
        assert_eq!(errors.token("loansPolicy.fixedDueDateScheduleId"), Some(ErrorToken::SelectRequired));
        assert_eq!(errors.token("loansPolicy.closedLibraryDueDateManagementId"), Some(ErrorToken::SelectRequired));
    }

    #[test]
    fn limited_renewals_need_a_count() {
        let base = json!({
            "name": "Standard",
            "loanable": true,
            "renewable": true,
            "loansPolicy": {
                "profileId": "Fixed",
                "fixedDueDateScheduleId": "sched-1",
                "closedLibraryDueDateManagementId": "CURRENT_DUE_DATE"
            },
            "renewalsPolicy": { "unlimited": false, "differentPeriod": true }
        });
        let errors = validate(&policy(base.clone()));
        assert_eq!(errors.token("renewalsPolicy.numberAllowed"), Some(ErrorToken::Required));
        assert_eq!(
            errors.token("renewalsPolicy.alternateFixedDueDateScheduleId"),
            Some(ErrorToken::SelectRequired)
        );

        let mut value = base;
        value["renewalsPolicy"]["numberAllowed"] = json!("-2");
        let errors = validate(&policy(value));
        assert_eq!(errors.token("renewalsPolicy.numberAllowed"), Some(ErrorToken::IntegerGreaterThanOrEqualToZero));
    }

    #[test]
    fn non_loanable_policy_only_needs_a_name() {
        let errors = validate(&policy(json!({
            "name": "Reference",
            "loanable": false,
            "loansPolicy": { "profileId": "Rolling" }
        })));
        assert!(errors.is_empty());
    }

    #[test]
    fn request_periods_are_optional_but_positive() {
        let errors = validate(&policy(json!({
            "name": "Standard",
            "loanable": true,
            "loansPolicy": { "profileId": "Indefinite", "closedLibraryDueDateManagementId": "CURRENT_DUE_DATE" },
            "requestManagement": {
                "recalls": {
                    "alternateGracePeriod": { "duration": "", "intervalId": "Days" },
                    "minimumGuaranteedLoanPeriod": { "duration": 0, "intervalId": "Days" }
                },
                "holds": { "alternateCheckoutLoanPeriod": { "duration": 2 } }
            }
        })));
        assert!(!errors.has_errors_under("requestManagement.recalls.alternateGracePeriod"));
        assert_eq!(
            errors.token("requestManagement.recalls.minimumGuaranteedLoanPeriod.duration"),
            Some(ErrorToken::IntegerGreaterThanZero)
        );
        assert_eq!(
            errors.token("requestManagement.holds.alternateCheckoutLoanPeriod.intervalId"),
            Some(ErrorToken::SelectRequired)
        );
    }
}
