use crate::model::{Holds, LoanPolicy, LoanProfile, Recalls};
use circ_domain::period::Period;
use tracing::debug;

/// Returns a copy of `policy` holding only the settings its form shows.
pub fn normalize(policy: &LoanPolicy) -> LoanPolicy {
    let mut normalized = policy.clone();

    if !normalized.is_loanable() {
        debug!("Dropping loan settings of a non-loanable policy");
        normalized.loans_policy = None;
        normalized.renewals_policy = None;
        normalized.request_management = None;
        return normalized;
    }

    drop_blank_periods(&mut normalized);

    let profile = normalized.profile();
    let offset_active = normalized.is_opening_time_offset_active();
    let renewable = normalized.is_renewable();
    let unlimited = normalized.is_unlimited_renewals();
    let different_period = normalized.is_different_period();

    if let Some(loans) = normalized.loans_policy.as_mut() {
        match profile {
            Some(LoanProfile::Fixed) => loans.period = None,
            Some(LoanProfile::Indefinite) => {
                loans.period = None;
                loans.fixed_due_date_schedule_id = None;
            },
            Some(LoanProfile::Rolling) | None => {},
        }
        if !offset_active {
            loans.opening_time_offset = None;
        }
    }

    if !renewable {
        normalized.renewals_policy = None;
    } else if let Some(renewals) = normalized.renewals_policy.as_mut() {
        if unlimited {
            renewals.number_allowed = None;
        }
        if !different_period {
            renewals.period = None;
            renewals.alternate_fixed_due_date_schedule_id = None;
        }
    }

    normalized
}

fn drop_blank_periods(policy: &mut LoanPolicy) {
    if let Some(loans) = policy.loans_policy.as_mut() {
        keep_filled(&mut loans.period);
        keep_filled(&mut loans.opening_time_offset);
        keep_filled(&mut loans.grace_period);
    }
    if let Some(renewals) = policy.renewals_policy.as_mut() {
        keep_filled(&mut renewals.period);
    }
    let Some(requests) = policy.request_management.as_mut() else {
        return;
    };
    if let Some(Recalls { alternate_grace_period, minimum_guaranteed_loan_period, recall_return_interval }) =
        requests.recalls.as_mut()
    {
        keep_filled(alternate_grace_period);
        keep_filled(minimum_guaranteed_loan_period);
        keep_filled(recall_return_interval);
    }
    if let Some(Holds { alternate_checkout_loan_period, alternate_renewal_loan_period, .. }) =
        requests.holds.as_mut()
    {
        keep_filled(alternate_checkout_loan_period);
        keep_filled(alternate_renewal_loan_period);
    }
}

/// A period without a typed duration is dropped, whatever the dropdown shows.
fn keep_filled(period: &mut Option<Period>) {
    if period.as_ref().is_some_and(|p| !p.has_duration()) {
        *period = None;
    }
}
