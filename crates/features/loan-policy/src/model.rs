use circ_domain::input::NumberInput;
use circ_domain::metadata::Metadata;
use circ_domain::options::SelectOption;
use circ_domain::period::{IntervalId, Period};
use circ_domain::serde_helpers::blank_as_none;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
pub enum LoanProfile {
    Rolling,
    Fixed,
    Indefinite,
}

circ_domain::string_enum_serde!(LoanProfile);

/// How a due date falling on a closed day or outside opening hours is moved.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DueDateManagement {
    CurrentDueDate,
    EndOfThePreviousOpenDay,
    EndOfTheNextOpenDay,
    CurrentDueDateTime,
    EndOfTheCurrentServicePointHours,
    BeginningOfTheNextOpenServicePointHours,
}

circ_domain::string_enum_serde!(DueDateManagement);

impl DueDateManagement {
    pub const LONG_TERM: [Self; 3] =
        [Self::CurrentDueDate, Self::EndOfThePreviousOpenDay, Self::EndOfTheNextOpenDay];

    pub const SHORT_TERM: [Self; 3] = [
        Self::CurrentDueDateTime,
        Self::EndOfTheCurrentServicePointHours,
        Self::BeginningOfTheNextOpenServicePointHours,
    ];

    pub const fn is_short_term(self) -> bool {
        matches!(
            self,
            Self::CurrentDueDateTime
                | Self::EndOfTheCurrentServicePointHours
                | Self::BeginningOfTheNextOpenServicePointHours
        )
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CurrentDueDate => "Keep the current due date",
            Self::EndOfThePreviousOpenDay => "Move to the end of the previous open day",
            Self::EndOfTheNextOpenDay => "Move to the end of the next open day",
            Self::CurrentDueDateTime => "Keep the current due date/time",
            Self::EndOfTheCurrentServicePointHours => {
                "Move to the end of the current service point hours"
            },
            Self::BeginningOfTheNextOpenServicePointHours => {
                "Move to the beginning of the next open service point hours"
            },
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RenewFrom {
    CurrentDueDate,
    SystemDate,
}

circ_domain::string_enum_serde!(RenewFrom);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoansPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub profile_id: Option<LoanProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub fixed_due_date_schedule_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub closed_library_due_date_management_id: Option<DueDateManagement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_time_offset: Option<Period>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grace_period: Option<Period>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenewalsPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlimited: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_allowed: Option<NumberInput>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub renew_from_id: Option<RenewFrom>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub different_period: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub alternate_fixed_due_date_schedule_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recalls {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_grace_period: Option<Period>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_guaranteed_loan_period: Option<Period>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recall_return_interval: Option<Period>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_checkout_loan_period: Option<Period>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renew_items_with_request: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_renewal_loan_period: Option<Period>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestManagement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recalls: Option<Recalls>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holds: Option<Holds>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loanable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loans_policy: Option<LoansPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renewable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renewals_policy: Option<RenewalsPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_management: Option<RequestManagement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl LoanPolicy {
    /// Values a new policy form starts from.
    pub fn default_policy() -> Self {
        Self {
            loanable: Some(true),
            loans_policy: Some(LoansPolicy {
                profile_id: Some(LoanProfile::Rolling),
                closed_library_due_date_management_id: Some(DueDateManagement::CurrentDueDate),
                ..LoansPolicy::default()
            }),
            renewable: Some(true),
            renewals_policy: Some(RenewalsPolicy {
                unlimited: Some(false),
                renew_from_id: Some(RenewFrom::CurrentDueDate),
                different_period: Some(false),
                ..RenewalsPolicy::default()
            }),
            request_management: Some(RequestManagement {
                recalls: None,
                holds: Some(Holds { renew_items_with_request: Some(false), ..Holds::default() }),
            }),
            ..Self::default()
        }
    }

    /// # Errors
    /// Fails when `value` is not a loan-policy object.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Fills the loan, renewal and request sections with their defaults the first
    /// time a policy becomes loanable, preselecting the period dropdowns.
    #[must_use]
    pub fn with_section_defaults(mut self) -> Self {
        if !self.is_loanable() || self.loans_policy.is_some() {
            return self;
        }
        let defaults = Self::default_policy();

        let mut loans = defaults.loans_policy.unwrap_or_default();
        loans.period = Some(Period::with_interval(IntervalId::Days));
        loans.opening_time_offset = Some(Period::with_interval(IntervalId::Hours));
        loans.grace_period = Some(Period::with_interval(IntervalId::Hours));

        self.loans_policy = Some(loans);
        self.renewable = Some(true);
        self.renewals_policy = self.renewals_policy.or(defaults.renewals_policy);
        self.request_management = self.request_management.or(defaults.request_management);
        self
    }

    pub fn is_loanable(&self) -> bool {
        self.loanable == Some(true)
    }

    pub fn is_renewable(&self) -> bool {
        self.renewable == Some(true)
    }

    pub fn profile(&self) -> Option<LoanProfile> {
        self.loans_policy.as_ref()?.profile_id
    }

    pub fn is_profile_rolling(&self) -> bool {
        self.is_loanable() && self.profile() == Some(LoanProfile::Rolling)
    }

    pub fn is_profile_fixed(&self) -> bool {
        self.is_loanable() && self.profile() == Some(LoanProfile::Fixed)
    }

    /// Rolling loans measured in minutes or hours.
    pub fn is_short_term_loan(&self) -> bool {
        self.is_profile_rolling()
            && self.loans_policy.as_ref().and_then(|l| l.period.as_ref()).is_some_and(Period::is_short_term)
    }

    pub fn is_opening_time_offset_active(&self) -> bool {
        self.is_short_term_loan()
            && self.loans_policy.as_ref().and_then(|l| l.closed_library_due_date_management_id)
                == Some(DueDateManagement::BeginningOfTheNextOpenServicePointHours)
    }

    pub fn is_unlimited_renewals(&self) -> bool {
        self.renewals_policy.as_ref().and_then(|r| r.unlimited) == Some(true)
    }

    pub fn is_different_period(&self) -> bool {
        self.renewals_policy.as_ref().and_then(|r| r.different_period) == Some(true)
    }

    pub fn is_renew_from_system_date(&self) -> bool {
        self.renewals_policy.as_ref().and_then(|r| r.renew_from_id) == Some(RenewFrom::SystemDate)
    }

    /// Closed-library options offered for the current loan period.
    pub fn due_date_management_options(&self) -> &'static [DueDateManagement] {
        if self.is_short_term_loan() { &DueDateManagement::SHORT_TERM } else { &DueDateManagement::LONG_TERM }
    }
}

/// Fixed due-date schedule as listed for the schedule dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedDueDateSchedule {
    pub id: String,
    pub name: String,
}

/// Schedule dropdown entries sorted by name.
pub fn schedule_options(schedules: &[FixedDueDateSchedule]) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> =
        schedules.iter().map(|s| SelectOption::new(s.id.as_str(), s.name.as_str())).collect();
    options.sort_by(|a, b| a.label.cmp(&b.label));
    options
}
