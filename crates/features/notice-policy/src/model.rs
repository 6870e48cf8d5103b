use circ_domain::input::NumberInput;
use circ_domain::metadata::Metadata;
use circ_domain::options::SelectOption;
use circ_domain::period::{IntervalId, Period};
use circ_domain::serde_helpers::blank_as_none;
use circ_patron_notices::{PatronNoticeCategory, PatronNoticeTemplate};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
pub enum TriggeringEvent {
    #[strum(serialize = "Check in")]
    CheckIn,
    #[strum(serialize = "Check out")]
    CheckOut,
    #[strum(serialize = "Due date")]
    DueDate,
    #[strum(serialize = "Paging request")]
    PagingRequest,
    #[strum(serialize = "Hold request")]
    HoldRequest,
    #[strum(serialize = "Recall request")]
    RecallRequest,
    #[strum(serialize = "Recall loanee")]
    RecallLoanee,
    #[strum(serialize = "Cancel request")]
    CancelRequest,
    #[strum(serialize = "Available")]
    Available,
    #[strum(serialize = "Request expiration")]
    RequestExpiration,
    #[strum(serialize = "Hold expiration")]
    HoldExpiration,
}

circ_domain::string_enum_serde!(TriggeringEvent);

impl TriggeringEvent {
    pub const LOAN: [Self; 3] = [Self::CheckIn, Self::CheckOut, Self::DueDate];

    pub const REQUEST: [Self; 8] = [
        Self::PagingRequest,
        Self::HoldRequest,
        Self::RecallRequest,
        Self::RecallLoanee,
        Self::CancelRequest,
        Self::Available,
        Self::RequestExpiration,
        Self::HoldExpiration,
    ];

    /// Events that happen at a point in time rather than on a user action.
    pub const fn is_time_based(self) -> bool {
        matches!(self, Self::DueDate | Self::RequestExpiration | Self::HoldExpiration)
    }

    /// The notice list (and template category) the event belongs to.
    pub const fn category(self) -> PatronNoticeCategory {
        match self {
            Self::CheckIn | Self::CheckOut | Self::DueDate => PatronNoticeCategory::Loan,
            _ => PatronNoticeCategory::Request,
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
pub enum NoticeFormat {
    #[default]
    Email,
}

circ_domain::string_enum_serde!(NoticeFormat);

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
pub enum Frequency {
    #[default]
    #[strum(serialize = "One time")]
    OneTime,
    #[strum(serialize = "Recurring")]
    Recurring,
}

circ_domain::string_enum_serde!(Frequency);

/// When a time-based notice is sent relative to its event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing: Option<NumberInput>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub interval_id: Option<IntervalId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_period: Option<Period>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeRule {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub template_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub format: Option<NoticeFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub frequency: Option<Frequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_time: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub triggering_event: Option<TriggeringEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_options: Option<SendOptions>,
}

impl NoticeRule {
    /// A freshly added rule: email, sent once, not real time.
    pub fn new_rule() -> Self {
        Self {
            format: Some(NoticeFormat::Email),
            frequency: Some(Frequency::OneTime),
            real_time: Some(false),
            ..Self::default()
        }
    }

    pub fn is_time_based(&self) -> bool {
        self.triggering_event.is_some_and(TriggeringEvent::is_time_based)
    }

    pub fn is_recurring(&self) -> bool {
        self.frequency == Some(Frequency::Recurring)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticePolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub loan_notices: Vec<NoticeRule>,
    #[serde(default)]
    pub request_notices: Vec<NoticeRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl NoticePolicy {
    /// # Errors
    /// Fails when `value` is not a notice-policy object.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn is_active(&self) -> bool {
        self.active == Some(true)
    }
}

/// Template dropdown for one notice list: active templates of `category`.
pub fn template_options(templates: &[PatronNoticeTemplate], category: PatronNoticeCategory) -> Vec<SelectOption> {
    templates
        .iter()
        .filter(|t| t.is_active() && t.category == Some(category))
        .filter_map(|t| Some(SelectOption::new(t.id.as_deref()?, t.name.as_deref().unwrap_or_default())))
        .collect()
}
