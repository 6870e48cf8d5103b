use circ_domain::input::{self, NumberInput};
use circ_domain::metadata::Metadata;
use circ_domain::serde_helpers::blank_as_none;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Unit an overdue fine accrues per.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum FineInterval {
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

circ_domain::string_enum_serde!(FineInterval);

/// Amount charged per interval.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverdueFine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<NumberInput>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub interval_id: Option<FineInterval>,
}

impl OverdueFine {
    pub fn new(quantity: impl Into<NumberInput>, interval_id: FineInterval) -> Self {
        Self { quantity: Some(quantity.into()), interval_id: Some(interval_id) }
    }

    fn zero() -> Self {
        Self { quantity: Some(NumberInput::Integer(0)), interval_id: None }
    }

    pub fn is_charged(&self) -> bool {
        input::is_positive(self.quantity.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinePolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overdue_fine: Option<OverdueFine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count_closed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_overdue_fine: Option<NumberInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forgive_overdue_fine: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overdue_recall_fine: Option<OverdueFine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grace_period_recall: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_overdue_recall_fine: Option<NumberInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Numeric fields of a fine policy, addressable by their form path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum FineField {
    OverdueFine,
    MaxOverdueFine,
    OverdueRecallFine,
    MaxOverdueRecallFine,
}

impl FineField {
    pub const fn path(self) -> &'static str {
        match self {
            Self::OverdueFine => "overdueFine.quantity",
            Self::MaxOverdueFine => "maxOverdueFine",
            Self::OverdueRecallFine => "overdueRecallFine.quantity",
            Self::MaxOverdueRecallFine => "maxOverdueRecallFine",
        }
    }
}

impl FinePolicy {
    /// Values a new policy form starts from.
    pub fn default_policy() -> Self {
        Self {
            count_closed: Some(true),
            forgive_overdue_fine: Some(true),
            grace_period_recall: Some(true),
            overdue_fine: Some(OverdueFine::zero()),
            max_overdue_fine: Some(NumberInput::Integer(0)),
            overdue_recall_fine: Some(OverdueFine::zero()),
            max_overdue_recall_fine: Some(NumberInput::Integer(0)),
            ..Self::default()
        }
    }

    /// # Errors
    /// Fails when `value` is not a fine-policy object.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn value(&self, field: FineField) -> Option<&NumberInput> {
        match field {
            FineField::OverdueFine => self.overdue_fine.as_ref()?.quantity.as_ref(),
            FineField::MaxOverdueFine => self.max_overdue_fine.as_ref(),
            FineField::OverdueRecallFine => self.overdue_recall_fine.as_ref()?.quantity.as_ref(),
            FineField::MaxOverdueRecallFine => self.max_overdue_recall_fine.as_ref(),
        }
    }

    pub fn has_negative_value(&self, field: FineField) -> bool {
        self.value(field).is_some_and(NumberInput::is_negative)
    }

    pub fn is_overdue_fine(&self) -> bool {
        self.overdue_fine.as_ref().is_some_and(OverdueFine::is_charged)
    }

    pub fn is_overdue_recall_fine(&self) -> bool {
        self.overdue_recall_fine.as_ref().is_some_and(OverdueFine::is_charged)
    }

    /// A charged overdue fine needs a maximum greater than zero.
    pub fn is_required_max_value(&self) -> bool {
        self.is_overdue_fine() && !input::is_positive(self.max_overdue_fine.as_ref())
    }

    pub fn is_required_max_recall_overdue_fine(&self) -> bool {
        self.is_overdue_recall_fine() && !input::is_positive(self.max_overdue_recall_fine.as_ref())
    }
}
