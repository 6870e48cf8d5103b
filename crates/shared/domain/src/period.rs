use crate::input::NumberInput;
use crate::serde_helpers::blank_as_none;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Unit of a [`Period`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
pub enum IntervalId {
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
}

crate::string_enum_serde!(IntervalId);

impl IntervalId {
    /// Minutes and hours make a loan short-term.
    pub const fn is_short_term(self) -> bool {
        matches!(self, Self::Minutes | Self::Hours)
    }
}

/// A duration paired with its unit, as edited by a period control.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<NumberInput>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub interval_id: Option<IntervalId>,
}

impl Period {
    pub fn new(duration: impl Into<NumberInput>, interval_id: IntervalId) -> Self {
        Self { duration: Some(duration.into()), interval_id: Some(interval_id) }
    }

    /// An empty period with only the dropdown preselected.
    pub const fn with_interval(interval_id: IntervalId) -> Self {
        Self { duration: None, interval_id: Some(interval_id) }
    }

    /// `true` once the user typed something into the duration box.
    pub fn has_duration(&self) -> bool {
        self.duration.as_ref().is_some_and(|d| !d.is_blank())
    }

    pub fn is_zero_or_blank(&self) -> bool {
        self.duration.as_ref().is_none_or(NumberInput::is_zero_or_blank)
    }

    pub fn is_short_term(&self) -> bool {
        self.interval_id.is_some_and(IntervalId::is_short_term)
    }
}
