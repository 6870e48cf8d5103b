//! Lenient form inputs.
//!
//! Form state is untyped: a numeric text field may hold a JSON number, a numeric
//! string, an empty string or garbage. [`NumberInput`] keeps the raw value untouched
//! (so normalization can round-trip it) and applies browser-style numeric coercion
//! when a rule asks for a number: blank is zero, anything unparsable is not a number.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw value of a numeric form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl NumberInput {
    /// Numeric value after coercion; `None` when the input is not a number.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Float(n) => n.is_finite().then_some(*n),
            Self::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    Some(0.0)
                } else {
                    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
                }
            },
        }
    }

    /// `true` for an empty or whitespace-only text value.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }

    /// `true` when the field was left empty or holds a numeric zero.
    pub fn is_zero_or_blank(&self) -> bool {
        self.is_blank() || self.as_number().is_some_and(|n| n.abs() < f64::EPSILON)
    }

    pub fn is_positive(&self) -> bool {
        self.as_number().is_some_and(|n| n > 0.0)
    }

    pub fn is_negative(&self) -> bool {
        self.as_number().is_some_and(|n| n < 0.0)
    }

    /// Whole-number value, if the coerced number has no fractional part.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn as_integer(&self) -> Option<i64> {
        if let Self::Integer(n) = self {
            return Some(*n);
        }
        let n = self.as_number()?;
        let in_range = n >= i64::MIN as f64 && n <= i64::MAX as f64;
        (n.fract() == 0.0 && in_range).then_some(n as i64)
    }

    /// Integer value strictly greater than zero that fits in a `u32`.
    pub fn as_positive_integer(&self) -> Option<u32> {
        self.as_integer().filter(|n| *n > 0).and_then(|n| u32::try_from(n).ok())
    }

    pub fn is_positive_integer(&self) -> bool {
        self.as_integer().is_some_and(|n| n > 0)
    }

    pub fn is_non_negative_integer(&self) -> bool {
        self.as_integer().is_some_and(|n| n >= 0)
    }

    pub fn is_non_negative_number(&self) -> bool {
        self.as_number().is_some_and(|n| n >= 0.0)
    }
}

impl From<i64> for NumberInput {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for NumberInput {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for NumberInput {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for NumberInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for NumberInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for NumberInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// `true` when an optional numeric field holds a value greater than zero.
pub fn is_positive(value: Option<&NumberInput>) -> bool {
    value.is_some_and(NumberInput::is_positive)
}

/// `true` when an optional numeric field holds something other than blank.
pub fn is_filled(value: Option<&NumberInput>) -> bool {
    value.is_some_and(|v| !v.is_blank())
}

/// Raw value of a boolean control that may submit `"true"`/`"false"` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoolInput {
    Bool(bool),
    Text(String),
}

impl BoolInput {
    /// Only `true` and the exact string `"true"` count as set.
    pub fn is_true(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Text(value) => value == "true",
        }
    }
}

impl Default for BoolInput {
    fn default() -> Self {
        Self::Bool(false)
    }
}

impl From<bool> for BoolInput {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for BoolInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}
