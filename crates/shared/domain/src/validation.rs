//! # Validation results
//!
//! Validators never fail; they return an [`ErrorMap`] keyed by dotted field path
//! (`loansPolicy.period.duration`). Every value is either a single [`ErrorToken`] or,
//! for sequence fields, a [`ListErrors`] holding one map per item plus an optional
//! error for the sequence as a whole. Tokens are message ids; resolving them into
//! text is the host's job.

use crate::input::NumberInput;
use crate::period::Period;
use serde::Serialize;
use std::collections::BTreeMap;
use strum_macros::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

/// Localized message id attached to an invalid field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, EnumIter, EnumString, IntoStaticStr,
)]
pub enum ErrorToken {
    #[strum(serialize = "ui-circulation.settings.validate.fillIn")]
    Required,
    #[strum(serialize = "ui-circulation.settings.validate.select")]
    SelectRequired,
    #[strum(serialize = "ui-circulation.settings.validate.isIntegerGreaterThanZero")]
    IntegerGreaterThanZero,
    #[strum(serialize = "ui-circulation.settings.validate.isIntegerGreaterThanOrEqualToZero")]
    IntegerGreaterThanOrEqualToZero,
    #[strum(serialize = "ui-circulation.settings.validate.isFloatGreaterThanZero")]
    NumberGreaterThanZero,
    #[strum(serialize = "ui-circulation.settings.validate.isFloatGreaterThanOrEqualToZero")]
    NumberGreaterThanOrEqualToZero,
    #[strum(serialize = "ui-circulation.settings.checkout.validate.selectContinue")]
    SelectPatronIdentifier,
    #[strum(serialize = "ui-circulation.settings.checkout.validate.timeoutDuration")]
    TimeoutDuration,
    #[strum(serialize = "ui-circulation.settings.finePolicy.validate.maxOverdueFine")]
    MaxOverdueFineRequired,
    #[strum(serialize = "ui-circulation.settings.finePolicy.validate.maxOverdueRecallFine")]
    MaxOverdueRecallFineRequired,
    #[strum(serialize = "ui-circulation.settings.lostItemFee.validate.chargeTo")]
    ProcessingFeeChargeTarget,
    #[strum(serialize = "ui-circulation.settings.noticePolicy.validate.triggeringEvent")]
    TriggeringEventMismatch,
    #[strum(serialize = "ui-circulation.settings.patronNotices.errors.nameExists")]
    NameExists,
}

crate::string_enum_serde!(ErrorToken);

impl ErrorToken {
    pub fn message_id(self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for ErrorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message_id())
    }
}

/// Errors of a sequence field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListErrors {
    /// One entry per submitted item; valid items have an empty map.
    pub items: Vec<ErrorMap>,
    /// Error for the sequence as a whole.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorToken>,
}

impl ListErrors {
    pub fn is_empty(&self) -> bool {
        self.error.is_none() && self.items.iter().all(ErrorMap::is_empty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldError {
    Token(ErrorToken),
    List(ListErrors),
}

/// Field path → error. An empty map means the values may be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<String, FieldError>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `token` for `path` unless the field already has an error.
    /// The first failing rule wins, as in the form's field-level display.
    pub fn insert(&mut self, path: impl Into<String>, token: ErrorToken) {
        self.0.entry(path.into()).or_insert(FieldError::Token(token));
    }

    /// Records sequence errors; an all-valid list is not recorded.
    pub fn insert_list(&mut self, path: impl Into<String>, list: ListErrors) {
        if !list.is_empty() {
            self.0.insert(path.into(), FieldError::List(list));
        }
    }

    pub fn get(&self, path: &str) -> Option<&FieldError> {
        self.0.get(path)
    }

    /// Token recorded directly on `path`, or the whole-sequence token of a list.
    pub fn token(&self, path: &str) -> Option<ErrorToken> {
        match self.0.get(path)? {
            FieldError::Token(token) => Some(*token),
            FieldError::List(list) => list.error,
        }
    }

    pub fn list(&self, path: &str) -> Option<&ListErrors> {
        match self.0.get(path)? {
            FieldError::List(list) => Some(list),
            FieldError::Token(_) => None,
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    /// `true` if `prefix` itself or any nested path below it has an error.
    pub fn has_errors_under(&self, prefix: &str) -> bool {
        self.0.keys().any(|path| {
            path == prefix
                || path.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('.'))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.0.iter().map(|(path, error)| (path.as_str(), error))
    }
}

/// Rule helpers shared by the per-policy validators.
///
/// Paths are joined by the caller; every helper records at most one token per path.
#[derive(Debug, Default)]
pub struct Checks {
    errors: ErrorMap,
}

impl Checks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&mut self, path: impl Into<String>, token: ErrorToken) {
        self.errors.insert(path, token);
    }

    /// Text must contain something other than whitespace.
    pub fn required_text(&mut self, path: &str, value: Option<&str>) {
        if value.is_none_or(|v| v.trim().is_empty()) {
            self.fail(path, ErrorToken::Required);
        }
    }

    /// A dropdown must have a non-placeholder option selected.
    pub fn required_select<T>(&mut self, path: &str, value: Option<&T>) {
        if value.is_none() {
            self.fail(path, ErrorToken::SelectRequired);
        }
    }

    /// Required field holding a whole number greater than zero.
    pub fn positive_integer(&mut self, path: &str, value: Option<&NumberInput>) {
        match value {
            None => self.fail(path, ErrorToken::Required),
            Some(v) if v.is_blank() => self.fail(path, ErrorToken::Required),
            Some(v) if !v.is_positive_integer() => {
                self.fail(path, ErrorToken::IntegerGreaterThanZero);
            },
            Some(_) => {},
        }
    }

    /// Optional field; when filled in it must be a whole number greater than zero.
    pub fn positive_integer_if_filled(&mut self, path: &str, value: Option<&NumberInput>) {
        if let Some(v) = value.filter(|v| !v.is_blank())
            && !v.is_positive_integer()
        {
            self.fail(path, ErrorToken::IntegerGreaterThanZero);
        }
    }

    /// Optional field; when filled in it must be a whole number `>= 0`.
    pub fn non_negative_integer_if_filled(&mut self, path: &str, value: Option<&NumberInput>) {
        if let Some(v) = value.filter(|v| !v.is_blank())
            && !v.is_non_negative_integer()
        {
            self.fail(path, ErrorToken::IntegerGreaterThanOrEqualToZero);
        }
    }

    /// Optional field; when filled in it must be a number `>= 0`.
    pub fn non_negative_number_if_filled(&mut self, path: &str, value: Option<&NumberInput>) {
        if let Some(v) = value.filter(|v| !v.is_blank())
            && !v.is_non_negative_number()
        {
            self.fail(path, ErrorToken::NumberGreaterThanOrEqualToZero);
        }
    }

    /// Required field holding a number greater than zero.
    pub fn positive_number(&mut self, path: &str, value: Option<&NumberInput>) {
        match value {
            None => self.fail(path, ErrorToken::Required),
            Some(v) if v.is_blank() => self.fail(path, ErrorToken::Required),
            Some(v) if !v.is_positive() => self.fail(path, ErrorToken::NumberGreaterThanZero),
            Some(_) => {},
        }
    }

    /// Required period: positive whole duration plus a selected interval.
    /// A missing period is reported on `path` itself.
    pub fn required_period(&mut self, path: &str, period: Option<&Period>) {
        let Some(period) = period else {
            self.fail(path, ErrorToken::Required);
            return;
        };
        self.positive_integer(&format!("{path}.duration"), period.duration.as_ref());
        self.required_select(&format!("{path}.intervalId"), period.interval_id.as_ref());
    }

    /// Optional period; once a duration is typed it must be a positive whole number
    /// with a selected interval.
    pub fn period_if_filled(&mut self, path: &str, period: Option<&Period>) {
        if let Some(period) = period.filter(|p| p.has_duration()) {
            self.required_period(path, Some(period));
        }
    }

    pub fn list(&mut self, path: &str, list: ListErrors) {
        self.errors.insert_list(path, list);
    }

    pub fn finish(self) -> ErrorMap {
        self.errors
    }
}
