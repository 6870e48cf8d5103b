//! # Settings-form contract
//!
//! Every settings screen pairs a form-values type with a validator and a normalizer.
//! Submission always validates first; normalization only runs on values that passed.
//!
//! Forms persisted as [`ConfigRecord`]s (checkout, loan history) additionally implement
//! [`ConfigForm`] and get [`load`]/[`save`] against any [`ConfigStore`].

use crate::format_context;
use crate::store::{ConfigRecord, ConfigStore, StoreError};
use circ_domain::validation::ErrorMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::borrow::Cow;
use tracing::{debug, info, warn};

pub trait SettingsForm {
    /// Values as edited by the host form.
    type Values;
    /// Record handed to persistence.
    type Record: Serialize;

    /// Form name used in log events.
    const NAME: &'static str;

    fn validate(values: &Self::Values) -> ErrorMap;
    fn normalize(values: &Self::Values) -> Self::Record;
}

/// A form whose record lives in a [`ConfigStore`] under a fixed module/config name.
pub trait ConfigForm: SettingsForm {
    const MODULE: &'static str;
    const CONFIG_NAME: &'static str;

    /// Projects stored records into form values; must never fail.
    fn initial_values(records: &[ConfigRecord]) -> Self::Values;
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Submission rejected{}: {} invalid field(s)", format_context(.context), .errors.len())]
    Invalid { errors: ErrorMap, context: Option<Cow<'static, str>> },

    #[error("Settings store error{}: {source}", format_context(.context))]
    Store { source: StoreError, context: Option<Cow<'static, str>> },

    #[error("Serialization error{}: {source}", format_context(.context))]
    Serialize { source: serde_json::Error, context: Option<Cow<'static, str>> },
}

impl SubmissionError {
    /// Field errors of a rejected submission.
    pub const fn errors(&self) -> Option<&ErrorMap> {
        match self {
            Self::Invalid { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

impl From<StoreError> for SubmissionError {
    fn from(source: StoreError) -> Self {
        Self::Store { source, context: None }
    }
}

impl From<serde_json::Error> for SubmissionError {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize { source, context: None }
    }
}

pub trait SubmissionErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, SubmissionError>;
}

impl<T> SubmissionErrorExt<T> for Result<T, StoreError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, SubmissionError> {
        self.map_err(|source| SubmissionError::Store { source, context: Some(context.into()) })
    }
}

impl<T> SubmissionErrorExt<T> for Result<T, serde_json::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, SubmissionError> {
        self.map_err(|source| SubmissionError::Serialize { source, context: Some(context.into()) })
    }
}

/// Validates `values` and, only when no field is invalid, normalizes them.
///
/// # Errors
/// Returns [`SubmissionError::Invalid`] carrying the full error map.
pub fn prepare_submission<F: SettingsForm>(values: &F::Values) -> Result<F::Record, SubmissionError> {
    let errors = F::validate(values);
    if !errors.is_empty() {
        debug!(form = F::NAME, invalid = errors.len(), "Submission blocked by validation");
        return Err(SubmissionError::Invalid { errors, context: Some(Cow::Borrowed(F::NAME)) });
    }
    Ok(F::normalize(values))
}

/// Reads the stored records of `F` and projects them into form values.
///
/// # Errors
/// Returns [`SubmissionError::Store`] when the store cannot be read.
pub fn load<F: ConfigForm>(store: &impl ConfigStore) -> Result<F::Values, SubmissionError> {
    let records = store.records(F::MODULE, F::CONFIG_NAME).context("Reading stored settings")?;
    Ok(F::initial_values(&records))
}

/// Submits `values` and writes the normalized record, updating the first stored
/// record of `F` or creating one.
///
/// # Errors
/// [`SubmissionError::Invalid`] when validation fails; store and serialization
/// failures otherwise.
pub fn save<F: ConfigForm>(
    store: &mut impl ConfigStore,
    values: &F::Values,
) -> Result<ConfigRecord, SubmissionError> {
    let normalized = prepare_submission::<F>(values)?;
    let value = serde_json::to_string(&normalized).context("Serializing settings record")?;

    let existing =
        store.records(F::MODULE, F::CONFIG_NAME).context("Reading stored settings")?.into_iter().next();
    let record = match existing {
        Some(mut record) => {
            record.value = value;
            record
        },
        None => ConfigRecord::new(F::MODULE, F::CONFIG_NAME, value),
    };

    let saved = store.write(record).context("Writing settings record")?;
    info!(form = F::NAME, id = saved.id.as_deref().unwrap_or_default(), "Settings saved");
    Ok(saved)
}

/// Parses the first record's JSON value spread over `defaults`: stored keys win,
/// missing keys keep their default.
///
/// Keys are taken one at a time; a stored key whose value does not fit `T` (a `null`
/// or a mistyped value) is skipped and keeps its default. Nothing stored, unparsable
/// JSON or a non-object value yield `defaults`. Malformed content is logged.
pub fn merge_stored<T>(records: &[ConfigRecord], defaults: T) -> T
where
    T: Serialize + DeserializeOwned,
{
    let Some(record) = records.first() else {
        return defaults;
    };

    let stored = match serde_json::from_str::<Value>(&record.value) {
        Ok(Value::Object(stored)) => stored,
        Ok(_) => {
            warn!(module = %record.module, config = %record.config_name, "Stored settings are not an object, using defaults");
            return defaults;
        },
        Err(e) => {
            warn!(module = %record.module, config = %record.config_name, error = %e, "Stored settings are malformed, using defaults");
            return defaults;
        },
    };

    let Ok(Value::Object(mut merged)) = serde_json::to_value(&defaults) else {
        return defaults;
    };
    let Ok(mut current) = serde_json::from_value::<T>(Value::Object(merged.clone())) else {
        return defaults;
    };

    for (key, value) in stored {
        let previous = merged.insert(key.clone(), value);
        match serde_json::from_value::<T>(Value::Object(merged.clone())) {
            Ok(accepted) => current = accepted,
            Err(e) => {
                warn!(module = %record.module, config = %record.config_name, key = %key, error = %e, "Ignoring stored setting that does not fit, keeping its default");
                match previous {
                    Some(previous) => merged.insert(key, previous),
                    None => merged.remove(&key),
                };
            },
        }
    }

    current
}
