//! Key/value configuration records and the store seam they are read from and written to.
//!
//! Persistence belongs to the host; this module only fixes the record shape and the
//! trait a host backend implements. [`MemoryConfigStore`] backs tests and embedded use.

use crate::{format_context, safe_nanoid};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::debug;

/// A stored settings entry. `value` holds the settings object as a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub module: String,
    pub config_name: String,
    #[serde(default)]
    pub value: String,
}

impl ConfigRecord {
    pub fn new(
        module: impl Into<String>,
        config_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self { id: None, module: module.into(), config_name: config_name.into(), value: value.into() }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Config store unavailable{}: {message}", format_context(.context))]
    Unavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Config record not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl StoreError {
    pub fn unavailable(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Unavailable { message: message.into(), context: None }
    }

    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound { message: message.into(), context: None }
    }
}

/// Backend holding configuration records, keyed by module and config name.
pub trait ConfigStore {
    /// Every record stored under `module`/`config_name`, oldest first.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the backend cannot be read.
    fn records(&self, module: &str, config_name: &str) -> Result<Vec<ConfigRecord>, StoreError>;

    /// Creates the record when it has no id, replaces the stored one otherwise.
    /// Returns the record as stored.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] when updating an id the backend does not know.
    fn write(&mut self, record: ConfigRecord) -> Result<ConfigRecord, StoreError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryConfigStore {
    records: Vec<ConfigRecord>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store; records without an id are assigned one.
    pub fn with_records(records: impl IntoIterator<Item = ConfigRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|mut r| {
                r.id.get_or_insert_with(|| safe_nanoid!());
                r
            })
            .collect();
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn records(&self, module: &str, config_name: &str) -> Result<Vec<ConfigRecord>, StoreError> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.module == module && r.config_name == config_name)
            .cloned()
            .collect())
    }

    fn write(&mut self, mut record: ConfigRecord) -> Result<ConfigRecord, StoreError> {
        let Some(id) = record.id.clone() else {
            record.id = Some(safe_nanoid!());
            debug!(module = %record.module, config = %record.config_name, "Created config record");
            self.records.push(record.clone());
            return Ok(record);
        };

        let slot = self
            .records
            .iter_mut()
            .find(|r| r.id.as_deref() == Some(id.as_str()))
            .ok_or_else(|| StoreError::not_found(format!("no config record with id `{id}`")))?;
        *slot = record.clone();
        Ok(record)
    }
}
