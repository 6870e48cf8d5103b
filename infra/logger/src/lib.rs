//! # Logger
//!
//! Installs the global `tracing` subscriber for a host of the settings core: a
//! compact console layer, an optional daily-rolling file in a directory, and an
//! `EnvFilter` built from the configured level plus optional directives.
//!
//! ```rust
//! # use circ_logger::{LevelFilter, Logger};
//! let _logger = Logger::builder("circulation").level(LevelFilter::DEBUG).init().unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    level: LevelFilter,
    console: bool,
    json: bool,
    directory: Option<PathBuf>,
    max_files: usize,
    env_filter: Option<String>,
}

impl LoggerBuilder {
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Writes JSON lines instead of the compact text format.
    #[must_use]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Also logs to `<directory>/<name>.<date>.log`, rotated daily.
    #[must_use]
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    #[must_use]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }

    /// Extra filter directives (`circ_loan_policy=debug`). `RUST_LOG` is read only
    /// when none are given.
    #[must_use]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Installs the global subscriber.
    ///
    /// The returned [`Logger`] owns the file writer's worker guard; keep it alive
    /// until shutdown so buffered lines are flushed.
    ///
    /// # Errors
    /// [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`, a bad
    /// filter or no enabled output. [`LoggerError::Subscriber`] when a subscriber is
    /// already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.check()?;
        let filter = self.build_env_filter()?;

        let mut layers = Vec::new();
        if self.console {
            let console = layer().with_ansi(!self.json);
            layers.push(if self.json { console.json().boxed() } else { console.compact().boxed() });
        }

        let guard = match &self.directory {
            Some(directory) => {
                fs::create_dir_all(directory)
                    .context(format!("Creating log directory {}", directory.display()))?;

                let appender = RollingFileAppender::builder()
                    .rotation(Rotation::DAILY)
                    .filename_prefix(&self.name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(self.max_files)
                    .build(directory)
                    .context(format!("Opening log file in {}", directory.display()))?;
                let (writer, guard) = tracing_appender::non_blocking(appender);

                let file = layer().with_writer(writer).with_ansi(false);
                layers.push(if self.json { file.json().boxed() } else { file.boxed() });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::invalid("Neither console nor file output is enabled"));
        }

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;
        tracing::debug!(name = %self.name, level = %self.level, "Logger initialized");

        Ok(Logger { guard })
    }

    fn check(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::invalid("Logger name cannot be empty"));
        }
        if self.directory.is_some() && self.max_files == 0 {
            return Err(LoggerError::invalid("max_files must be greater than zero"));
        }
        Ok(())
    }

    fn build_env_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.env_filter {
            Some(directives) => builder
                .parse(directives)
                .map_err(|e| LoggerError::invalid(format!("Invalid env filter '{directives}': {e}"))),
            None => Ok(builder.from_env_lossy()),
        }
    }
}

/// Handle to the installed subscriber.
#[must_use = "Dropping the handle stops the background file writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a builder. `name` prefixes the rolling log files.
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            level: LevelFilter::INFO,
            console: true,
            json: false,
            directory: None,
            max_files: DEFAULT_MAX_FILES,
            env_filter: None,
        }
    }

    pub const fn has_file_output(&self) -> bool {
        self.guard.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder("circulation");
        assert!(builder.console);
        assert!(!builder.json);
        assert_eq!(builder.level, LevelFilter::INFO);
        assert_eq!(builder.max_files, DEFAULT_MAX_FILES);
        assert!(builder.directory.is_none());
    }

    #[test]
    fn rejects_blank_name() {
        let err = Logger::builder("  ").init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn rejects_zero_max_files_for_file_output() {
        let err = Logger::builder("circulation").directory("logs").max_files(0).init().unwrap_err();
        assert_eq!(err.to_string(), "Invalid logger configuration: max_files must be greater than zero");
    }

    #[test]
    fn rejects_no_output() {
        let err = Logger::builder("circulation").console(false).init().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn bad_filter_is_reported() {
        let err = Logger::builder("circulation").env_filter("circ_checkout=[").init().unwrap_err();
        assert!(err.to_string().contains("Invalid env filter"));
    }

    #[test]
    fn context_is_rendered() {
        let res: Result<(), std::io::Error> = Err(std::io::Error::other("denied"));
        let err = res.context("Creating log directory logs").unwrap_err();
        assert_eq!(err.to_string(), "Internal logger error (Creating log directory logs): denied");
    }
}
