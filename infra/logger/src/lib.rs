//! # Logger
//!
//! Installs the global `tracing` subscriber for roster from its `logging` settings.
//!
//! * **Console**: compact, colored lines on stdout (or JSON lines).
//! * **File**: non-blocking, daily-rolling `<name>.<date>.log` files in `path`, keeping the
//!   last ten days.
//! * **Filtering**: `level` is the default; `env_filter` directives (for example
//!   `"roster_collection=debug,roster_storage=info"`) take over from `RUST_LOG`.
//!
//! ## Example
//!
//! ```rust
//! use roster_domain::config::LoggingSettings;
//! use roster_logger::Logger;
//!
//! let settings = LoggingSettings { level: "debug".to_owned(), ..LoggingSettings::default() };
//! let _logger = Logger::from_settings(&settings).unwrap();
//! tracing::debug!("ready");
//! ```

mod error;
mod layers;
mod settings;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use crate::settings::parse_level;
pub use tracing::level_filters::LevelFilter;

use private::Sealed;
use roster_domain::config::LoggingSettings;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}

/// A builder for the global tracing subscriber.
///
/// Usually obtained from [`LoggingSettings`] via `TryFrom`, or through [`Logger::from_settings`].
#[allow(private_bounds)]
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName> {
    name: N,
    level: LevelFilter,
    console: bool,
    json: bool,
    path: Option<PathBuf>,
    env_filter: Option<String>,
}

impl LoggerBuilder<NoName> {
    /// Sets the name of the logger; it also prefixes rolling log files.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder {
            name: WithName(name.into()),
            level: self.level,
            console: self.console,
            json: self.json,
            path: self.path,
            env_filter: self.env_filter,
        }
    }
}

impl LoggerBuilder<WithName> {
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Emits JSON lines instead of the human-readable format, on console and file alike.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Directory for rolling log files.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Explicit filter directives; they replace `RUST_LOG` and must parse.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Consumes the builder and initializes the global tracing subscriber.
    ///
    /// Keep the returned [`Logger`] alive while file output should be flushed.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for a blank name, invalid filter
    /// directives, or when neither console nor file output is enabled.
    /// Returns [`LoggerError::Io`] or [`LoggerError::Appender`] if the log directory cannot
    /// be prepared.
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already been set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let name = self.name.0;
        if name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be empty".into(),
                context: None,
            });
        }
        if !self.console && self.path.is_none() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
                context: Some(format!("logger '{name}'").into()),
            });
        }

        let filter = layers::env_filter(self.level, self.env_filter.as_deref())?;

        let mut outputs = Vec::with_capacity(2);
        if self.console {
            outputs.push(layers::console_layer(self.json));
        }
        let guard = match &self.path {
            Some(path) => {
                let (file, guard) = layers::file_layer(&name, path, self.json)?;
                outputs.push(file);
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry().with(filter).with(outputs).try_init()?;

        tracing::debug!(
            logger = %name,
            level = %self.level,
            path = ?self.path,
            json = self.json,
            "Logging initialized"
        );
        Ok(Logger { guard })
    }
}

/// A handle to the initialized logging system.
///
/// Holds the background file writer, if any. Drop it only when the application is
/// shutting down.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a builder with console output at `INFO`; a name is required before `init`.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn builder() -> LoggerBuilder {
        LoggerBuilder {
            name: NoName,
            level: LevelFilter::INFO,
            console: true,
            json: false,
            path: None,
            env_filter: None,
        }
    }

    /// Installs the subscriber described by the `logging` config section.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for an unknown level name, plus every
    /// error of [`LoggerBuilder::init`].
    pub fn from_settings(settings: &LoggingSettings) -> Result<Self, LoggerError> {
        LoggerBuilder::try_from(settings)?.init()
    }

    /// Returns a reference to the underlying worker guard, if present.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}
