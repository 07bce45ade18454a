use roster_domain::config::LoggingSettings;
use roster_logger::{Logger, LoggerError};

/// Installs the global tracing subscriber described by the `logging` config section.
///
/// Keep the returned [`Logger`] alive for as long as file output should be flushed.
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for an unknown level, an invalid env filter,
/// or when neither console nor file output is enabled.
/// Returns [`LoggerError::Subscriber`] if a global subscriber is already installed.
pub fn init_logging(settings: &LoggingSettings) -> Result<Logger, LoggerError> {
    Logger::from_settings(settings)
}
