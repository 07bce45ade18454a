use crate::error::{LoggerError, LoggerErrorExt};
use crate::{LoggerBuilder, WithName};
use roster_domain::config::LoggingSettings;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

/// Parses a level name such as `"info"` or `"WARN"` (case-insensitive; `"off"` disables output).
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for unknown level names.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(level.trim()).map_err(|e| LoggerError::InvalidConfiguration {
        message: format!("Unknown log level '{level}': {e}").into(),
        context: None,
    })
}

/// Maps the `logging` config section onto a named builder.
impl TryFrom<&LoggingSettings> for LoggerBuilder<WithName> {
    type Error = LoggerError;

    fn try_from(settings: &LoggingSettings) -> Result<Self, Self::Error> {
        let level = parse_level(&settings.level).context(format!("logger '{}'", settings.name))?;

        Ok(Self {
            name: WithName(settings.name.clone()),
            level,
            console: settings.console,
            json: settings.json,
            path: settings.path.clone(),
            env_filter: settings.env_filter.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("info").unwrap(), LevelFilter::INFO);
        assert_eq!(parse_level("WARN").unwrap(), LevelFilter::WARN);
        assert_eq!(parse_level(" debug ").unwrap(), LevelFilter::DEBUG);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::OFF);

        let err = parse_level("chatty").expect_err("unknown level must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("chatty"));
    }

    #[test]
    fn test_settings_map_onto_builder() {
        let settings = LoggingSettings {
            name: "inventory".to_owned(),
            level: "trace".to_owned(),
            console: false,
            path: Some(PathBuf::from("/var/log/roster")),
            json: true,
            env_filter: Some("roster_storage=debug".to_owned()),
        };

        let builder = LoggerBuilder::try_from(&settings).unwrap();
        assert_eq!(builder.name.0, "inventory");
        assert_eq!(builder.level, LevelFilter::TRACE);
        assert!(!builder.console);
        assert!(builder.json);
        assert_eq!(builder.path.as_deref(), Some(PathBuf::from("/var/log/roster").as_path()));
        assert_eq!(builder.env_filter.as_deref(), Some("roster_storage=debug"));
    }

    #[test]
    fn test_default_settings_log_to_console_at_info() {
        let builder = LoggerBuilder::try_from(&LoggingSettings::default()).unwrap();
        assert_eq!(builder.name.0, "roster");
        assert_eq!(builder.level, LevelFilter::INFO);
        assert!(builder.console);
        assert!(builder.path.is_none());
    }

    #[test]
    fn test_unknown_level_names_the_logger() {
        let settings = LoggingSettings { level: "loud".to_owned(), ..LoggingSettings::default() };
        let err = LoggerBuilder::try_from(&settings).expect_err("unknown level must fail");
        assert_eq!(err.context_message(), Some("logger 'roster'"));
    }
}
