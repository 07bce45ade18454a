use roster_domain::config::LoggingSettings;
use roster_logger::Logger;

#[test]
fn default_settings_log_to_console_without_guard() {
    let settings =
        LoggingSettings { name: "integration-console-only".to_owned(), ..LoggingSettings::default() };
    let logger = Logger::from_settings(&settings).expect("logger should initialize");

    tracing::info!(target: "roster", "console only");
    assert!(logger.guard().is_none(), "console-only logger should not create a file guard");
}
