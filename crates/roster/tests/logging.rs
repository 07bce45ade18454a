use roster::domain::config::LoggingSettings;
use roster::init_logging;
use roster::logger::LoggerError;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn init_logging_follows_settings() {
    let bad_level = LoggingSettings { level: "loud".to_owned(), ..LoggingSettings::default() };
    let err = init_logging(&bad_level).expect_err("unknown level must fail");
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

    let dir = tempdir().unwrap();
    let log_dir = dir.path().join("logs");
    let settings = LoggingSettings {
        name: "roster-facade".to_owned(),
        level: "debug".to_owned(),
        console: false,
        path: Some(log_dir.clone()),
        ..LoggingSettings::default()
    };

    let logger = init_logging(&settings).expect("logger should initialize");
    assert!(logger.guard().is_some());
    tracing::debug!("facade logging ready");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let has_log = fs::read_dir(&log_dir)
        .unwrap()
        .flatten()
        .any(|entry| entry.file_name().to_string_lossy().starts_with("roster-facade"));
    assert!(has_log, "a log file prefixed with the logger name should exist");
}
