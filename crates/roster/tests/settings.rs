use roster::load_settings;
use std::fs;
use tempfile::tempdir;

#[test]
fn settings_load_from_toml_with_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roster.toml");
    fs::write(
        &path,
        r#"
[collection]
name = "inventory"
max_items = 25

[json]
escape_non_ascii = true

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = load_settings(Some(&path)).unwrap();
    assert_eq!(config.collection.name, "inventory");
    assert_eq!(config.collection.max_items, 25);
    assert!(config.collection.enable_validation);
    assert_eq!(config.json.indent, Some(2));
    assert!(config.json.escape_non_ascii);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.console);
}

#[test]
fn missing_settings_file_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(load_settings(Some(dir.path().join("absent.toml"))).is_err());
}
