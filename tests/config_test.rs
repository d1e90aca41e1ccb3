//! Tests for TOML configuration loading.

use std::fs;
use std::time::Duration;

use tempfile::TempDir;

use s4d_timer::{AppConfig, TimeFormat};

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config =
        AppConfig::load_or_default(dir.path().join("absent.toml")).expect("Defaults load");
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.tick_interval(), Duration::from_millis(10));
    assert_eq!(config.title(), "S4D");
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("timer.toml");
    fs::write(&path, "time_format = \"clock\"\n").expect("Write failed");

    let config = AppConfig::from_file(&path).expect("Config loads");
    assert_eq!(*config.time_format(), TimeFormat::Clock);
    assert_eq!(*config.tick_interval_ms(), 10);
}

#[test]
fn test_full_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("timer.toml");
    fs::write(
        &path,
        r#"title = "Relay"
tick_interval_ms = 20
time_format = "stopwatch"
log_file = "relay.log"
"#,
    )
    .expect("Write failed");

    let config = AppConfig::from_file(&path).expect("Config loads");
    assert_eq!(config.title(), "Relay");
    assert_eq!(config.tick_interval(), Duration::from_millis(20));
    assert_eq!(config.log_file().to_str(), Some("relay.log"));
}

#[test]
fn test_zero_tick_interval_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("timer.toml");
    fs::write(&path, "tick_interval_ms = 0\n").expect("Write failed");

    let err = AppConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("tick_interval_ms"));

    assert!(AppConfig::default().with_tick_interval_ms(0).is_err());
}

#[test]
fn test_invalid_toml_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("timer.toml");
    fs::write(&path, "this is not valid toml !!!@@@").expect("Write failed");

    let err = AppConfig::from_file(&path).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}
