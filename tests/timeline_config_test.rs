//! Tests for loading configuration files.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use strictly_timeline::TimelineConfig;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_full_config_from_file() {
    let file = write_config(
        r#"
tick_rate_ms = 250
log_filter = "debug,strictly_timeline=trace"
log_file = "timeline.log"
show_help = false
"#,
    );

    let config = TimelineConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config.tick_rate(), Duration::from_millis(250));
    assert_eq!(config.log_filter(), "debug,strictly_timeline=trace");
    assert_eq!(config.log_file(), &Some(PathBuf::from("timeline.log")));
    assert!(!*config.show_help());
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = write_config("");
    let config = TimelineConfig::load(Some(file.path())).expect("valid config");
    assert_eq!(config, TimelineConfig::default());
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = TimelineConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_error() {
    let file = write_config("tick_rate_ms = \"fast\"");
    let err = TimelineConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_zero_tick_rate_rejected() {
    let file = write_config("tick_rate_ms = 0");
    let err = TimelineConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("tick_rate_ms"));
}
