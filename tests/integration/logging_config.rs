//! Integration tests for logging configuration

use ingot::logging::{init_logging, LoggingConfig};

#[test]
fn test_config_parses_from_json() {
    let config: LoggingConfig = serde_json::from_str(
        r#"{
            "level": "debug",
            "format": "json",
            "color": false,
            "modules": { "ingot::construct": "trace" }
        }"#,
    )
    .unwrap();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, "json");
    assert!(!config.color);
    assert_eq!(
        config.modules.get("ingot::construct").map(String::as_str),
        Some("trace")
    );
}

#[test]
fn test_partial_config_falls_back_to_defaults() {
    let config: LoggingConfig = serde_json::from_str(r#"{ "level": "warn" }"#).unwrap();
    assert_eq!(config.level, "warn");
    assert_eq!(config.format, "text");
    assert!(config.color);
}

#[test]
fn test_init_logging_with_defaults() {
    // Only this test installs a subscriber; the test binary shares one global.
    let result = init_logging(Some(&LoggingConfig::default()));
    assert!(result.is_ok());
}
