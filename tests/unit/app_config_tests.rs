/*!
 * Tests for application configuration functionality
 */

use ytscribe::app_config::{Config, LogLevel};

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.fetch.timeout_secs, 30);
    assert!(!config.fetch.user_agent.is_empty());
    assert_eq!(config.render.body_font_size, 12);
    assert_eq!(config.render.title_font_size, 20);
    assert!(config.render.font_dir.is_none());
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    // Start with a valid config
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    // Zero timeout
    config.fetch.timeout_secs = 0;
    assert!(config.validate().is_err());
    config.fetch.timeout_secs = 30;

    // Zero font size
    config.render.body_font_size = 0;
    assert!(config.validate().is_err());
    config.render.body_font_size = 12;

    // Negative margin
    config.render.margin_mm = -1.0;
    assert!(config.validate().is_err());
    config.render.margin_mm = 17.5;

    // Non-positive line spacing
    config.render.line_spacing = 0.0;
    assert!(config.validate().is_err());
    config.render.line_spacing = 1.2;

    assert!(config.validate().is_ok());
}

/// Test serialization roundtrip
#[test]
fn test_config_serde_withRoundtrip_shouldPreserveValues() {
    let mut config = Config::default();
    config.fetch.timeout_secs = 45;
    config.render.title_font_size = 24;
    config.log_level = LogLevel::Debug;

    let json = serde_json::to_string_pretty(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.fetch.timeout_secs, 45);
    assert_eq!(parsed.render.title_font_size, 24);
    assert_eq!(parsed.log_level, LogLevel::Debug);
    assert_eq!(parsed.output_dir, config.output_dir);
}

/// Test that an empty JSON object deserializes to the defaults
#[test]
fn test_config_serde_withEmptyObject_shouldApplyDefaults() {
    let parsed: Config = serde_json::from_str("{}").unwrap();

    assert_eq!(parsed.fetch.timeout_secs, 30);
    assert_eq!(parsed.render.body_font_size, 12);
    assert_eq!(parsed.log_level, LogLevel::Info);
    assert!(parsed.validate().is_ok());
}

/// Test log level serialization shape
#[test]
fn test_log_level_serde_withLowercaseNames_shouldRoundtrip() {
    let json = serde_json::to_string(&LogLevel::Warn).unwrap();
    assert_eq!(json, "\"warn\"");

    let parsed: LogLevel = serde_json::from_str("\"trace\"").unwrap();
    assert_eq!(parsed, LogLevel::Trace);
}
