//! Tests for configuration validation and TOML file I/O

use tempfile::TempDir;
use twofa_core::config::toml_config::{self, TomlConfig};
use twofa_core::config::{EngineConfig, EnrollmentConfig, MAX_WINDOW};
use twofa_core::error::{ConfigError, TwofaError};

#[test]
fn test_default_config_is_valid() {
    let config = TomlConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.totp.window, 1);
    assert_eq!(config.enrollment.issuer, "twofa");
    assert_eq!(config.enrollment.account, "admin");
}

#[test]
fn test_window_limit() {
    assert!(EngineConfig::new(MAX_WINDOW).validate().is_ok());
    assert_eq!(
        EngineConfig::new(MAX_WINDOW + 1).validate().unwrap_err(),
        "Window cannot exceed 10 steps"
    );
}

#[test]
fn test_empty_issuer() {
    let config = EnrollmentConfig::new("  ".to_string(), "admin".to_string());
    assert_eq!(config.validate().unwrap_err(), "Issuer cannot be empty");
}

#[test]
fn test_empty_account() {
    let config = EnrollmentConfig::new("twofa".to_string(), String::new());
    assert_eq!(config.validate().unwrap_err(), "Account cannot be empty");
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.toml");

    let config = TomlConfig::new(
        EngineConfig::new(2),
        EnrollmentConfig::new("ACME Co".to_string(), "alice@example.com".to_string()),
    );
    toml_config::save_config_to_path(&config, &path).expect("Failed to save config");

    let loaded = toml_config::load_config_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded, config);
}

#[test]
fn test_load_written_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[totp]
window = 3

[enrollment]
issuer = "Example"
account = "ops"
"#,
    )
    .unwrap();

    let config = toml_config::load_config_from_path(&path).unwrap();
    assert_eq!(config.totp, EngineConfig::new(3));
    assert_eq!(config.enrollment.issuer, "Example");
    assert_eq!(config.enrollment.account, "ops");
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let result = toml_config::load_config_from_path(dir.path().join("absent.toml"));
    assert!(matches!(
        result,
        Err(TwofaError::Config(ConfigError::LoadFailed { .. }))
    ));
}

#[test]
fn test_save_rejects_invalid_config() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    let config = TomlConfig::new(EngineConfig::new(99), EnrollmentConfig::default());

    assert!(matches!(
        toml_config::save_config_to_path(&config, &path),
        Err(TwofaError::Config(ConfigError::ValidationError { .. }))
    ));
    assert!(!path.exists());
}

#[test]
fn test_unknown_types_rejected() {
    let result = TomlConfig::from_toml_str("[totp]\nwindow = \"wide\"\n");
    assert!(matches!(result, Err(TwofaError::Toml(_))));
}

#[test]
fn test_config_dir_override() {
    // Only this test touches TWOFA_CONFIG_DIR in this binary
    let dir = TempDir::new().expect("Failed to create temp dir");
    std::env::set_var("TWOFA_CONFIG_DIR", dir.path());

    assert_eq!(toml_config::get_config_dir().unwrap(), dir.path());
    assert_eq!(
        toml_config::get_config_path().unwrap(),
        dir.path().join("config.toml")
    );
    // No file yet: defaults
    assert_eq!(toml_config::load_config().unwrap(), TomlConfig::default());

    let config = TomlConfig::new(EngineConfig::new(0), EnrollmentConfig::default());
    toml_config::save_config_to_path(&config, dir.path().join("config.toml")).unwrap();
    assert_eq!(toml_config::load_config().unwrap(), config);

    std::env::remove_var("TWOFA_CONFIG_DIR");
}
