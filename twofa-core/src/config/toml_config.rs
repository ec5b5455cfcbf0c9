//! TOML configuration file I/O
//!
//! Handles loading and saving the twofa configuration to/from TOML files
//! in the user's configuration directory.

use crate::config::{EngineConfig, EnrollmentConfig};
use crate::error::{ConfigError, TwofaError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Complete TOML configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TomlConfig {
    /// TOTP engine settings
    #[serde(default)]
    pub totp: EngineConfig,

    /// Enrollment URI labels
    #[serde(default)]
    pub enrollment: EnrollmentConfig,
}

impl TomlConfig {
    /// Create a new TOML configuration
    pub fn new(totp: EngineConfig, enrollment: EnrollmentConfig) -> Self {
        Self { totp, enrollment }
    }

    /// Validate both sections
    pub fn validate(&self) -> Result<(), String> {
        self.totp.validate()?;
        self.enrollment.validate()
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, TwofaError> {
        let config: TomlConfig = toml::from_str(contents)?;

        config.validate().map_err(|message| {
            TwofaError::Config(ConfigError::ValidationError {
                message: format!("Invalid configuration: {}", message),
            })
        })?;

        debug!(
            window = config.totp.window,
            issuer = %config.enrollment.issuer,
            "Parsed configuration"
        );

        Ok(config)
    }
}

/// Default configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Get the default configuration directory
///
/// Returns ~/.config/twofa, or TWOFA_CONFIG_DIR environment variable if set
pub fn get_config_dir() -> Result<PathBuf, TwofaError> {
    if let Ok(config_dir) = std::env::var("TWOFA_CONFIG_DIR") {
        return Ok(PathBuf::from(config_dir));
    }

    let home = std::env::var("HOME").map_err(|_| {
        TwofaError::Config(ConfigError::IoError {
            message: "HOME environment variable not set".to_string(),
        })
    })?;

    Ok(PathBuf::from(home).join(".config").join("twofa"))
}

/// Get the default configuration file path
pub fn get_config_path() -> Result<PathBuf, TwofaError> {
    let config_dir = get_config_dir()?;
    Ok(config_dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from the default TOML file
///
/// A missing file is not an error: defaults apply.
pub fn load_config() -> Result<TomlConfig, TwofaError> {
    let config_path = get_config_path()?;

    if !config_path.exists() {
        debug!(
            "No configuration at {}, using defaults",
            config_path.display()
        );
        return Ok(TomlConfig::default());
    }

    load_config_from_path(&config_path)
}

/// Load configuration from a specific TOML file
pub fn load_config_from_path<P: AsRef<Path>>(path: P) -> Result<TomlConfig, TwofaError> {
    let contents = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => TwofaError::Config(ConfigError::LoadFailed {
            path: path.as_ref().to_string_lossy().to_string(),
        }),
        _ => TwofaError::Config(ConfigError::IoError {
            message: format!("Failed to read config file: {}", e),
        }),
    })?;

    let config = TomlConfig::from_toml_str(&contents)?;
    info!("Loaded configuration from {}", path.as_ref().display());
    Ok(config)
}

/// Save configuration to a specific TOML file
pub fn save_config_to_path<P: AsRef<Path>>(config: &TomlConfig, path: P) -> Result<(), TwofaError> {
    config.validate().map_err(|message| {
        TwofaError::Config(ConfigError::ValidationError {
            message: format!("Refusing to save invalid configuration: {}", message),
        })
    })?;

    let contents = toml::to_string_pretty(config)?;

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            TwofaError::Config(ConfigError::IoError {
                message: format!("Failed to create config directory: {}", e),
            })
        })?;
    }

    std::fs::write(&path, contents).map_err(|e| {
        TwofaError::Config(ConfigError::IoError {
            message: format!("Failed to write config file: {}", e),
        })
    })?;

    Ok(())
}
