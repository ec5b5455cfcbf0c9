//! CLI command implementations
//!
//! This module contains the implementation of all CLI subcommands.

use twofa_core::auth::totp::{unix_now, TotpEngine};
use twofa_core::config::toml_config::{load_config, TomlConfig};
use twofa_core::error::{ConfigError, TwofaError};

pub mod code;
pub mod enroll;
pub mod new_secret;
pub mod verify;

/// Load the configuration and build an engine, applying a window override
fn load_engine(window: Option<u32>) -> Result<(TomlConfig, TotpEngine), TwofaError> {
    let mut config = load_config()?;

    if let Some(window) = window {
        config.totp.window = window;
    }
    config.totp.validate().map_err(|message| {
        TwofaError::Config(ConfigError::ValidationError { message })
    })?;

    let engine = TotpEngine::new(config.totp);
    Ok((config, engine))
}

/// The explicit time if given, otherwise the system clock
fn resolve_now(at: Option<u64>) -> Result<u64, TwofaError> {
    match at {
        Some(at) => Ok(at),
        None => Ok(unix_now()?),
    }
}
