//! Configuration module
//!
//! Holds the TOTP engine parameters and enrollment defaults, loaded from
//! TOML. Secrets are never part of the configuration.

use serde::{Deserialize, Serialize};

pub mod toml_config;

/// Seconds per TOTP time step
pub const TIME_STEP: u64 = 30;

/// Digits in a generated code
pub const DIGITS: u32 = 6;

/// Name of the HMAC algorithm, as written into `otpauth://` URIs
pub const ALGORITHM: &str = "SHA1";

/// Default number of steps accepted on either side of the current one
pub const DEFAULT_WINDOW: u32 = 1;

/// Largest verification window a configuration may ask for
pub const MAX_WINDOW: u32 = 10;

/// TOTP engine parameters
///
/// Only the verification window is tunable. The time step, digit count
/// and algorithm are fixed so every authenticator app agrees with us.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Steps of clock drift tolerated in each direction
    pub window: u32,
}

impl EngineConfig {
    /// Create an engine configuration with the given window
    pub fn new(window: u32) -> Self {
        Self { window }
    }

    /// Seconds per time step
    pub const fn time_step(&self) -> u64 {
        TIME_STEP
    }

    /// Digits per code
    pub const fn digits(&self) -> u32 {
        DIGITS
    }

    /// HMAC algorithm name
    pub const fn algorithm(&self) -> &'static str {
        ALGORITHM
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.window > MAX_WINDOW {
            return Err(format!("Window cannot exceed {} steps", MAX_WINDOW));
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
        }
    }
}

/// Labels written into enrollment URIs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrollmentConfig {
    /// Service name shown by the authenticator app
    pub issuer: String,

    /// Account label shown under the issuer
    pub account: String,
}

impl EnrollmentConfig {
    /// Create an enrollment configuration
    pub fn new(issuer: String, account: String) -> Self {
        Self { issuer, account }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.issuer.trim().is_empty() {
            return Err("Issuer cannot be empty".to_string());
        }

        if self.account.trim().is_empty() {
            return Err("Account cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Default for EnrollmentConfig {
    fn default() -> Self {
        Self {
            issuer: "twofa".to_string(),
            account: "admin".to_string(),
        }
    }
}
