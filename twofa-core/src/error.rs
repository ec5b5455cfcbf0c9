//! Error types for twofa
//!
//! Decoding a stored secret is the only cryptographic operation that can
//! fail; verification outcomes are plain booleans and never show up here.

use thiserror::Error;

/// Main error type for the twofa crates
#[derive(Error, Debug)]
pub enum TwofaError {
    /// Errors related to configuration loading/parsing
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors related to OTP/TOTP operations
    #[error("OTP error: {0}")]
    Otp(#[from] OtpError),

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration file: {path}")]
    LoadFailed { path: String },

    #[error("Configuration validation error: {message}")]
    ValidationError { message: String },

    #[error("I/O error: {message}")]
    IoError { message: String },
}

/// OTP/TOTP operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    #[error("Invalid Base32 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("Secret decodes to zero bytes")]
    EmptySecret,

    #[error("Time counter out of range")]
    InvalidCounter,

    #[error("System time error")]
    TimeError,

    #[error("Secure random source unavailable")]
    RandomFailed,

    #[error("Account has no two-factor secret")]
    NotEnrolled,

    #[error("Two-factor authentication is already enabled")]
    AlreadyEnabled,
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TwofaError>;
