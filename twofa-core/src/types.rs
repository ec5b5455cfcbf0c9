//! Type definitions and wrappers for secure data handling
//!
//! This module provides type-safe wrappers for sensitive data using the
//! secrecy crate to prevent accidental exposure in logs or debug output.

use secrecy::{ExposeSecret, Secret};

use crate::auth::base32;
use crate::error::OtpError;

/// Wrapper for a shared TOTP secret in its Base32 wire form
///
/// The secret is owned by whoever owns the account record. It is never
/// printed by `Debug` and never logged.
#[derive(Clone, Debug)]
pub struct OtpSecret(Secret<String>);

impl OtpSecret {
    /// Wrap a Base32 string as-is
    ///
    /// No validation happens here; the engine decodes (and rejects) the
    /// value when it is used. Prefer [`OtpSecret::parse`] for user input.
    pub fn new(secret: String) -> Self {
        Self(Secret::new(secret))
    }

    /// Parse and normalize a Base32 secret
    ///
    /// Whitespace and `=` padding are dropped and letters are uppercased, so
    /// `"jbsw y3dp ehpk 3pxp"` becomes `"JBSWY3DPEHPK3PXP"`.
    ///
    /// # Errors
    ///
    /// Returns `OtpError::InvalidCharacter` for characters outside `A-Z2-7`
    /// and `OtpError::EmptySecret` when nothing is left to decode.
    pub fn parse(input: &str) -> Result<Self, OtpError> {
        let normalized = base32::normalize(input);
        if base32::decode(&normalized)?.is_empty() {
            return Err(OtpError::EmptySecret);
        }
        Ok(Self::new(normalized))
    }

    /// Expose the secret value (use with caution!)
    ///
    /// This should only be called when absolutely necessary,
    /// such as when passing to cryptographic functions or building a URI.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// Decode the secret into raw key bytes
    pub fn decode(&self) -> Result<Vec<u8>, OtpError> {
        base32::decode(self.expose())
    }
}

impl From<String> for OtpSecret {
    fn from(secret: String) -> Self {
        Self::new(secret)
    }
}

/// Wrapper for generated TOTP codes
///
/// Codes are short-lived but still grant access, so they are treated as
/// sensitive data and never logged.
#[derive(Clone, Debug)]
pub struct TotpCode(Secret<String>);

impl TotpCode {
    /// Create a new TotpCode from a generated code string
    pub fn new(code: String) -> Self {
        Self(Secret::new(code))
    }

    /// Expose the code value (use with caution!)
    ///
    /// This should only be called when printing the code for the user
    /// or comparing it against a candidate.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for TotpCode {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}
