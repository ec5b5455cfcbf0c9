//! TOTP (Time-based One-Time Password) generation and verification
//!
//! Implements RFC 6238 on top of the RFC 4226 HOTP truncation, using the
//! in-crate HMAC-SHA1. Codes are 6 digits over 30 second steps.
//!
//! The engine holds configuration only. Secrets are passed in on every call
//! by whoever owns them, so one engine can serve any number of accounts.

use std::time::{SystemTime, UNIX_EPOCH};

use subtle::ConstantTimeEq;
use tracing::debug;

use crate::auth::hmac::hmac_sha1;
use crate::config::{EngineConfig, DIGITS, MAX_WINDOW, TIME_STEP};
use crate::error::OtpError;
use crate::types::{OtpSecret, TotpCode};

/// Current Unix time in whole seconds
pub fn unix_now() -> Result<u64, OtpError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|_| OtpError::TimeError)
}

/// Time step counter for `now`, shifted by `offset` steps
///
/// Returns `None` when the shifted counter would be negative or overflow.
pub fn time_counter(now: u64, offset: i64) -> Option<u64> {
    (now / TIME_STEP).checked_add_signed(offset)
}

/// RFC 4226 HOTP value for `counter`, as a zero-padded 6-digit code
pub fn hotp(key: &[u8], counter: u64) -> TotpCode {
    let digest = hmac_sha1(key, &counter.to_be_bytes());

    // Dynamic truncation (RFC 4226 section 5.3)
    let offset = (digest[19] & 0x0f) as usize;
    let value = u32::from_be_bytes([
        digest[offset] & 0x7f,
        digest[offset + 1],
        digest[offset + 2],
        digest[offset + 3],
    ]);

    let modulo = 10u32.pow(DIGITS);
    format!("{:0width$}", value % modulo, width = DIGITS as usize).into()
}

/// A candidate is only worth comparing if it looks like a code
fn is_well_formed(candidate: &str) -> bool {
    candidate.len() == DIGITS as usize && candidate.bytes().all(|b| b.is_ascii_digit())
}

/// Offsets to try, nearest first: 0, -1, +1, -2, +2, ...
fn window_offsets(window: u32) -> impl Iterator<Item = i64> {
    std::iter::once(0).chain((1..=i64::from(window)).flat_map(|step| [-step, step]))
}

/// TOTP generator and validator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TotpEngine {
    config: EngineConfig,
}

impl TotpEngine {
    /// Create an engine with the given configuration
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generate the code for the current time step
    pub fn generate(&self, secret: &OtpSecret) -> Result<TotpCode, OtpError> {
        self.generate_at(secret, 0, unix_now()?)
    }

    /// Generate the code `offset` steps away from the step containing `now`
    ///
    /// # Errors
    ///
    /// Returns `OtpError::InvalidCharacter` or `OtpError::EmptySecret` for a
    /// broken secret and `OtpError::InvalidCounter` when the shifted counter
    /// falls outside `u64`.
    pub fn generate_at(
        &self,
        secret: &OtpSecret,
        offset: i64,
        now: u64,
    ) -> Result<TotpCode, OtpError> {
        let key = decode_key(secret)?;
        let counter = time_counter(now, offset).ok_or(OtpError::InvalidCounter)?;
        Ok(hotp(&key, counter))
    }

    /// Verify `candidate` against the current time using the configured window
    pub fn verify(&self, secret: &OtpSecret, candidate: &str) -> Result<bool, OtpError> {
        self.verify_at(secret, candidate, self.config.window, unix_now()?)
    }

    /// Verify `candidate` against every step within `window` of `now`
    ///
    /// A malformed candidate (wrong length, non-digits) is simply a
    /// non-match. Only a broken secret is reported as an error.
    ///
    /// `window` is capped at `MAX_WINDOW` steps.
    pub fn verify_at(
        &self,
        secret: &OtpSecret,
        candidate: &str,
        window: u32,
        now: u64,
    ) -> Result<bool, OtpError> {
        let key = decode_key(secret)?;
        let window = window.min(MAX_WINDOW);

        if !is_well_formed(candidate) {
            debug!("Rejected malformed TOTP candidate");
            return Ok(false);
        }

        for offset in window_offsets(window) {
            let Some(counter) = time_counter(now, offset) else {
                continue;
            };

            let expected = hotp(&key, counter);
            if bool::from(expected.expose().as_bytes().ct_eq(candidate.as_bytes())) {
                debug!(offset, "TOTP candidate matched");
                return Ok(true);
            }
        }

        debug!(window, "TOTP candidate did not match any step in window");
        Ok(false)
    }

    /// Seconds until the code for `now` stops being the current one
    pub fn seconds_remaining(&self, now: u64) -> u64 {
        self.config.time_step() - now % self.config.time_step()
    }
}

fn decode_key(secret: &OtpSecret) -> Result<Vec<u8>, OtpError> {
    let key = secret.decode()?;
    if key.is_empty() {
        return Err(OtpError::EmptySecret);
    }
    Ok(key)
}
