//! Shared secret generation
//!
//! Secrets are drawn from the operating system CSPRNG and handed out as
//! unpadded Base32, ready for an authenticator app.

use rand::rngs::OsRng;
use rand::RngCore;
use secrecy::zeroize::Zeroize;
use tracing::debug;

use crate::auth::base32;
use crate::error::OtpError;
use crate::types::OtpSecret;

/// Default secret length in bytes (160 bits, the HMAC-SHA1 output size)
pub const DEFAULT_SECRET_LEN: usize = 20;

/// Generate a random secret of the default length
pub fn generate_secret() -> Result<OtpSecret, OtpError> {
    generate_secret_with_len(DEFAULT_SECRET_LEN)
}

/// Generate a random secret of `len` bytes
///
/// # Errors
///
/// Returns `OtpError::EmptySecret` for a zero length and
/// `OtpError::RandomFailed` if the OS random source cannot be read.
pub fn generate_secret_with_len(len: usize) -> Result<OtpSecret, OtpError> {
    if len == 0 {
        return Err(OtpError::EmptySecret);
    }

    let mut bytes = vec![0u8; len];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|_| OtpError::RandomFailed)?;

    let encoded = base32::encode_unpadded(&bytes);
    bytes.zeroize();

    debug!(bytes = len, "Generated new TOTP secret");
    Ok(OtpSecret::from(encoded))
}
