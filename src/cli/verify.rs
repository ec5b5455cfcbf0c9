//! Verify command implementation
//!
//! Checks a candidate code against a secret within the drift window and
//! reports `valid` or `invalid`.

use tracing::info;
use twofa_core::error::TwofaError;
use twofa_core::types::OtpSecret;

use super::{load_engine, resolve_now};

/// Run the verify command
///
/// Returns whether the code matched. A malformed code is reported as
/// invalid, not as an error.
pub fn run_verify(
    code: &str,
    secret: &str,
    window: Option<u32>,
    at: Option<u64>,
) -> Result<bool, TwofaError> {
    let (config, engine) = load_engine(window)?;
    let secret = OtpSecret::parse(secret)?;
    let now = resolve_now(at)?;

    let valid = engine.verify_at(&secret, code.trim(), config.totp.window, now)?;
    info!(window = config.totp.window, valid, "Verified code");

    println!("{}", if valid { "valid" } else { "invalid" });
    Ok(valid)
}
