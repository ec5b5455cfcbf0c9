//! Code command implementation
//!
//! Outputs the TOTP code for a secret to stdout for machine-parsable usage.
//! The remaining validity goes to stderr.

use twofa_core::error::TwofaError;
use twofa_core::types::OtpSecret;

use super::{load_engine, resolve_now};

/// Run the code command
pub fn run_code(secret: &str, at: Option<u64>, offset: i64) -> Result<(), TwofaError> {
    let (_, engine) = load_engine(None)?;
    let secret = OtpSecret::parse(secret)?;
    let now = resolve_now(at)?;

    let code = engine.generate_at(&secret, offset, now)?;

    println!("{}", code.expose());
    eprintln!("valid for {}s", engine.seconds_remaining(now));

    Ok(())
}
