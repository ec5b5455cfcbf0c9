//! New secret command implementation
//!
//! Prints a freshly generated Base32 secret and nothing else, so the
//! output can be captured directly by scripts.

use twofa_core::auth::secret::generate_secret_with_len;
use twofa_core::error::TwofaError;

/// Run the new-secret command
pub fn run_new_secret(bytes: usize) -> Result<(), TwofaError> {
    let secret = generate_secret_with_len(bytes)?;
    println!("{}", secret.expose());
    Ok(())
}
