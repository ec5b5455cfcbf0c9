//! Enroll command implementation
//!
//! Prints the secret and the `otpauth://` URI an authenticator app needs.
//! Rendering the URI as a QR code is left to a dedicated tool.

use serde::Serialize;
use twofa_core::auth::account::TwoFactorAccount;
use twofa_core::error::TwofaError;
use twofa_core::types::OtpSecret;

use super::load_engine;

/// Enrollment details as emitted by `--json`
#[derive(Debug, Serialize)]
struct Enrollment<'a> {
    account: &'a str,
    issuer: &'a str,
    secret: &'a str,
    uri: &'a str,
}

/// Run the enroll command
pub fn run_enroll(
    account: Option<String>,
    issuer: Option<String>,
    secret: Option<&str>,
    json: bool,
) -> Result<(), TwofaError> {
    let (config, _) = load_engine(None)?;
    let account_name = account.unwrap_or(config.enrollment.account);
    let issuer = issuer.unwrap_or(config.enrollment.issuer);

    let account = match secret {
        Some(secret) => {
            TwoFactorAccount::from_parts(account_name, Some(OtpSecret::parse(secret)?), false)
        }
        None => {
            let mut account = TwoFactorAccount::new(account_name);
            account.begin_enrollment()?;
            account
        }
    };
    let uri = account.enrollment_uri(&issuer)?;
    let secret = account.secret().map(|s| s.expose()).unwrap_or_default();

    if json {
        let enrollment = Enrollment {
            account: account.account_name(),
            issuer: &issuer,
            secret,
            uri: &uri,
        };
        let rendered = serde_json::to_string_pretty(&enrollment).map_err(std::io::Error::from)?;
        println!("{}", rendered);
    } else {
        println!("Account: {}", account.account_name());
        println!("Issuer:  {}", issuer);
        println!("Secret:  {}", secret);
        println!("URI:     {}", uri);
    }

    Ok(())
}
