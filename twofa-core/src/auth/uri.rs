//! `otpauth://` enrollment URIs
//!
//! Format understood by Google Authenticator and compatible apps:
//! `otpauth://totp/ISSUER:ACCOUNT?secret=...&issuer=ISSUER&algorithm=SHA1&digits=6&period=30`

use urlencoding::encode;

use crate::config::{ALGORITHM, DIGITS, TIME_STEP};
use crate::types::OtpSecret;

/// Build the enrollment URI for `secret`
///
/// Issuer and account are percent-encoded as URI components. The secret is
/// already Base32 and goes in verbatim.
pub fn build_otpauth_uri(secret: &OtpSecret, account_name: &str, issuer: &str) -> String {
    let issuer = encode(issuer);
    let account = encode(account_name);
    format!(
        "otpauth://totp/{issuer}:{account}?secret={secret}&issuer={issuer}&algorithm={ALGORITHM}&digits={DIGITS}&period={TIME_STEP}",
        secret = secret.expose(),
    )
}
