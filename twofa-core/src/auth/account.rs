//! Per-account two-factor state
//!
//! Each account owns its own secret and enabled flag; nothing here is
//! process-wide, so two accounts never see each other's secret. Persisting
//! these values is up to the caller.

use tracing::info;

use crate::auth::secret::generate_secret;
use crate::auth::totp::TotpEngine;
use crate::auth::uri::build_otpauth_uri;
use crate::error::OtpError;
use crate::types::OtpSecret;

/// Outcome of the second-factor step of a login
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecondFactor {
    /// Two-factor authentication is off for this account
    NotRequired,
    /// Two-factor authentication is on but no code was supplied
    Required,
    /// The supplied code matched
    Accepted,
    /// The supplied code did not match (or was malformed)
    Rejected,
}

impl SecondFactor {
    /// Whether the login may proceed
    pub fn is_success(self) -> bool {
        matches!(self, Self::NotRequired | Self::Accepted)
    }
}

/// Two-factor settings for a single account
#[derive(Clone, Debug)]
pub struct TwoFactorAccount {
    account_name: String,
    secret: Option<OtpSecret>,
    enabled: bool,
}

impl TwoFactorAccount {
    /// A new account without a secret and with 2FA disabled
    pub fn new(account_name: impl Into<String>) -> Self {
        Self {
            account_name: account_name.into(),
            secret: None,
            enabled: false,
        }
    }

    /// Rebuild an account from values the caller persisted
    ///
    /// An account cannot be enabled without a secret; `enabled` is ignored
    /// when `secret` is `None`.
    pub fn from_parts(
        account_name: impl Into<String>,
        secret: Option<OtpSecret>,
        enabled: bool,
    ) -> Self {
        let enabled = enabled && secret.is_some();
        Self {
            account_name: account_name.into(),
            secret,
            enabled,
        }
    }

    /// Account label used in enrollment URIs
    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    /// Current secret, pending or active
    pub fn secret(&self) -> Option<&OtpSecret> {
        self.secret.as_ref()
    }

    /// Whether 2FA is required at login
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Start enrollment with a freshly generated secret
    ///
    /// Any earlier pending secret is replaced. 2FA stays disabled until
    /// [`confirm_enrollment`](Self::confirm_enrollment) sees a valid code.
    pub fn begin_enrollment(&mut self) -> Result<&OtpSecret, OtpError> {
        if self.enabled {
            return Err(OtpError::AlreadyEnabled);
        }

        let secret = generate_secret()?;
        info!(account = %self.account_name, "Started two-factor enrollment");
        let secret = self.secret.insert(secret);
        Ok(&*secret)
    }

    /// Enrollment URI for the pending or active secret
    pub fn enrollment_uri(&self, issuer: &str) -> Result<String, OtpError> {
        let secret = self.secret.as_ref().ok_or(OtpError::NotEnrolled)?;
        Ok(build_otpauth_uri(secret, &self.account_name, issuer))
    }

    /// Finish enrollment by proving the authenticator app has the secret
    ///
    /// Returns `Ok(false)` and leaves the account unchanged when the code
    /// does not verify.
    pub fn confirm_enrollment(
        &mut self,
        engine: &TotpEngine,
        code: &str,
        now: u64,
    ) -> Result<bool, OtpError> {
        if self.enabled {
            return Err(OtpError::AlreadyEnabled);
        }

        let secret = self.secret.as_ref().ok_or(OtpError::NotEnrolled)?;
        if !engine.verify_at(secret, code.trim(), engine.config().window, now)? {
            info!(account = %self.account_name, "Two-factor enrollment code rejected");
            return Ok(false);
        }

        self.enabled = true;
        info!(account = %self.account_name, "Two-factor authentication enabled");
        Ok(true)
    }

    /// Turn 2FA off and forget the secret
    pub fn disable(&mut self) {
        self.secret = None;
        self.enabled = false;
        info!(account = %self.account_name, "Two-factor authentication disabled");
    }

    /// Second-factor check for a login attempt
    pub fn authenticate(
        &self,
        engine: &TotpEngine,
        code: Option<&str>,
        now: u64,
    ) -> Result<SecondFactor, OtpError> {
        if !self.enabled {
            return Ok(SecondFactor::NotRequired);
        }

        let secret = self.secret.as_ref().ok_or(OtpError::NotEnrolled)?;
        let Some(code) = code.map(str::trim).filter(|c| !c.is_empty()) else {
            return Ok(SecondFactor::Required);
        };

        if engine.verify_at(secret, code, engine.config().window, now)? {
            Ok(SecondFactor::Accepted)
        } else {
            info!(account = %self.account_name, "Two-factor code rejected at login");
            Ok(SecondFactor::Rejected)
        }
    }
}
