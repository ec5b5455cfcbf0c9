//! Authentication module
//!
//! Handles SHA-1/HMAC hashing, Base32 secrets, TOTP generation and
//! verification, enrollment URIs and per-account two-factor state.

pub mod account;
pub mod base32;
pub mod hmac;
pub mod secret;
pub mod sha1;
pub mod totp;
pub mod uri;
