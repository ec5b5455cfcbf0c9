//! Core library for the twofa TOTP tool
//!
//! This crate provides the two-factor primitives: SHA-1, HMAC-SHA1, Base32,
//! secret generation, RFC 6238 code generation/verification and `otpauth://`
//! enrollment URIs, plus the per-account holder that ties them together.

pub mod error;
pub mod types;

pub mod auth;
pub mod config;

/// Initialize logging infrastructure
///
/// Sets up tracing with systemd journal logging when running under systemd.
/// Otherwise logs to stderr so stdout stays free for command output.
pub fn init_logging(
    level: tracing_subscriber::filter::LevelFilter,
) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    #[cfg(target_os = "linux")]
    {
        if std::env::var("JOURNAL_STREAM").is_ok() {
            let journal_layer = tracing_journald::layer()?;
            tracing_subscriber::registry()
                .with(journal_layer)
                .with(level)
                .try_init()?;
            return Ok(());
        }
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(level)
        .try_init()?;

    Ok(())
}
