//! twofa - TOTP two-factor CLI
//!
//! Generates shared secrets, prints and checks time-based codes, and builds
//! `otpauth://` enrollment URIs for authenticator apps.

use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use twofa_core::auth::secret::DEFAULT_SECRET_LEN;
use twofa_core::error::{OtpError, TwofaError};
use twofa_core::init_logging;

mod cli;

#[derive(Parser)]
#[command(name = "twofa", version)]
#[command(about = "TOTP secrets, codes and enrollment URIs")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new random Base32 secret
    NewSecret {
        /// Secret length in bytes
        #[arg(long, default_value_t = DEFAULT_SECRET_LEN)]
        bytes: usize,
    },
    /// Print the current code for a secret
    Code {
        /// Base32 secret
        #[arg(long, env = "TWOFA_SECRET", hide_env_values = true)]
        secret: String,
        /// Unix time to generate for instead of now
        #[arg(long)]
        at: Option<u64>,
        /// Time steps to shift by (negative for past codes)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,
    },
    /// Check a code against a secret (exit status 1 when invalid)
    Verify {
        /// Code to check
        code: String,
        /// Base32 secret
        #[arg(long, env = "TWOFA_SECRET", hide_env_values = true)]
        secret: String,
        /// Time steps of drift accepted either way (overrides config)
        #[arg(long)]
        window: Option<u32>,
        /// Unix time to verify at instead of now
        #[arg(long)]
        at: Option<u64>,
    },
    /// Print a secret and its otpauth:// enrollment URI
    Enroll {
        /// Account label (overrides config)
        #[arg(long)]
        account: Option<String>,
        /// Issuer label (overrides config)
        #[arg(long)]
        issuer: Option<String>,
        /// Existing Base32 secret; a new one is generated when omitted
        #[arg(long, env = "TWOFA_SECRET", hide_env_values = true)]
        secret: Option<String>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    if let Err(e) = init_logging(level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(2);
    }

    let result = match cli.command {
        Commands::NewSecret { bytes } => cli::new_secret::run_new_secret(bytes).map(|()| 0),
        Commands::Code { secret, at, offset } => {
            cli::code::run_code(&secret, at, offset).map(|()| 0)
        }
        Commands::Verify {
            code,
            secret,
            window,
            at,
        } => cli::verify::run_verify(&code, &secret, window, at)
            .map(|valid| if valid { 0 } else { 1 }),
        Commands::Enroll {
            account,
            issuer,
            secret,
            json,
        } => cli::enroll::run_enroll(account, issuer, secret.as_deref(), json).map(|()| 0),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            let exit_code = match e {
                // Configuration errors (exit code 2)
                TwofaError::Config(_) | TwofaError::Toml(_) | TwofaError::TomlSerialize(_) => 2,
                // Bad secrets are setup problems (exit code 2)
                TwofaError::Otp(OtpError::InvalidCharacter { .. } | OtpError::EmptySecret) => 2,
                // Everything else happened at runtime (exit code 1)
                TwofaError::Otp(_) | TwofaError::Io(_) => 1,
            };

            eprintln!("{}", e);
            std::process::exit(exit_code);
        }
    }
}
