//! Integration tests for the twofa binary
//!
//! Runs the built binary against an empty temporary config directory so a
//! developer's own configuration cannot change the results.

use std::process::{Command, Output};

const TWOFA_BINARY: &str = env!("CARGO_BIN_EXE_twofa");
const APP_SECRET: &str = "JBSWY3DPEHPK3PXP";

fn twofa(args: &[&str]) -> Output {
    let config_dir = tempfile::tempdir().expect("Failed to create temp dir");
    twofa_with_config(config_dir.path(), args)
}

fn twofa_with_config(config_dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(TWOFA_BINARY)
        .args(args)
        .env("TWOFA_CONFIG_DIR", config_dir)
        .env_remove("TWOFA_SECRET")
        .env_remove("JOURNAL_STREAM")
        .output()
        .expect("Failed to run twofa")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_help_lists_commands() {
    let output = twofa(&["--help"]);
    assert!(output.status.success());
    let text = stdout(&output);
    for command in ["new-secret", "code", "verify", "enroll"] {
        assert!(text.contains(command), "missing {}", command);
    }
}

#[test]
fn test_new_secret() {
    let output = twofa(&["new-secret"]);
    assert!(output.status.success());
    let secret = stdout(&output);
    assert_eq!(secret.len(), 32);
    assert!(secret
        .chars()
        .all(|c| c.is_ascii_uppercase() || ('2'..='7').contains(&c)));
}

#[test]
fn test_new_secret_zero_bytes_fails() {
    let output = twofa(&["new-secret", "--bytes", "0"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_code_at_fixed_time() {
    let output = twofa(&["code", "--secret", APP_SECRET, "--at", "1700000000"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "324550");
}

#[test]
fn test_code_with_negative_offset() {
    let output = twofa(&[
        "code", "--secret", APP_SECRET, "--at", "1700000000", "--offset", "-3",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "777646");
}

#[test]
fn test_code_secret_from_env() {
    let config_dir = tempfile::tempdir().unwrap();
    let output = Command::new(TWOFA_BINARY)
        .args(["code", "--at", "1700000000"])
        .env("TWOFA_CONFIG_DIR", config_dir.path())
        .env("TWOFA_SECRET", "jbsw y3dp ehpk 3pxp")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "324550");
}

#[test]
fn test_code_invalid_secret() {
    let output = twofa(&["code", "--secret", "NOT-BASE32", "--at", "1700000000"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid Base32 character"));
}

#[test]
fn test_verify_valid_and_invalid() {
    let valid = twofa(&["verify", "324550", "--secret", APP_SECRET, "--at", "1700000029"]);
    assert_eq!(valid.status.code(), Some(0));
    assert_eq!(stdout(&valid), "valid");

    let stale = twofa(&["verify", "324550", "--secret", APP_SECRET, "--at", "1700000061"]);
    assert_eq!(stale.status.code(), Some(1));
    assert_eq!(stdout(&stale), "invalid");
}

#[test]
fn test_verify_malformed_code_is_invalid() {
    let output = twofa(&["verify", "12a45", "--secret", APP_SECRET]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "invalid");
}

#[test]
fn test_verify_window_override_and_config() {
    // Three steps back is outside the default window
    let args = ["verify", "777646", "--secret", APP_SECRET, "--at", "1700000000"];
    assert_eq!(twofa(&args).status.code(), Some(1));

    let mut wide = args.to_vec();
    wide.extend(["--window", "3"]);
    assert_eq!(twofa(&wide).status.code(), Some(0));

    let config_dir = tempfile::tempdir().unwrap();
    std::fs::write(config_dir.path().join("config.toml"), "[totp]\nwindow = 3\n").unwrap();
    assert_eq!(twofa_with_config(config_dir.path(), &args).status.code(), Some(0));
}

#[test]
fn test_verify_window_too_large() {
    let output = twofa(&[
        "verify", "123456", "--secret", APP_SECRET, "--window", "50",
    ]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_enroll_text() {
    let output = twofa(&[
        "enroll", "--secret", APP_SECRET, "--account", "alice@example.com", "--issuer", "ACME",
    ]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains(&format!("Secret:  {}", APP_SECRET)));
    assert!(text.contains(
        "URI:     otpauth://totp/ACME:alice%40example.com?secret=JBSWY3DPEHPK3PXP&issuer=ACME&algorithm=SHA1&digits=6&period=30"
    ));
}

#[test]
fn test_enroll_json_generates_secret() {
    let output = twofa(&["enroll", "--json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(value["account"], "admin");
    assert_eq!(value["issuer"], "twofa");

    let secret = value["secret"].as_str().unwrap();
    assert_eq!(secret.len(), 32);
    assert_eq!(
        value["uri"].as_str().unwrap(),
        format!(
            "otpauth://totp/twofa:admin?secret={}&issuer=twofa&algorithm=SHA1&digits=6&period=30",
            secret
        )
    );
}

#[test]
fn test_enroll_uses_config_labels() {
    let config_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        config_dir.path().join("config.toml"),
        "[enrollment]\nissuer = \"Example Corp\"\naccount = \"ops\"\n",
    )
    .unwrap();

    let output = twofa_with_config(config_dir.path(), &["enroll", "--secret", APP_SECRET]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("otpauth://totp/Example%20Corp:ops?"));
}
