//! CLI integration tests

use std::process::Command;

/// Test that the CLI shows help
#[test]
fn test_cli_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "btm-cli", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI help should succeed");
    assert!(
        stdout.contains("Bearing Temperature Monitor"),
        "Should show app name"
    );
    assert!(stdout.contains("predict"), "Should show predict command");
    assert!(stdout.contains("log"), "Should show log command");
    assert!(stdout.contains("model"), "Should show model command");
    assert!(stdout.contains("status"), "Should show status command");
}

/// Test that the CLI shows version
#[test]
fn test_cli_version() {
    let output = Command::new("cargo")
        .args(["run", "-p", "btm-cli", "--", "--version"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI version should succeed");
    assert!(stdout.contains("btm"), "Should show binary name");
}

/// Test predict subcommand help
#[test]
fn test_predict_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "btm-cli", "--", "predict", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Predict help should succeed");
    assert!(stdout.contains("--mw"), "Should show mw option");
    assert!(stdout.contains("--mvar"), "Should show mvar option");
    assert!(
        stdout.contains("--oil-pressure"),
        "Should show oil-pressure option"
    );
    assert!(stdout.contains("100-300"), "Should document the MW range");
}

/// Test that out-of-range readings are rejected before any request is sent
#[test]
fn test_predict_rejects_out_of_range_mw() {
    let output = Command::new("cargo")
        .args(["run", "-p", "btm-cli", "--", "predict", "--mw", "50"])
        .output()
        .expect("Failed to execute command");

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success(), "Out-of-range mw should fail");
    assert!(
        stderr.contains("must be within 100-300"),
        "Should explain the valid range, got: {stderr}"
    );
}

/// Test log subcommand help
#[test]
fn test_log_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "btm-cli", "--", "log", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Log help should succeed");
    assert!(stdout.contains("show"), "Should show show subcommand");
    assert!(stdout.contains("export"), "Should show export subcommand");
    assert!(stdout.contains("clear"), "Should show clear subcommand");
}

/// Test log export subcommand help
#[test]
fn test_log_export_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "btm-cli", "--", "log", "export", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Log export help should succeed");
    assert!(stdout.contains("--output"), "Should show output option");
}
