//! End-to-end CLI tests
//!
//! The probe tests point at 127.0.0.1:1, a port that refuses connections,
//! so they exercise the failure path without needing a running server.

use assert_cmd::prelude::*;
use std::process::Command;

#[test]
fn test_cli_help_command() {
    let mut cmd = Command::cargo_bin("dbprobe").unwrap();
    let output = cmd.arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("MySQL-compatible server"));
    assert!(stdout.contains("probe"));
    assert!(stdout.contains("diagnostics"));
}

#[test]
fn test_cli_version_command() {
    let mut cmd = Command::cargo_bin("dbprobe").unwrap();
    let output = cmd.arg("--version").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("dbprobe"));
    assert!(stdout.contains("0.1.0"));
}

#[test]
fn test_probe_failure_prints_error_and_nothing_else() {
    let mut cmd = Command::cargo_bin("dbprobe").unwrap();
    cmd.args(["probe", "--host", "127.0.0.1", "--port", "1"]);
    let output = cmd.output().unwrap();

    assert!(
        !output.status.success(),
        "probe against a refused port must fail"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Connection error: ("),
        "error line must carry the numeric code: {stderr}"
    );

    // No banner and no report on the failure path
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Successfully connected"));
    assert!(!stdout.contains("=== dbprobe diagnostics ==="));
}

#[test]
fn test_probe_failure_code_is_nonzero() {
    let mut cmd = Command::cargo_bin("dbprobe").unwrap();
    cmd.args(["probe", "--host", "127.0.0.1", "--port", "1"]);
    let output = cmd.output().unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    // Refused TCP connection maps to CR_CONN_HOST_ERROR
    assert!(stderr.contains("(2003)"), "unexpected stderr: {stderr}");
}

#[test]
fn test_diagnostics_command_prints_report_once() {
    let mut cmd = Command::cargo_bin("dbprobe").unwrap();
    let output = cmd.arg("diagnostics").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("=== dbprobe diagnostics ===").count(), 1);
    assert!(stdout.contains("Server version: (not connected)"));
}

#[test]
fn test_diagnostics_redacts_password_env() {
    let mut cmd = Command::cargo_bin("dbprobe").unwrap();
    cmd.arg("diagnostics").env("MYSQL_PASSWORD", "topsecret123");
    let output = cmd.output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("topsecret123"));
    assert!(stdout.contains("MYSQL_PASSWORD=[REDACTED]"));
}
