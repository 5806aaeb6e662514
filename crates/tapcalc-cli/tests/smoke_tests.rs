//! Smoke tests for the tapcalc binary

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a command for the tapcalc binary
fn tapcalc() -> Command {
    let mut cmd = Command::cargo_bin("tapcalc").expect("tapcalc binary should exist");
    cmd.env_remove("RUST_LOG").arg("--color").arg("never");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    tapcalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_lists_subcommands() {
    tapcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("press"))
        .stdout(predicate::str::contains("keypad"))
        .stdout(predicate::str::contains("palette"));
}

#[test]
fn test_no_args_fails() {
    tapcalc().assert().failure();
}

// ============================================================================
// press
// ============================================================================

#[test]
fn test_press_addition() {
    tapcalc()
        .args(["press", "7", "+", "5", "="])
        .assert()
        .success()
        .stdout(predicate::str::contains("value     12"))
        .stdout(predicate::str::contains("last      7 + 5 = 12"));
}

#[test]
fn test_press_rounds_to_eight_places() {
    tapcalc()
        .args(["press", "2", "÷", "3", "="])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.66666667"));
}

#[test]
fn test_press_json_output() {
    let output = tapcalc()
        .args(["press", "--format", "json", "6", "÷", "4", "="])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["value"], "1.5");
    assert_eq!(value["equation"], "");
    assert_eq!(value["last_result"], "6 ÷ 4 = 1.5");
}

#[test]
fn test_press_unknown_key_fails() {
    tapcalc()
        .args(["press", "7", "sqrt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Calculator error: Unknown key: sqrt"));
}

#[test]
fn test_press_requires_tokens() {
    tapcalc().arg("press").assert().failure();
}

// ============================================================================
// keypad and palette
// ============================================================================

#[test]
fn test_keypad_layout() {
    tapcalc()
        .arg("keypad")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[ C ] [+/-] [ % ] [ ÷ ]"));
}

#[test]
fn test_palette_light() {
    tapcalc()
        .args(["palette", "--theme", "light"])
        .assert()
        .success()
        .stdout(predicate::str::contains("light theme"))
        .stdout(predicate::str::contains("#f8f9fa"));
}
