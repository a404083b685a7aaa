//! Tests for the `run` command.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Test a passing keyword.
#[test]
fn test_run_pass() {
    let mut cmd = Command::cargo_bin("robolib").unwrap();
    cmd.arg("run").arg("Add").arg("40").arg("2");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("PASS"))
        .stdout(predicate::str::contains("Return: 42"));
}

/// Test negative numbers are passed as arguments.
#[test]
fn test_run_negative_numbers() {
    let mut cmd = Command::cargo_bin("robolib").unwrap();
    cmd.arg("run").arg("Sum All").arg("-1").arg("-2.5").arg("10");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Return: 6.5"));
}

/// Test a failing keyword exits with 1.
#[test]
fn test_run_fail() {
    let mut cmd = Command::cargo_bin("robolib").unwrap();
    cmd.arg("run").arg("Divide").arg("1").arg("0");

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("FAIL: Cannot divide by zero."));
}

/// Test a skipped keyword exits with 3.
#[test]
fn test_run_skip() {
    let mut cmd = Command::cargo_bin("robolib").unwrap();
    cmd.arg("run")
        .arg("Skip If")
        .arg("true")
        .arg("--named")
        .arg("reason=not on this platform");

    cmd.assert()
        .code(3)
        .stdout(predicate::str::contains("SKIP: not on this platform"));
}

/// Test arity errors are reported before the library runs the keyword.
#[test]
fn test_run_wrong_argument_count() {
    let mut cmd = Command::cargo_bin("robolib").unwrap();
    cmd.arg("run").arg("Add").arg("1").arg("2").arg("3");

    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains(
            "FAIL: Keyword expected 2 argument(s), got 3.",
        ));
}

/// Test named-only arguments and JSON output.
#[test]
fn test_run_seeded_random_json() {
    let run = || {
        let mut cmd = Command::cargo_bin("robolib").unwrap();
        cmd.arg("run")
            .arg("Random Integer")
            .arg("1")
            .arg("1000")
            .arg("-n")
            .arg("seed=42")
            .arg("--json");
        let output = cmd.assert().success().get_output().stdout.clone();
        serde_json::from_slice::<Value>(&output).unwrap()
    };

    let first = run();
    let second = run();
    assert_eq!(first["status"], "PASS");
    assert_eq!(first["return_value"], second["return_value"]);
    assert!(first["started_at"].is_string());
}

/// Test malformed named arguments are usage errors.
#[test]
fn test_run_malformed_named() {
    let mut cmd = Command::cargo_bin("robolib").unwrap();
    cmd.arg("run").arg("Add").arg("--named").arg("oops");

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("expected `name=value`"));
}

/// Test a hybrid keyword reading a file.
#[test]
fn test_run_read_text_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("greeting.txt");
    fs::write(&path, "hello").unwrap();

    let mut cmd = Command::cargo_bin("robolib").unwrap();
    cmd.arg("run")
        .arg("Read Text File")
        .arg(path.to_str().unwrap())
        .arg("--library")
        .arg("Strings");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Return: \"hello\""));
}

/// Test unexpected errors are reported as failures.
#[test]
fn test_run_unexpected_error() {
    let mut cmd = Command::cargo_bin("robolib").unwrap();
    cmd.arg("run")
        .arg("Read Text File")
        .arg("/nonexistent/file.txt")
        .arg("--library")
        .arg("Strings")
        .arg("--json");

    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("\"unexpected\": true"));
}
