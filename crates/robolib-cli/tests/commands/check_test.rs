//! Tests for the `check` command.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// Test a conformant library.
#[test]
fn test_check_conformant() {
    let mut cmd = Command::cargo_bin("robolib").unwrap();
    cmd.arg("check").arg("--library").arg("Strings");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Strings (hybrid API): 6 keyword(s)"))
        .stdout(predicate::str::contains("Conformance: PASSED"));
}

/// Test a library with issues.
#[test]
fn test_check_broken() {
    let mut cmd = Command::cargo_bin("robolib").unwrap();
    cmd.arg("check").arg("--library").arg("Broken");

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Keyword name at position 1 is empty."))
        .stdout(predicate::str::contains("Keyword 'Works' is reported multiple times."))
        .stdout(predicate::str::contains("Conformance: FAILED (6 issue(s))"));
}

/// Test the JSON report.
#[test]
fn test_check_json() {
    let mut cmd = Command::cargo_bin("robolib").unwrap();
    cmd.arg("check").arg("--library").arg("Broken").arg("--json");

    let output = cmd.assert().code(1).get_output().stdout.clone();
    let report: Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(report["library"], "Broken");
    assert_eq!(report["issues"].as_array().unwrap().len(), 6);
    assert_eq!(report["issues"][5]["kind"], "malformed_source");
}
