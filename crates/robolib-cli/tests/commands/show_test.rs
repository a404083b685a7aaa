//! Tests for the `show` command.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// Test that show requires a keyword.
#[test]
fn test_show_requires_keyword() {
    let mut cmd = Command::cargo_bin("robolib").unwrap();
    cmd.arg("show");

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("<KEYWORD>"));
}

/// Test showing keyword information as JSON.
#[test]
fn test_show_keyword_json() {
    let mut cmd = Command::cargo_bin("robolib").unwrap();
    cmd.arg("show").arg("Divide");

    let output = cmd.assert().success().get_output().stdout.clone();
    let info: Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(info["name"], "Divide");
    assert_eq!(info["short_doc"], "Divides `numerator` by `denominator`.");
    assert_eq!(info["tags"][0], "arithmetic");
    assert_eq!(info["types"]["arguments"]["denominator"], "float");
    assert!(info["source"]
        .as_str()
        .unwrap()
        .contains("calculator.rs:"));
}

/// Test showing a hybrid member.
#[test]
fn test_show_hybrid_keyword() {
    let mut cmd = Command::cargo_bin("robolib").unwrap();
    cmd.arg("show")
        .arg("Length Should Be")
        .arg("--library")
        .arg("Strings");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"assertion\""))
        .stdout(predicate::str::contains("\"length\""));
}

/// Test showing an unknown keyword.
#[test]
fn test_show_unknown_keyword() {
    let mut cmd = Command::cargo_bin("robolib").unwrap();
    cmd.arg("show").arg("add");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No keyword with name 'add' found."));
}
