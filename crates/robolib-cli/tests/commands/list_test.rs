//! Tests for the `libraries` and `list` commands.

use assert_cmd::Command;
use predicates::prelude::*;

/// Test listing the bundled libraries.
#[test]
fn test_libraries() {
    let mut cmd = Command::cargo_bin("robolib").unwrap();
    cmd.arg("libraries");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Calculator"))
        .stdout(predicate::str::contains("Strings      hybrid API"))
        .stdout(predicate::str::contains("Broken"));
}

/// Test listing keywords of the default library.
#[test]
fn test_list_default_library() {
    let mut cmd = Command::cargo_bin("robolib").unwrap();
    cmd.env_remove("ROBOLIB_LIBRARY").arg("list");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Calculator 1.2.0 (dynamic API)"))
        .stdout(predicate::str::contains("Adds two numbers and returns the sum."))
        .stdout(predicate::str::contains("Random Integer"))
        .stdout(predicate::str::contains("Skipped").not());
}

/// Test that invalid keywords are listed as skipped.
#[test]
fn test_list_broken_library() {
    let mut cmd = Command::cargo_bin("robolib").unwrap();
    cmd.arg("list").arg("--library").arg("broken");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Works"))
        .stdout(predicate::str::contains(
            "Skipped: , Kwargs First, Default Before Required, Typed Ghost",
        ));
}

/// Test that strict loading fails on the first invalid keyword.
#[test]
fn test_list_broken_library_strict() {
    let mut cmd = Command::cargo_bin("robolib").unwrap();
    cmd.arg("list").arg("--library").arg("broken").arg("--strict");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to load library 'broken'"));
}

/// Test that strict loading can be enabled from the environment.
#[test]
fn test_list_strict_from_env() {
    let mut cmd = Command::cargo_bin("robolib").unwrap();
    cmd.env("ROBOLIB_STRICT", "yes")
        .arg("list")
        .arg("--library")
        .arg("Broken");

    cmd.assert().failure().code(1);
}
