//! Tests for the command-line surface of the binary

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_overrides() {
    Command::cargo_bin("bidquiz")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--server"))
        .stdout(predicate::str::contains("--data-dir"))
        .stdout(predicate::str::contains("--page-size"));
}

#[test]
fn test_rejects_unsupported_page_size() {
    Command::cargo_bin("bidquiz")
        .unwrap()
        .args(["--page-size", "25"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("page size must be one of"));
}
