// Integration tests for the aptscore CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes, stdout/stderr output, and argument handling.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the aptscore binary.
fn aptscore() -> Command {
    Command::cargo_bin("aptscore").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    aptscore()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("aptscore"));
}

#[test]
fn cli_help_flag() {
    aptscore()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("desirability scoring"));
}

#[test]
fn score_requires_path() {
    aptscore()
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn batch_requires_path() {
    aptscore()
        .arg("batch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn score_rejects_missing_file() {
    aptscore()
        .args(["score", "/tmp/does-not-exist-listing.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn score_rejects_unknown_format() {
    aptscore()
        .args(["score", "listing.json", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    aptscore()
        .args(["--quiet", "--verbose", "weights"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
