//! CLI argument validation tests.
//!
//! These tests verify that the CLI properly validates arguments and provides
//! helpful error messages without requiring network access.

use predicates::prelude::*;

use super::helpers::lendpool_cmd;

#[test]
fn test_help_output() {
    lendpool_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("lendpool"))
        .stdout(predicate::str::contains("sync"))
        .stdout(predicate::str::contains("replay"))
        .stdout(predicate::str::contains("rate"));
}

#[test]
fn test_sync_help_output() {
    lendpool_cmd()
        .args(["sync", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--pool"))
        .stdout(predicate::str::contains("--irm"))
        .stdout(predicate::str::contains("--from-block"))
        .stdout(predicate::str::contains("--batch-size"))
        .stdout(predicate::str::contains("--record"));
}

#[test]
fn test_rate_help_output() {
    lendpool_cmd()
        .args(["rate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--optimal-utilization"))
        .stdout(predicate::str::contains("--rate-at-optimal"))
        .stdout(predicate::str::contains("--scale"));
}

#[test]
fn test_invalid_command() {
    lendpool_cmd()
        .arg("invalid_command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_sync_missing_pool() {
    lendpool_cmd()
        .args(["sync", "--from-block", "1", "--rpc-url", "http://127.0.0.1:1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_sync_missing_rpc_url() {
    lendpool_cmd()
        .args([
            "sync",
            "--pool",
            "0x1111111111111111111111111111111111111111",
            "--from-block",
            "1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--rpc-url"));
}

#[test]
fn test_sync_invalid_pool_address() {
    lendpool_cmd()
        .args([
            "sync",
            "--pool",
            "0x1234",
            "--from-block",
            "1",
            "--rpc-url",
            "http://127.0.0.1:1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--pool"));
}

#[test]
fn test_replay_missing_file_argument() {
    lendpool_cmd()
        .arg("replay")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_invalid_output_format() {
    lendpool_cmd()
        .args(["replay", "x.json", "--format", "invalid_format"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
