//! Integration tests for the sync command.
//!
//! No node is available in tests; these cover the checks that run before
//! any request and the error path of an unreachable node.

use predicates::prelude::*;

use super::helpers::lendpool_cmd;

const POOL: &str = "0x1111111111111111111111111111111111111111";
const UNREACHABLE: &str = "http://127.0.0.1:1";

#[test]
fn test_sync_zero_batch_size() {
    lendpool_cmd()
        .args([
            "sync",
            "--pool",
            POOL,
            "--from-block",
            "1",
            "--batch-size",
            "0",
            "--rpc-url",
            UNREACHABLE,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--batch-size must be at least 1"));
}

#[test]
fn test_sync_inverted_range() {
    lendpool_cmd()
        .args([
            "sync",
            "--pool",
            POOL,
            "--from-block",
            "10",
            "--to-block",
            "5",
            "--rpc-url",
            UNREACHABLE,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is after --to-block 5"));
}

#[test]
fn test_sync_invalid_rpc_url() {
    lendpool_cmd()
        .args([
            "sync",
            "--pool",
            POOL,
            "--from-block",
            "1",
            "--rpc-url",
            "not a url",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("RPC connection failed"));
}

#[test]
fn test_sync_unreachable_node() {
    lendpool_cmd()
        .args([
            "sync",
            "--pool",
            POOL,
            "--from-block",
            "1",
            "--to-block",
            "2",
            "--rpc-url",
            UNREACHABLE,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("RPC request failed"));
}

#[test]
fn test_sync_reads_env_config() {
    lendpool_cmd()
        .env("LENDPOOL_POOLS", format!("{},{}", POOL, POOL))
        .env("ETH_RPC_URL", UNREACHABLE)
        .args(["sync", "--from-block", "3", "--to-block", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--from-block 3 is after"));
}
