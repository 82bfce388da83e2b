//! Test helper utilities for CLI integration tests.

#![allow(deprecated)] // Command::cargo_bin deprecation

use alloy_primitives::U256;
use assert_cmd::Command;
use serde_json::Value;

/// Create a CLI command with the lendpool environment cleared.
pub fn lendpool_cmd() -> Command {
    let mut cmd = Command::cargo_bin("lendpool").unwrap();
    cmd.env_remove("ETH_RPC_URL")
        .env_remove("LENDPOOL_POOLS")
        .env_remove("LENDPOOL_IRMS")
        .env_remove("RUST_LOG");
    cmd
}

/// Absolute path of a fixture file.
pub fn fixture_path(name: &str) -> String {
    format!(
        "{}/tests/fixtures/{}.json",
        env!("CARGO_MANIFEST_DIR"),
        name
    )
}

/// Run a command expected to succeed and parse its stdout as JSON.
pub fn run_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap_or_else(|e| panic!("stdout is not JSON: {}", e))
}

/// Read a JSON string field holding a U256 (hex or decimal).
pub fn u256_field(value: &Value, field: &str) -> U256 {
    value[field]
        .as_str()
        .unwrap_or_else(|| panic!("missing field {}", field))
        .parse()
        .unwrap()
}

/// `p` percent, WAD-scaled.
pub fn percent(p: u64) -> U256 {
    U256::from(p) * U256::from(10u64).pow(U256::from(16u64))
}
