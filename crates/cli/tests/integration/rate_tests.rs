//! Integration tests for the rate command.

use alloy_primitives::U256;
use predicates::prelude::*;

use super::helpers::{lendpool_cmd, percent, run_json, u256_field};

const OPTIMAL: &str = "800000000000000000";
const RATE_AT_OPTIMAL: &str = "80000000000000000";

#[test]
fn test_rate_below_kink_json() {
    let json = run_json(lendpool_cmd().args([
        "rate",
        "--borrow",
        "50",
        "--supply",
        "100",
        "--optimal-utilization",
        OPTIMAL,
        "--rate-at-optimal",
        RATE_AT_OPTIMAL,
        "--format",
        "json",
    ]));

    assert_eq!(u256_field(&json, "utilization"), percent(50));
    assert_eq!(u256_field(&json, "borrowRate"), percent(5));
}

#[test]
fn test_rate_above_kink_json() {
    let json = run_json(lendpool_cmd().args([
        "rate",
        "--borrow",
        "90",
        "--supply",
        "100",
        "--optimal-utilization",
        OPTIMAL,
        "--rate-at-optimal",
        RATE_AT_OPTIMAL,
        "--format",
        "json",
    ]));

    assert_eq!(u256_field(&json, "utilization"), percent(90));
    assert_eq!(u256_field(&json, "borrowRate"), percent(54));
}

#[test]
fn test_rate_with_scale() {
    let json = run_json(lendpool_cmd().args([
        "rate",
        "--borrow",
        "50",
        "--supply",
        "100",
        "--optimal-utilization",
        OPTIMAL,
        "--rate-at-optimal",
        RATE_AT_OPTIMAL,
        "--scale",
        "500000000000000000",
        "--format",
        "json",
    ]));

    assert_eq!(u256_field(&json, "utilization"), percent(25));
}

#[test]
fn test_rate_zero_supply() {
    let json = run_json(lendpool_cmd().args([
        "rate",
        "--borrow",
        "10",
        "--supply",
        "0",
        "--base-rate",
        "20000000000000000",
        "--optimal-utilization",
        OPTIMAL,
        "--rate-at-optimal",
        RATE_AT_OPTIMAL,
        "--format",
        "json",
    ]));

    // Zero supply means zero utilization, leaving only the base rate
    assert_eq!(u256_field(&json, "utilization"), U256::ZERO);
    assert_eq!(u256_field(&json, "borrowRate"), percent(2));
}

#[test]
fn test_rate_json_matches_record_encoding() {
    let json = run_json(lendpool_cmd().args([
        "rate",
        "--borrow",
        "50",
        "--supply",
        "100",
        "--optimal-utilization",
        OPTIMAL,
        "--rate-at-optimal",
        RATE_AT_OPTIMAL,
        "--format",
        "json",
    ]));

    // Markets in snapshots carry U256 fields in the same serde form
    let expected = serde_json::to_value(percent(5)).unwrap();
    assert_eq!(json["borrowRate"], expected);
    assert_eq!(json["totalSupplyAssets"], serde_json::to_value(U256::from(100)).unwrap());
}

#[test]
fn test_rate_zero_optimal_takes_excess_segment() {
    let json = run_json(lendpool_cmd().args([
        "rate",
        "--borrow",
        "50",
        "--supply",
        "100",
        "--base-rate",
        "10000000000000000",
        "--optimal-utilization",
        "0",
        "--rate-at-optimal",
        RATE_AT_OPTIMAL,
        "--format",
        "json",
    ]));

    assert_eq!(u256_field(&json, "utilization"), percent(50));
    assert_eq!(u256_field(&json, "borrowRate"), percent(54));
}

#[test]
fn test_rate_table_output() {
    lendpool_cmd()
        .args([
            "rate",
            "--borrow",
            "90",
            "--supply",
            "100",
            "--optimal-utilization",
            OPTIMAL,
            "--rate-at-optimal",
            RATE_AT_OPTIMAL,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("90.00% (above kink)"))
        .stdout(predicate::str::contains("54.00%"));
}

#[test]
fn test_rate_rejects_non_numeric() {
    lendpool_cmd()
        .args([
            "rate",
            "--borrow",
            "lots",
            "--supply",
            "100",
            "--optimal-utilization",
            OPTIMAL,
            "--rate-at-optimal",
            RATE_AT_OPTIMAL,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--borrow"));
}
