//! Rate command implementation.

use anyhow::Result;
use lendpool_rs_engine::{get_borrow_rate, RateCurve, ScaleFactor};
use serde_json::json;

use crate::cli::{OutputFormat, RateArgs};
use crate::output::format_rate_detail;

pub fn run_rate(args: &RateArgs, format: OutputFormat) -> Result<()> {
    let curve = RateCurve {
        base_rate: args.base_rate,
        optimal_utilization: args.optimal_utilization,
        rate_at_optimal: args.rate_at_optimal,
        scale: ScaleFactor(args.scale),
    };
    let result = get_borrow_rate(args.borrow, args.supply, &curve);

    match format {
        OutputFormat::Table => {
            println!(
                "{}",
                format_rate_detail(args.borrow, args.supply, &curve, &result)
            );
        }
        OutputFormat::Json => {
            // Same U256 encoding as the snapshot and audit output
            let value = json!({
                "totalBorrowAssets": args.borrow,
                "totalSupplyAssets": args.supply,
                "utilization": result.utilization,
                "borrowRate": result.borrow_rate,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}
