//! Detailed output formatting for a single rate evaluation.

use alloy_primitives::U256;
use colored::Colorize;
use lendpool_rs_engine::{BorrowRateResult, RateCurve};

use super::table::format_percent;

fn regime(utilization: U256, curve: &RateCurve) -> &'static str {
    if utilization <= curve.optimal_utilization {
        "below kink"
    } else {
        "above kink"
    }
}

pub fn format_rate_detail(
    borrow: U256,
    supply: U256,
    curve: &RateCurve,
    result: &BorrowRateResult,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", "Curve".cyan().bold()));
    output.push_str(&format!("  Base Rate:           {}\n", format_percent(curve.base_rate)));
    output.push_str(&format!(
        "  Optimal Utilization: {}\n",
        format_percent(curve.optimal_utilization)
    ));
    output.push_str(&format!(
        "  Rate At Optimal:     {}\n",
        format_percent(curve.rate_at_optimal)
    ));
    output.push_str(&format!("  Scale:               {}\n\n", format_percent(curve.scale.0)));

    output.push_str(&format!("{}\n", "Pool".cyan().bold()));
    output.push_str(&format!("  Total Borrowed: {}\n", borrow));
    output.push_str(&format!("  Total Supplied: {}\n\n", supply));

    output.push_str(&format!("{}\n", "Result".cyan().bold()));
    output.push_str(&format!(
        "  Utilization: {} ({})\n",
        format_percent(result.utilization),
        regime(result.utilization, curve)
    ));
    output.push_str(&format!("  Borrow Rate: {}", format_percent(result.borrow_rate).bold()));

    output
}
