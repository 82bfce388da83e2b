//! Kinked utilization-based interest rate model.
//!
//! The borrow rate is a two-segment piecewise-linear function of utilization
//! with a kink at the market's optimal utilization:
//!
//! ```text
//! utilization = total_borrow * scale / total_supply
//!
//! If utilization <= optimal:
//!     rate = base_rate + utilization * (rate_at_optimal - base_rate) / optimal
//! If utilization > optimal:
//!     rate = rate_at_optimal
//!          + (utilization - optimal) * (scale - rate_at_optimal) / (scale - optimal)
//! ```
//!
//! `scale` is the `scaled_percentage` of the rate model linked to the market,
//! or 100% ([`WAD`]) when no model is linked. At full utilization the rate
//! therefore reaches `scale`.
//!
//! All divisions truncate. A segment whose end rate is below its start rate
//! slopes downward. Degenerate curves have fixed fallbacks:
//!
//! | Condition | Utilization | Borrow rate |
//! |-----------|-------------|-------------|
//! | supply or borrow is zero | 0 | `base_rate` |
//! | `optimal == 0`, utilization 0 | 0 | `base_rate` |
//! | `scale == optimal` (excess regime) | computed | `rate_at_optimal` |
//!
//! # Example
//!
//! ```rust
//! use lendpool_rs_engine::irm::{get_borrow_rate, RateCurve, ScaleFactor};
//! use alloy_primitives::U256;
//!
//! let curve = RateCurve {
//!     base_rate: U256::ZERO,
//!     optimal_utilization: U256::from(800_000_000_000_000_000u64), // 80%
//!     rate_at_optimal: U256::from(80_000_000_000_000_000u64),      // 8%
//!     scale: ScaleFactor::default(),
//! };
//!
//! let result = get_borrow_rate(U256::from(50), U256::from(100), &curve);
//! assert_eq!(result.utilization, U256::from(500_000_000_000_000_000u64)); // 50%
//! assert_eq!(result.borrow_rate, U256::from(50_000_000_000_000_000u64)); // 5%
//! ```

use alloy_primitives::U256;
use tracing::debug;

use crate::math::{mul_div_down, zero_floor_sub, WAD};
use crate::records::Market;
use crate::store::{get_or_create_rate_model, Store};

/// Scale applied to utilization, WAD-scaled. Defaults to 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleFactor(pub U256);

impl Default for ScaleFactor {
    fn default() -> Self {
        ScaleFactor(WAD)
    }
}

/// Curve parameters driving [`get_borrow_rate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateCurve {
    pub base_rate: U256,
    pub optimal_utilization: U256,
    pub rate_at_optimal: U256,
    pub scale: ScaleFactor,
}

impl RateCurve {
    /// Reads the curve parameters off a market.
    pub fn from_market(market: &Market, scale: ScaleFactor) -> Self {
        Self {
            base_rate: market.base_rate,
            optimal_utilization: market.optimal_utilization,
            rate_at_optimal: market.rate_at_optimal,
            scale,
        }
    }
}

/// Output of a rate computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorrowRateResult {
    /// Scaled utilization (WAD)
    pub utilization: U256,
    /// Borrow rate (WAD)
    pub borrow_rate: U256,
}

/// Utilization of a pool, scaled: `total_borrow * scale / total_supply`.
///
/// Returns zero when either total is zero.
pub fn get_utilization(
    total_borrow_assets: U256,
    total_supply_assets: U256,
    scale: ScaleFactor,
) -> U256 {
    if total_supply_assets.is_zero() || total_borrow_assets.is_zero() {
        return U256::ZERO;
    }
    mul_div_down(total_borrow_assets, scale.0, total_supply_assets)
}

/// Borrow rate on the curve at a given utilization.
///
/// Segments whose end rate sits below their start rate slope downward. The
/// quotient is truncated before it is subtracted, so results round toward
/// the start rate on both kinds of slope.
pub fn borrow_rate_at(utilization: U256, curve: &RateCurve) -> U256 {
    let optimal = curve.optimal_utilization;

    if utilization <= optimal {
        // Only reachable with zero utilization when optimal is zero
        if optimal.is_zero() {
            return curve.base_rate;
        }
        return along_segment(curve.base_rate, curve.rate_at_optimal, utilization, optimal);
    }

    let scale = curve.scale.0;
    let excess = utilization - optimal;
    let max_excess = zero_floor_sub(scale, optimal);
    if max_excess.is_zero() {
        return curve.rate_at_optimal;
    }
    along_segment(curve.rate_at_optimal, scale, excess, max_excess)
}

/// `start + progress * (end - start) / length`, with a signed slope.
fn along_segment(start: U256, end: U256, progress: U256, length: U256) -> U256 {
    if end >= start {
        start.saturating_add(mul_div_down(progress, end - start, length))
    } else {
        zero_floor_sub(start, mul_div_down(progress, start - end, length))
    }
}

/// Computes utilization and borrow rate for the given totals.
///
/// A pool with no supply or no borrow sits at zero utilization and pays the
/// base rate.
pub fn get_borrow_rate(
    total_borrow_assets: U256,
    total_supply_assets: U256,
    curve: &RateCurve,
) -> BorrowRateResult {
    if total_supply_assets.is_zero() || total_borrow_assets.is_zero() {
        return BorrowRateResult {
            utilization: U256::ZERO,
            borrow_rate: curve.base_rate,
        };
    }

    let utilization = get_utilization(total_borrow_assets, total_supply_assets, curve.scale);
    BorrowRateResult {
        utilization,
        borrow_rate: borrow_rate_at(utilization, curve),
    }
}

/// Resolves the scale for a market from its linked rate model.
///
/// A linked model that has not been seen yet is created with its default
/// scale. Unlinked markets get `None`.
pub fn resolve_scale<S: Store + ?Sized>(
    store: &mut S,
    market: &Market,
) -> Option<ScaleFactor> {
    market
        .interest_rate_model
        .map(|irm| ScaleFactor(get_or_create_rate_model(store, irm).scaled_percentage))
}

/// Recomputes `utilization` and `borrow_rate` for `market` and persists it.
pub fn update_borrow_rate<S: Store + ?Sized>(store: &mut S, market: &mut Market) {
    let scale = resolve_scale(store, market).unwrap_or_default();
    let curve = RateCurve::from_market(market, scale);
    let result = get_borrow_rate(market.total_borrow_assets, market.total_supply_assets, &curve);

    market.utilization = result.utilization;
    market.borrow_rate = result.borrow_rate;
    store.save_market(market);

    debug!(
        market = %market.id,
        utilization = %result.utilization,
        borrow_rate = %result.borrow_rate,
        "recomputed borrow rate"
    );
}
