//! Fixed-point arithmetic over WAD-scaled unsigned integers.
//!
//! Every rate and utilization handled by the engine is a `U256` scaled by
//! [`WAD`] (1e18 represents 1.0, i.e. 100%). There is no floating point on the
//! state path; [`rate_to_f64`] exists for display only.

use alloy_primitives::{U256, U512};

/// Zero.
pub const ZERO: U256 = U256::ZERO;

/// WAD (1e18), the fixed-point unit representing 1.0.
pub const WAD: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// Computes `x * y / d` rounding down.
///
/// The product is formed in 512 bits so it never wraps. A quotient that does
/// not fit in 256 bits saturates at `U256::MAX`.
///
/// # Panics
///
/// Panics if `d` is zero. Callers guard their divisors.
pub fn mul_div_down(x: U256, y: U256, d: U256) -> U256 {
    let wide = U512::from(x) * U512::from(y) / U512::from(d);
    U256::saturating_from(wide)
}

/// Returns `x - y`, or zero when `y > x`.
pub fn zero_floor_sub(x: U256, y: U256) -> U256 {
    x.saturating_sub(y)
}

/// Converts a WAD-scaled value to `f64` (1e18 -> 1.0).
pub fn rate_to_f64(value: U256) -> f64 {
    value.saturating_to::<u128>() as f64 / 1e18
}
