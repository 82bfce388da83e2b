//! Derived records materialized from lending pool events.
//!
//! Three record kinds are kept:
//! - [`Market`]: one per lending pool address, holding the rate curve
//!   parameters, the last refreshed totals and the cached utilization and
//!   borrow rate.
//! - [`RateModelConfig`]: one per interest rate model contract, holding the
//!   scale factor applied to utilization.
//! - [`UserPosition`]: one per (market, user) pair, tracking liquidity
//!   deposited and withdrawn.

use alloy_primitives::{Address, FixedBytes, U256};
use serde::{Deserialize, Serialize};

use crate::math::{zero_floor_sub, WAD};

/// Identifier of a [`UserPosition`]: market address followed by user address.
pub type PositionId = FixedBytes<40>;

/// Builds the [`PositionId`] for a (market, user) pair.
pub fn position_id(market: Address, user: Address) -> PositionId {
    let mut bytes = [0u8; 40];
    bytes[..20].copy_from_slice(market.as_slice());
    bytes[20..].copy_from_slice(user.as_slice());
    FixedBytes(bytes)
}

/// A lending market, keyed by its pool address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    /// Lending pool address
    pub id: Address,

    /// Total borrowed assets, as last read from the pool
    pub total_borrow_assets: U256,

    /// Total supplied assets, as last read from the pool
    pub total_supply_assets: U256,

    /// Borrow rate at zero utilization (WAD-scaled)
    pub base_rate: U256,

    /// Utilization at which the curve kinks (WAD-scaled)
    pub optimal_utilization: U256,

    /// Borrow rate at the kink (WAD-scaled)
    pub rate_at_optimal: U256,

    /// Configured maximum utilization (WAD-scaled). Not part of the rate curve.
    pub max_utilization: U256,

    /// Cached borrow rate from the last recompute (WAD-scaled)
    pub borrow_rate: U256,

    /// Cached utilization from the last recompute (WAD-scaled)
    pub utilization: U256,

    /// Linked interest rate model contract, if any
    pub interest_rate_model: Option<Address>,

    /// Number of distinct users that ever held a position here
    pub users: u64,

    /// Configured deposit cap; zero means no cap. Stored, not enforced.
    pub deposit_cap: U256,
}

impl Market {
    /// Creates a market with every numeric field zeroed.
    pub fn new(id: Address) -> Self {
        Self {
            id,
            total_borrow_assets: U256::ZERO,
            total_supply_assets: U256::ZERO,
            base_rate: U256::ZERO,
            optimal_utilization: U256::ZERO,
            rate_at_optimal: U256::ZERO,
            max_utilization: U256::ZERO,
            borrow_rate: U256::ZERO,
            utilization: U256::ZERO,
            interest_rate_model: None,
            users: 0,
            deposit_cap: U256::ZERO,
        }
    }
}

/// Scale configuration of an interest rate model contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateModelConfig {
    /// Interest rate model address
    pub id: Address,

    /// Scale applied to utilization (WAD-scaled, WAD = 100%)
    pub scaled_percentage: U256,
}

impl RateModelConfig {
    /// Creates a config with `scaled_percentage` of 100%.
    pub fn new(id: Address) -> Self {
        Self {
            id,
            scaled_percentage: WAD,
        }
    }
}

/// A user's liquidity position in one market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPosition {
    /// Market address ++ user address
    pub id: PositionId,
    pub market: Address,
    pub user: Address,

    /// Asset address seen on the most recent supply or withdraw
    pub token: Option<Address>,

    pub total_deposited: U256,
    pub total_withdrawn: U256,

    /// `total_deposited - total_withdrawn`
    pub current_balance: U256,
}

impl UserPosition {
    /// Creates an empty position for the given pair.
    pub fn new(market: Address, user: Address) -> Self {
        Self {
            id: position_id(market, user),
            market,
            user,
            token: None,
            total_deposited: U256::ZERO,
            total_withdrawn: U256::ZERO,
            current_balance: U256::ZERO,
        }
    }

    /// Records a supply of `amount`.
    pub fn deposit(&mut self, amount: U256, token: Address) {
        self.total_deposited = self.total_deposited.saturating_add(amount);
        self.current_balance = self.current_balance.saturating_add(amount);
        self.token = Some(token);
    }

    /// Records a withdrawal of `amount`.
    ///
    /// The balance is floored at zero; `total_withdrawn` always grows by the
    /// full amount. Returns `false` when the withdrawal exceeded the balance.
    pub fn withdraw(&mut self, amount: U256, token: Address) -> bool {
        let covered = amount <= self.current_balance;
        self.total_withdrawn = self.total_withdrawn.saturating_add(amount);
        self.current_balance = zero_floor_sub(self.current_balance, amount);
        self.token = Some(token);
        covered
    }
}
