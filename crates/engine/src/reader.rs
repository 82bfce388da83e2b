//! External reads of pool totals.
//!
//! The engine never computes a pool's totals; it asks a [`MarketReader`] for
//! them whenever an asset-movement event arrives. Each of the two reads can
//! fail on its own.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::error::{ReadError, TotalsField};

/// Synchronous source of a pool's current totals.
pub trait MarketReader {
    fn total_borrow_assets(&self, market: Address) -> Result<U256, ReadError>;
    fn total_supply_assets(&self, market: Address) -> Result<U256, ReadError>;
}

/// Totals already fetched for one market.
///
/// A `None` field stands for a read that failed upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketTotals {
    #[serde(default)]
    pub total_borrow_assets: Option<U256>,
    #[serde(default)]
    pub total_supply_assets: Option<U256>,
}

/// A [`MarketTotals`] bound to the market it was fetched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefetchedTotals {
    pub market: Address,
    pub totals: MarketTotals,
}

impl PrefetchedTotals {
    pub fn new(market: Address, totals: MarketTotals) -> Self {
        Self { market, totals }
    }

    /// A reader for which every read fails.
    pub fn unavailable(market: Address) -> Self {
        Self::new(market, MarketTotals::default())
    }

    fn read(&self, market: Address, field: TotalsField) -> Result<U256, ReadError> {
        let value = if market == self.market {
            match field {
                TotalsField::BorrowAssets => self.totals.total_borrow_assets,
                TotalsField::SupplyAssets => self.totals.total_supply_assets,
            }
        } else {
            None
        };
        value.ok_or(ReadError::Unavailable { market, field })
    }
}

impl MarketReader for PrefetchedTotals {
    fn total_borrow_assets(&self, market: Address) -> Result<U256, ReadError> {
        self.read(market, TotalsField::BorrowAssets)
    }

    fn total_supply_assets(&self, market: Address) -> Result<U256, ReadError> {
        self.read(market, TotalsField::SupplyAssets)
    }
}
