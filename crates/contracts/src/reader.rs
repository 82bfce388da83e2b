//! Read client for lending pool state and logs.

use std::collections::BTreeMap;

use alloy::{
    eips::{BlockId, BlockNumberOrTag},
    primitives::{Address, U256},
    providers::Provider,
    rpc::types::{Filter, Log},
};
use lendpool_rs_engine::{MarketTotals, ReplayEntry};
use tracing::{debug, warn};

use crate::decode::decode_log;
use crate::error::{ContractError, Result};
use crate::lending_pool::ILendingPool;
use crate::provider::{connect_http, HttpProvider};

/// Client for reading pool totals, logs and block timestamps.
#[derive(Clone)]
pub struct LendingPoolReader {
    provider: HttpProvider,
}

impl LendingPoolReader {
    /// Create a new reader connected to `rpc_url`.
    pub fn new(rpc_url: &str) -> Result<Self> {
        Ok(Self {
            provider: connect_http(rpc_url)?,
        })
    }

    /// Get a pool's total borrowed assets as of the end of `block`.
    pub async fn total_borrow_assets(&self, pool: Address, block: u64) -> Result<U256> {
        let contract = ILendingPool::new(pool, &self.provider);
        let result = contract
            .totalBorrowAssets()
            .block(BlockId::number(block))
            .call()
            .await
            .map_err(|e| ContractError::Rpc(format!("Failed to get totalBorrowAssets: {}", e)))?;
        Ok(result)
    }

    /// Get a pool's total supplied assets as of the end of `block`.
    pub async fn total_supply_assets(&self, pool: Address, block: u64) -> Result<U256> {
        let contract = ILendingPool::new(pool, &self.provider);
        let result = contract
            .totalSupplyAssets()
            .block(BlockId::number(block))
            .call()
            .await
            .map_err(|e| ContractError::Rpc(format!("Failed to get totalSupplyAssets: {}", e)))?;
        Ok(result)
    }

    /// Read both totals of a pool.
    ///
    /// The reads are independent: a failed read leaves its field `None` and
    /// does not affect the other.
    pub async fn fetch_totals(&self, pool: Address, block: u64) -> MarketTotals {
        let total_borrow_assets = match self.total_borrow_assets(pool, block).await {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(%pool, block, error = %e, "totalBorrowAssets read failed");
                None
            }
        };
        let total_supply_assets = match self.total_supply_assets(pool, block).await {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(%pool, block, error = %e, "totalSupplyAssets read failed");
                None
            }
        };

        MarketTotals {
            total_borrow_assets,
            total_supply_assets,
        }
    }

    /// Get the latest block number.
    pub async fn latest_block(&self) -> Result<u64> {
        self.provider
            .get_block_number()
            .await
            .map_err(|e| ContractError::Rpc(format!("Failed to get block number: {}", e)))
    }

    /// Get the timestamp of a block.
    pub async fn block_timestamp(&self, block: u64) -> Result<u64> {
        let response = self
            .provider
            .get_block_by_number(BlockNumberOrTag::Number(block))
            .await
            .map_err(|e| ContractError::Rpc(format!("Failed to get block {}: {}", block, e)))?
            .ok_or(ContractError::BlockNotFound(block))?;
        Ok(response.header.timestamp)
    }

    /// Get all logs emitted by `addresses` in the inclusive block range.
    pub async fn get_logs(&self, addresses: &[Address], from: u64, to: u64) -> Result<Vec<Log>> {
        let filter = Filter::new()
            .address(addresses.to_vec())
            .from_block(from)
            .to_block(to);
        self.provider
            .get_logs(&filter)
            .await
            .map_err(|e| ContractError::Rpc(format!("Failed to get logs: {}", e)))
    }

    /// Fetch, decode and order the events of a block range.
    ///
    /// Logs are sorted by `(block_number, log_index)`. Missing block
    /// timestamps are looked up once per block. Events that move pool assets
    /// carry the pool totals read at their block; all others carry none.
    pub async fn fetch_entries(
        &self,
        addresses: &[Address],
        from: u64,
        to: u64,
    ) -> Result<Vec<ReplayEntry>> {
        let mut logs = self.get_logs(addresses, from, to).await?;
        logs.sort_by_key(|log| (log.block_number, log.log_index));

        let mut timestamps: BTreeMap<u64, u64> = BTreeMap::new();
        let mut entries = Vec::with_capacity(logs.len());

        for mut log in logs {
            if log.block_timestamp.is_none() {
                if let Some(block) = log.block_number {
                    let timestamp = match timestamps.get(&block) {
                        Some(timestamp) => *timestamp,
                        None => {
                            let timestamp = self.block_timestamp(block).await?;
                            timestamps.insert(block, timestamp);
                            timestamp
                        }
                    };
                    log.block_timestamp = Some(timestamp);
                }
            }

            let Some(event) = decode_log(&log)? else {
                debug!(address = %log.address(), "ignoring unknown log");
                continue;
            };

            let reads = if event.kind.refreshes_totals() {
                self.fetch_totals(event.address, event.meta.block_number).await
            } else {
                MarketTotals::default()
            };
            entries.push(ReplayEntry { event, reads });
        }

        debug!(from, to, entries = entries.len(), "fetched block range");
        Ok(entries)
    }
}
