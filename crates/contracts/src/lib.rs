//! Contract bindings and RPC reads for lending pools.
//!
//! This crate provides Solidity bindings for the lending pool and interest
//! rate model contracts, decodes their logs into engine events, and reads pool
//! totals over JSON-RPC.
//!
//! # Example
//!
//! ```no_run
//! use lendpool_rs_contracts::LendingPoolReader;
//! use lendpool_rs_engine::{Indexer, MemoryStore};
//! use alloy::primitives::Address;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let reader = LendingPoolReader::new("https://eth.llamarpc.com")?;
//!
//!     let pool: Address = "0x...".parse()?;
//!     let entries = reader.fetch_entries(&[pool], 19_000_000, 19_001_000).await?;
//!
//!     let mut indexer = Indexer::new(MemoryStore::new());
//!     indexer.replay(&entries)?;
//!
//!     Ok(())
//! }
//! ```

pub mod decode;
pub mod error;
pub mod interest_rate_model;
pub mod lending_pool;
pub mod provider;
pub mod reader;

pub use decode::decode_log;
pub use error::{ContractError, Result};
pub use provider::HttpProvider;
pub use reader::LendingPoolReader;
