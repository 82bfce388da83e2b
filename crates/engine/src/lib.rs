//! Lending Pool State Engine
//!
//! This crate materializes derived state for a lending protocol from its
//! ordered event stream: per market, the cached utilization and borrow rate;
//! per (market, user), the liquidity deposited and withdrawn.
//!
//! # Overview
//!
//! - [`math`]: WAD fixed-point helpers over `U256`
//! - [`store`]: the [`Store`] trait and get-or-create accessors
//! - [`irm`]: the kinked utilization rate curve
//! - [`handlers`]: one handler per event kind
//! - [`indexer`]: ordered delivery with a cursor
//!
//! Everything is synchronous. Pool totals are supplied by a [`MarketReader`],
//! typically a [`PrefetchedTotals`] filled in by an async RPC layer before the
//! event is handed over.
//!
//! # Example
//!
//! ```rust
//! use lendpool_rs_engine::{
//!     EventKind, EventMeta, Indexer, LendingEvent, MarketTotals, MemoryStore,
//!     PrefetchedTotals, Store, WAD,
//! };
//! use alloy_primitives::{address, B256, U256};
//!
//! let pool = address!("1111111111111111111111111111111111111111");
//! let irm = address!("2222222222222222222222222222222222222222");
//! let meta = |log_index| EventMeta {
//!     block_number: 1,
//!     block_timestamp: 1_700_000_000,
//!     transaction_hash: B256::ZERO,
//!     log_index,
//! };
//!
//! let mut indexer = Indexer::new(MemoryStore::new());
//! let no_reads = PrefetchedTotals::unavailable(pool);
//!
//! indexer.apply(&LendingEvent {
//!     address: irm,
//!     meta: meta(0),
//!     kind: EventKind::LendingPoolOptimalUtilizationSet {
//!         lending_pool: pool,
//!         utilization: U256::from(8) * WAD / U256::from(10), // 80%
//!     },
//! }, &no_reads)?;
//!
//! indexer.apply(&LendingEvent {
//!     address: irm,
//!     meta: meta(1),
//!     kind: EventKind::LendingPoolRateAtOptimalSet {
//!         lending_pool: pool,
//!         rate: U256::from(8) * WAD / U256::from(100), // 8%
//!     },
//! }, &no_reads)?;
//!
//! let totals = PrefetchedTotals::new(pool, MarketTotals {
//!     total_borrow_assets: Some(U256::from(50)),
//!     total_supply_assets: Some(U256::from(100)),
//! });
//! indexer.apply(&LendingEvent {
//!     address: pool,
//!     meta: meta(2),
//!     kind: EventKind::Borrow {
//!         user: address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"),
//!         token: address!("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb"),
//!         amount: U256::from(50),
//!     },
//! }, &totals)?;
//!
//! let market = indexer.store().market(pool).unwrap();
//! assert_eq!(market.borrow_rate, U256::from(5) * WAD / U256::from(100)); // 5%
//! # Ok::<(), lendpool_rs_engine::IndexerError>(())
//! ```

pub mod error;
pub mod events;
pub mod handlers;
pub mod indexer;
pub mod irm;
pub mod math;
pub mod reader;
pub mod records;
pub mod replay;
pub mod store;

// Re-export commonly used types
pub use error::{IndexerError, ReadError, Result, TotalsField};

// Event exports
pub use events::{AuditRecord, EventKind, EventMeta, LendingEvent};

// Record exports
pub use records::{position_id, Market, PositionId, RateModelConfig, UserPosition};

// Store exports
pub use store::{
    get_or_create_market, get_or_create_position, get_or_create_rate_model, MemoryStore,
    Snapshot, Store,
};

// IRM exports
pub use irm::{
    borrow_rate_at, get_borrow_rate, get_utilization, update_borrow_rate, BorrowRateResult,
    RateCurve, ScaleFactor,
};

// Math exports
pub use math::{WAD, ZERO};

pub use handlers::handle_event;
pub use indexer::Indexer;
pub use reader::{MarketReader, MarketTotals, PrefetchedTotals};
pub use replay::{parse_replay, ReplayEntry};
