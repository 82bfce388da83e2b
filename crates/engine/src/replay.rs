//! Replay documents: recorded events with their prefetched totals.
//!
//! A replay document is a JSON array. Each entry is a [`LendingEvent`] plus an
//! optional `reads` object holding the pool totals observed when the event was
//! recorded:
//!
//! ```json
//! [
//!   {
//!     "address": "0x1111111111111111111111111111111111111111",
//!     "meta": { "blockNumber": 10, "blockTimestamp": 1700000000,
//!               "transactionHash": "0x…", "logIndex": 0 },
//!     "event": { "name": "Borrow", "user": "0x…", "token": "0x…", "amount": "50" },
//!     "reads": { "totalBorrowAssets": "50", "totalSupplyAssets": "100" }
//!   }
//! ]
//! ```
//!
//! A missing field in `reads` behaves like a failed read.

use serde::{Deserialize, Serialize};

use crate::error::{IndexerError, Result};
use crate::events::LendingEvent;
use crate::reader::MarketTotals;

/// One recorded event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayEntry {
    #[serde(flatten)]
    pub event: LendingEvent,
    #[serde(default)]
    pub reads: MarketTotals,
}

/// Parses a replay document.
pub fn parse_replay(json: &str) -> Result<Vec<ReplayEntry>> {
    serde_json::from_str(json).map_err(|e| IndexerError::Replay(e.to_string()))
}
