//! Error types for the indexing engine.

use std::fmt;

use alloy_primitives::Address;
use thiserror::Error;

/// Which of the two pool totals a read refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalsField {
    BorrowAssets,
    SupplyAssets,
}

impl fmt::Display for TotalsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TotalsField::BorrowAssets => write!(f, "totalBorrowAssets"),
            TotalsField::SupplyAssets => write!(f, "totalSupplyAssets"),
        }
    }
}

/// A failed read from the external market reader.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReadError {
    /// The reader has no value for this market and field
    #[error("{field} unavailable for market {market}")]
    Unavailable { market: Address, field: TotalsField },
}

/// Errors raised while delivering events to the engine.
#[derive(Debug, Error)]
pub enum IndexerError {
    /// The event sits at or before the last applied position
    #[error(
        "Event at block {block_number} log {log_index} is not after cursor \
         (block {cursor_block}, log {cursor_log})"
    )]
    OutOfOrder {
        block_number: u64,
        log_index: u64,
        cursor_block: u64,
        cursor_log: u64,
    },

    /// A replay document could not be parsed
    #[error("Invalid replay document: {0}")]
    Replay(String),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, IndexerError>;
