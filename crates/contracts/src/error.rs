//! Error types for the contracts crate.

use thiserror::Error;

/// Errors that can occur when talking to a node or decoding its logs.
#[derive(Debug, Error)]
pub enum ContractError {
    /// RPC connection failed.
    #[error("RPC connection failed: {0}")]
    RpcConnection(String),

    /// An RPC request returned an error.
    #[error("RPC request failed: {0}")]
    Rpc(String),

    /// A log matched a known topic but its payload did not decode.
    #[error("Failed to decode log: {0}")]
    Decode(String),

    /// The node returned a log without positional metadata.
    #[error("Log is missing {0}")]
    MissingLogField(&'static str),

    /// The node does not know the requested block.
    #[error("Block {0} not found")]
    BlockNotFound(u64),
}

/// Result type alias for contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;
