//! CLI argument definitions using clap.

use std::path::PathBuf;

use alloy_primitives::{Address, U256};
use clap::{Parser, Subcommand, ValueEnum};

/// Lendpool CLI - Index lending pool events and evaluate borrow rates
#[derive(Parser, Debug)]
#[command(name = "lendpool")]
#[command(about = "CLI tool for indexing lending pool events", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "table")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Index pool and rate model events from a node
    Sync(SyncArgs),
    /// Apply a recorded replay file
    Replay(ReplayArgs),
    /// Evaluate the borrow rate curve for given totals
    Rate(RateArgs),
}

#[derive(Parser, Debug)]
pub struct SyncArgs {
    /// Lending pool addresses, comma separated (can also use LENDPOOL_POOLS env var)
    #[arg(long = "pool", env = "LENDPOOL_POOLS", value_delimiter = ',', required = true)]
    pub pools: Vec<Address>,

    /// Interest rate model addresses, comma separated (can also use LENDPOOL_IRMS env var)
    #[arg(long = "irm", env = "LENDPOOL_IRMS", value_delimiter = ',')]
    pub irms: Vec<Address>,

    /// First block to index
    #[arg(long)]
    pub from_block: u64,

    /// Last block to index (default: latest)
    #[arg(long)]
    pub to_block: Option<u64>,

    /// Number of blocks per eth_getLogs request
    #[arg(long, default_value = "2000")]
    pub batch_size: u64,

    /// Write the fetched events and reads to a replay file
    #[arg(long)]
    pub record: Option<PathBuf>,

    /// Print the audit log instead of the derived records
    #[arg(long)]
    pub audit: bool,

    /// RPC URL for the target chain (can also use ETH_RPC_URL env var)
    #[arg(long, env = "ETH_RPC_URL")]
    pub rpc_url: String,
}

#[derive(Parser, Debug)]
pub struct ReplayArgs {
    /// Path to a replay file
    pub file: PathBuf,

    /// Print the audit log instead of the derived records
    #[arg(long)]
    pub audit: bool,
}

#[derive(Parser, Debug)]
pub struct RateArgs {
    /// Total borrowed assets
    #[arg(long)]
    pub borrow: U256,

    /// Total supplied assets
    #[arg(long)]
    pub supply: U256,

    /// Borrow rate at zero utilization, WAD-scaled
    #[arg(long, default_value = "0")]
    pub base_rate: U256,

    /// Utilization at the kink, WAD-scaled (e.g. 800000000000000000 for 80%)
    #[arg(long)]
    pub optimal_utilization: U256,

    /// Borrow rate at the kink, WAD-scaled
    #[arg(long)]
    pub rate_at_optimal: U256,

    /// Utilization scale of the rate model, WAD-scaled
    #[arg(long, default_value = "1000000000000000000")]
    pub scale: U256,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
