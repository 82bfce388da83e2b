//! Sync command implementation.

use alloy_primitives::Address;
use anyhow::{bail, Context, Result};
use lendpool_rs_contracts::LendingPoolReader;
use lendpool_rs_engine::{Indexer, MemoryStore};
use tracing::info;

use crate::cli::{OutputFormat, SyncArgs};
use crate::commands::print_store;

/// Split the inclusive range `from..=to` into windows of at most `size` blocks.
fn block_batches(from: u64, to: u64, size: u64) -> Vec<(u64, u64)> {
    let mut batches = Vec::new();
    let mut start = from;
    while start <= to {
        let end = start.saturating_add(size - 1).min(to);
        batches.push((start, end));
        if end == u64::MAX {
            break;
        }
        start = end + 1;
    }
    batches
}

/// Pools first, then rate models, without duplicates.
fn watched_addresses(pools: &[Address], irms: &[Address]) -> Vec<Address> {
    let mut addresses: Vec<Address> = Vec::with_capacity(pools.len() + irms.len());
    for address in pools.iter().chain(irms) {
        if !addresses.contains(address) {
            addresses.push(*address);
        }
    }
    addresses
}

pub async fn run_sync(args: &SyncArgs, format: OutputFormat) -> Result<()> {
    if args.batch_size == 0 {
        bail!("--batch-size must be at least 1");
    }

    let reader = LendingPoolReader::new(&args.rpc_url)?;
    let to_block = match args.to_block {
        Some(block) => block,
        None => reader.latest_block().await?,
    };
    if args.from_block > to_block {
        bail!(
            "--from-block {} is after --to-block {}",
            args.from_block,
            to_block
        );
    }

    let addresses = watched_addresses(&args.pools, &args.irms);
    let mut indexer = Indexer::new(MemoryStore::new());
    let mut recorded = Vec::new();

    for (from, to) in block_batches(args.from_block, to_block, args.batch_size) {
        let entries = reader.fetch_entries(&addresses, from, to).await?;
        indexer.replay(&entries)?;
        info!(from, to, events = entries.len(), "indexed batch");

        if args.record.is_some() {
            recorded.extend(entries);
        }
    }

    if let Some(path) = &args.record {
        let json = serde_json::to_string_pretty(&recorded)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write replay file {}", path.display()))?;
    }

    print_store(indexer.store(), format, args.audit)
}
