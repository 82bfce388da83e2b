//! Replay command implementation.

use anyhow::{Context, Result};
use lendpool_rs_engine::{parse_replay, Indexer, MemoryStore};

use crate::cli::{OutputFormat, ReplayArgs};
use crate::commands::print_store;

pub fn run_replay(args: &ReplayArgs, format: OutputFormat) -> Result<()> {
    let json = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read replay file {}", args.file.display()))?;
    let entries = parse_replay(&json)?;

    let mut indexer = Indexer::new(MemoryStore::new());
    indexer.replay(&entries)?;

    print_store(indexer.store(), format, args.audit)
}
