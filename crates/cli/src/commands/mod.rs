//! Command implementations.

pub mod rate;
pub mod replay;
pub mod sync;

pub use rate::run_rate;
pub use replay::run_replay;
pub use sync::run_sync;

use anyhow::Result;
use lendpool_rs_engine::MemoryStore;

use crate::cli::OutputFormat;
use crate::output::{format_audit_table, format_snapshot};

/// Print the records held by `store`, or its audit log.
pub(crate) fn print_store(store: &MemoryStore, format: OutputFormat, audit: bool) -> Result<()> {
    match (format, audit) {
        (OutputFormat::Table, false) => {
            println!("{}", format_snapshot(&store.snapshot()));
        }
        (OutputFormat::Table, true) => {
            println!("{}", format_audit_table(store.audit_log()));
        }
        (OutputFormat::Json, false) => {
            let json = serde_json::to_string_pretty(&store.snapshot())?;
            println!("{}", json);
        }
        (OutputFormat::Json, true) => {
            let json = serde_json::to_string_pretty(store.audit_log())?;
            println!("{}", json);
        }
    }

    Ok(())
}
