//! Ordered delivery of events into a store.

use tracing::info;

use crate::error::{IndexerError, Result};
use crate::events::LendingEvent;
use crate::handlers::handle_event;
use crate::reader::{MarketReader, PrefetchedTotals};
use crate::replay::ReplayEntry;
use crate::store::{MemoryStore, Store};

/// Applies events to an owned store in strictly increasing
/// `(block_number, log_index)` order.
#[derive(Debug, Default)]
pub struct Indexer<S = MemoryStore> {
    store: S,
    cursor: Option<(u64, u64)>,
    applied: u64,
}

impl<S: Store> Indexer<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            cursor: None,
            applied: 0,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Position of the last applied event
    pub fn cursor(&self) -> Option<(u64, u64)> {
        self.cursor
    }

    /// Number of events applied so far
    pub fn applied(&self) -> u64 {
        self.applied
    }

    /// Applies one event.
    ///
    /// # Errors
    ///
    /// [`IndexerError::OutOfOrder`] if the event does not come after the last
    /// applied one. The store is left untouched in that case.
    pub fn apply<R: MarketReader + ?Sized>(
        &mut self,
        event: &LendingEvent,
        reader: &R,
    ) -> Result<()> {
        let position = event.meta.position();
        if let Some(cursor) = self.cursor {
            if position <= cursor {
                return Err(IndexerError::OutOfOrder {
                    block_number: position.0,
                    log_index: position.1,
                    cursor_block: cursor.0,
                    cursor_log: cursor.1,
                });
            }
        }

        handle_event(&mut self.store, reader, event);
        self.cursor = Some(position);
        self.applied += 1;
        Ok(())
    }

    /// Applies every entry of a replay document in order.
    pub fn replay(&mut self, entries: &[ReplayEntry]) -> Result<()> {
        for entry in entries {
            let reader = PrefetchedTotals::new(entry.event.address, entry.reads);
            self.apply(&entry.event, &reader)?;
        }
        info!(
            entries = entries.len(),
            applied = self.applied,
            "replay finished"
        );
        Ok(())
    }
}
