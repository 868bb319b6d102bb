//! Entry pool — the logical flattening of weighted entries into slots.
//!
//! Entry `i` owns the slot range `[boundaries[i-1], boundaries[i])`. The
//! repeated-address list is never materialized: memory stays O(entries) no
//! matter how large the weights are.

use std::collections::HashSet;
use std::ops::Range;

use crate::{SelectionError, WeightedEntry};

#[derive(Clone, Debug)]
pub struct EntryPool {
    entries: Vec<WeightedEntry>,
    /// Exclusive end of each entry's slot range (running weight total).
    boundaries: Vec<u64>,
}

impl EntryPool {
    /// Sum of all weights; slots are numbered `0..total_weight()`.
    pub fn total_weight(&self) -> u64 {
        self.boundaries.last().copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[WeightedEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<WeightedEntry> {
        self.entries
    }

    /// Slots owned by the entry at `position`, in pool order.
    pub fn slot_range(&self, position: usize) -> Option<Range<u64>> {
        let end = *self.boundaries.get(position)?;
        let start = match position {
            0 => 0,
            p => self.boundaries[p - 1],
        };
        Some(start..end)
    }

    /// Find the entry whose slot range contains `slot`. O(log n).
    pub fn lookup(&self, slot: u64) -> Result<&WeightedEntry, SelectionError> {
        let total = self.total_weight();
        if slot >= total {
            return Err(SelectionError::SlotOutOfRange { slot, total });
        }
        let position = self.boundaries.partition_point(|&end| end <= slot);
        Ok(&self.entries[position])
    }

    /// Number of distinct users holding at least one entry.
    pub fn unique_participants(&self) -> usize {
        self.entries
            .iter()
            .map(|e| &e.user_id)
            .collect::<HashSet<_>>()
            .len()
    }
}

/// Build the pool in the input order of `entries`.
///
/// Entries with zero weight hold no slots and are dropped, so every pooled
/// entry counts toward the reported submission and participant totals. The
/// same entry sequence always produces the same slot layout, so a recorded
/// slot index replays to the same winner.
pub fn build_pool(entries: Vec<WeightedEntry>) -> Result<EntryPool, SelectionError> {
    let before = entries.len();
    let entries: Vec<WeightedEntry> = entries.into_iter().filter(|e| e.weight > 0).collect();
    if entries.len() < before {
        tracing::debug!(dropped = before - entries.len(), "dropped zero-weight entries");
    }
    if entries.is_empty() {
        return Err(SelectionError::EmptyPool);
    }
    let mut boundaries = Vec::with_capacity(entries.len());
    let mut running: u64 = 0;
    for entry in &entries {
        running = running
            .checked_add(entry.weight)
            .ok_or(SelectionError::Overflow)?;
        boundaries.push(running);
    }
    tracing::debug!(
        entries = entries.len(),
        total_weight = running,
        "built entry pool"
    );
    Ok(EntryPool {
        entries,
        boundaries,
    })
}
