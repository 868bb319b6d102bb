//! Weighted selection — one uniform draw over the pool's slots.

use rarelink_random::RandomSource;

use crate::{EntryPool, SelectionError, WeightedEntry};

/// Draw one slot uniformly from `[0, pool.total_weight())`.
///
/// Each slot is equally likely, so a user holding `w` slots wins with
/// probability `w / total_weight`. The draw is authoritative: no retries.
pub fn draw_slot<R: RandomSource + ?Sized>(
    pool: &EntryPool,
    rng: &mut R,
) -> Result<u64, SelectionError> {
    let total = pool.total_weight();
    if total == 0 {
        return Err(SelectionError::EmptyPool);
    }
    let slot = rng.next_below(total)?;
    tracing::debug!(slot, total, source = rng.name(), "drew raffle slot");
    Ok(slot)
}

/// Draw a slot and return the entry that owns it.
pub fn select_winner<R: RandomSource + ?Sized>(
    pool: &EntryPool,
    rng: &mut R,
) -> Result<WeightedEntry, SelectionError> {
    let slot = draw_slot(pool, rng)?;
    pool.lookup(slot).cloned()
}
