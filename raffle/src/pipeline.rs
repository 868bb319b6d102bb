//! End-to-end raffle: aggregate → build pool → draw → report.

use rarelink_random::RandomSource;
use rarelink_types::{SelectionWindow, Submission};

use crate::stats::{top_participants, ParticipantTotal};
use crate::{
    aggregate, build_pool, build_result, draw_slot, SelectionError, WeightedEntry, WinnerResult,
};

/// A completed draw plus the entries it was drawn from.
#[derive(Clone, Debug)]
pub struct RaffleOutcome {
    pub result: WinnerResult,
    pub entries: Vec<WeightedEntry>,
}

impl RaffleOutcome {
    /// The `n` participants with the most entries in this draw.
    pub fn leaderboard(&self, n: usize) -> Vec<ParticipantTotal> {
        top_participants(&self.entries, n)
    }
}

/// Run one raffle over `submissions` restricted to `window`.
///
/// Fails with [`SelectionError::InvalidWindow`] before touching any
/// submission, and with [`SelectionError::EmptyPool`] when nothing in the
/// window carries weight. No partial result is produced on error.
pub fn run_raffle<R: RandomSource + ?Sized>(
    submissions: &[Submission],
    window: &SelectionWindow,
    rng: &mut R,
) -> Result<RaffleOutcome, SelectionError> {
    let entries = aggregate(submissions, window)?;
    let pool = build_pool(entries)?;
    let slot = draw_slot(&pool, rng)?;
    let winner = pool.lookup(slot)?;
    let result = build_result(window, &pool, winner, slot);

    tracing::info!(
        winner = %result.winning_user_id,
        submission_id = ?result.winning_submission_id,
        winning_entries = result.winning_entries,
        slot = result.winning_slot,
        total_entries = result.total_entries,
        total_submissions = result.total_submissions,
        unique_participants = result.unique_participants,
        source = rng.name(),
        "raffle winner selected"
    );

    Ok(RaffleOutcome {
        result,
        entries: pool.into_entries(),
    })
}
