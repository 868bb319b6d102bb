//! Result reporting.

use rarelink_types::{SelectionWindow, SubmissionId, UserId};
use serde::{Deserialize, Serialize};

use crate::stats::win_probability;
use crate::{EntryPool, WeightedEntry};

/// Outcome of a raffle draw, ready for the caller to serialize.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerResult {
    pub winning_user_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winning_submission_id: Option<SubmissionId>,
    /// Weight of the winning submission alone.
    pub winning_entries: u64,
    /// The winner's weight summed over all of their submissions in the window.
    pub winning_user_total_entries: u64,
    /// Drawn slot in `[0, total_entries)`; replaying it against the same
    /// submissions yields the same winner.
    pub winning_slot: u64,
    pub total_entries: u64,
    pub total_submissions: usize,
    pub unique_participants: usize,
    pub window: SelectionWindow,
}

impl WinnerResult {
    /// The winner's chance of winning before the draw.
    pub fn winner_probability(&self) -> f64 {
        win_probability(self.winning_user_total_entries, self.total_entries)
    }
}

/// Assemble the result for `winner`, drawn at `slot` from `pool`.
pub fn build_result(
    window: &SelectionWindow,
    pool: &EntryPool,
    winner: &WeightedEntry,
    slot: u64,
) -> WinnerResult {
    let winning_user_total_entries: u64 = pool
        .entries()
        .iter()
        .filter(|e| e.user_id == winner.user_id)
        .map(|e| e.weight)
        .sum();

    WinnerResult {
        winning_user_id: winner.user_id.clone(),
        winning_submission_id: winner.submission_id.clone(),
        winning_entries: winner.weight,
        winning_user_total_entries,
        winning_slot: slot,
        total_entries: pool.total_weight(),
        total_submissions: pool.len(),
        unique_participants: pool.unique_participants(),
        window: *window,
    }
}
