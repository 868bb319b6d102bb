//! Participant statistics — leaderboards and winner history.

use std::collections::HashMap;

use rarelink_types::{Submission, UserId};
use serde::{Deserialize, Serialize};

use crate::WeightedEntry;

/// A user's combined standing in the pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantTotal {
    pub user_id: UserId,
    pub entries: u64,
    pub submissions: usize,
}

/// Per-user totals, most entries first. Ties keep first-appearance order.
pub fn participant_totals(entries: &[WeightedEntry]) -> Vec<ParticipantTotal> {
    let mut positions: HashMap<&UserId, usize> = HashMap::new();
    let mut totals: Vec<ParticipantTotal> = Vec::new();

    for entry in entries {
        match positions.get(&entry.user_id) {
            Some(&i) => {
                totals[i].entries = totals[i].entries.saturating_add(entry.weight);
                totals[i].submissions += 1;
            }
            None => {
                positions.insert(&entry.user_id, totals.len());
                totals.push(ParticipantTotal {
                    user_id: entry.user_id.clone(),
                    entries: entry.weight,
                    submissions: 1,
                });
            }
        }
    }

    totals.sort_by(|a, b| b.entries.cmp(&a.entries));
    totals
}

/// The `n` users with the most entries.
pub fn top_participants(entries: &[WeightedEntry], n: usize) -> Vec<ParticipantTotal> {
    let mut totals = participant_totals(entries);
    totals.truncate(n);
    totals
}

/// `user_entries / total_entries`, or 0 for an empty pool.
pub fn win_probability(user_entries: u64, total_entries: u64) -> f64 {
    if total_entries == 0 {
        return 0.0;
    }
    user_entries as f64 / total_entries as f64
}

/// A user's most recent submissions across all of `submissions`, newest first.
pub fn recent_submissions<'a>(
    submissions: &'a [Submission],
    user_id: &UserId,
    limit: usize,
) -> Vec<&'a Submission> {
    let mut mine: Vec<&Submission> = submissions
        .iter()
        .filter(|s| &s.user_id == user_id)
        .collect();
    mine.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    mine.truncate(limit);
    mine
}
