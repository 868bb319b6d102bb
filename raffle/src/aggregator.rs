//! Entry aggregation — window filtering and per-submission weighting.

use chrono::{DateTime, Utc};
use rarelink_types::{SelectionWindow, Submission, SubmissionId, UserId};
use serde::{Deserialize, Serialize};

use crate::SelectionError;

/// One submission's claim on the entry pool.
///
/// A user with several qualifying submissions gets several entries; they are
/// never merged, so a winning slot traces back to one concrete submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEntry {
    pub user_id: UserId,
    /// Player-prop count of the submission, always >= 1 when produced by [`aggregate`].
    pub weight: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<SubmissionId>,
    pub timestamp: DateTime<Utc>,
}

impl WeightedEntry {
    pub fn new(user_id: impl Into<UserId>, weight: u64, timestamp: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            weight,
            submission_id: None,
            timestamp,
        }
    }
}

/// Convert the submissions inside `window` into weighted entries.
///
/// The window is checked before any submission is looked at. Submissions
/// with no player props carry no weight and are skipped; an empty result is
/// a valid outcome. Output order follows input order.
pub fn aggregate(
    submissions: &[Submission],
    window: &SelectionWindow,
) -> Result<Vec<WeightedEntry>, SelectionError> {
    window.validate()?;

    let mut entries = Vec::new();
    let mut outside_window = 0usize;
    let mut without_props = 0usize;

    for submission in submissions {
        if !window.contains(submission.timestamp) {
            outside_window += 1;
            continue;
        }
        let props = submission.prop_count();
        if props == 0 {
            without_props += 1;
            tracing::debug!(
                user = %submission.user_id,
                submission_id = ?submission.submission_id,
                "skipping submission with no player props"
            );
            continue;
        }
        entries.push(WeightedEntry {
            user_id: submission.user_id.clone(),
            weight: props as u64,
            submission_id: submission.submission_id.clone(),
            timestamp: submission.timestamp,
        });
    }

    tracing::debug!(
        %window,
        retained = entries.len(),
        outside_window,
        without_props,
        "aggregated submissions"
    );
    Ok(entries)
}
