//! Raffle submissions as supplied by the data-access layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::UserId;

/// Identifier of a single submission (the bet id on the betting platform).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(String);

impl SubmissionId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One player prop inside a submission. Opaque to raffle weighting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerProp {
    pub player: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<f64>,
}

impl PlayerProp {
    pub fn new(player: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            market: None,
            line: None,
        }
    }
}

/// A recorded submission. Read-only input to the raffle.
///
/// Timestamps are always UTC; RFC 3339 input with any offset is normalized
/// on deserialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<SubmissionId>,
    pub user_id: UserId,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub player_props: Vec<PlayerProp>,
}

impl Submission {
    pub fn new(
        user_id: impl Into<UserId>,
        timestamp: DateTime<Utc>,
        player_props: Vec<PlayerProp>,
    ) -> Self {
        Self {
            submission_id: None,
            user_id: user_id.into(),
            timestamp,
            player_props,
        }
    }

    /// Attach the platform's identifier for this submission.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.submission_id = Some(SubmissionId::new(id));
        self
    }

    /// Number of player props, i.e. the raffle entries this submission earns.
    pub fn prop_count(&self) -> usize {
        self.player_props.len()
    }
}
