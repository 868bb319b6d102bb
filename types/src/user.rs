//! Participant identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a raffle participant, typically a wallet address.
///
/// Not unique per submission: one user may submit many times in a window.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened form for log lines and leaderboards, e.g. `0x12ab34...cd56ef`.
    pub fn abbreviated(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 16 {
            return self.0.clone();
        }
        let head: String = chars[..8].iter().collect();
        let tail: String = chars[chars.len() - 6..].iter().collect();
        format!("{head}...{tail}")
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_ids_are_not_abbreviated() {
        assert_eq!(UserId::new("alice").abbreviated(), "alice");
    }

    #[test]
    fn long_ids_keep_head_and_tail() {
        let id = UserId::new("0x1234567890abcdef1234567890abcdef12345678");
        assert_eq!(id.abbreviated(), "0x123456...345678");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = UserId::new("0xabc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"0xabc\"");
    }
}
