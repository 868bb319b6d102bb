//! Submission loading — stands in for the platform's data-access layer.
//!
//! Expects a JSON array of submissions:
//! `[{"submission_id": "1842", "user_id": "0x…", "timestamp": "2025-08-01T10:00:00Z", "player_props": [{"player": "…"}]}]`

use rarelink_types::Submission;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to open submissions file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed submissions file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read every submission in the file at `path`.
pub fn load_submissions(path: &Path) -> Result<Vec<Submission>, SourceError> {
    let file = File::open(path).map_err(|source| SourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let submissions: Vec<Submission> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| SourceError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), count = submissions.len(), "loaded submissions");
    Ok(submissions)
}
