//! Raffle configuration with TOML file support.

use rarelink_utils::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Configuration for the prize selector.
///
/// Loaded from a TOML file via [`RaffleConfig::from_toml_file`]; every field
/// has a default, so an empty file is valid. CLI flags override file values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RaffleConfig {
    /// JSON file holding the submissions to draw from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submissions_path: Option<PathBuf>,

    /// Participants listed in the verbose leaderboard.
    #[serde(default = "default_leaderboard_size")]
    pub leaderboard_size: usize,

    /// Most recent submissions shown for the winner.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Where to write the JSON report, if anywhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_leaderboard_size() -> usize {
    10
}

fn default_history_limit() -> usize {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl RaffleConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for RaffleConfig {
    fn default() -> Self {
        Self {
            submissions_path: None,
            leaderboard_size: default_leaderboard_size(),
            history_limit: default_history_limit(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            output: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = RaffleConfig {
            submissions_path: Some(PathBuf::from("subs.json")),
            ..Default::default()
        };
        let toml_str = config.to_toml_string().expect("should serialize");
        let parsed = RaffleConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = RaffleConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config, RaffleConfig::default());
        assert_eq!(config.leaderboard_size, 10);
        assert_eq!(config.log_format, LogFormat::Human);
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            submissions_path = "/data/rarelink.json"
            leaderboard_size = 25
            log_format = "json"
        "#;
        let config = RaffleConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.leaderboard_size, 25);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.history_limit, 10); // default
        assert_eq!(
            config.submissions_path.as_deref(),
            Some(Path::new("/data/rarelink.json"))
        );
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(matches!(
            RaffleConfig::from_toml_str("leaderboard_size = \"many\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "history_limit = 3").unwrap();
        let config = RaffleConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.history_limit, 3);
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = RaffleConfig::from_toml_file(Path::new("/nonexistent/raffle.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
