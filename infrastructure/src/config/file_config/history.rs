//! Triage history settings from TOML (`[history]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const HISTORY_FILE: &str = "history.jsonl";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHistoryConfig {
    /// Append completed triages to a JSONL file.
    pub enabled: bool,
    /// History file; defaults to the user data directory.
    pub path: Option<PathBuf>,
}

impl Default for FileHistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
        }
    }
}

impl FileHistoryConfig {
    /// `path` if set, else `$XDG_DATA_HOME/feedback-triage/history.jsonl`,
    /// else `./history.jsonl`.
    pub fn resolved_path(&self) -> PathBuf {
        if let Some(path) = &self.path {
            return path.clone();
        }
        dirs::data_dir()
            .map(|d| d.join("feedback-triage").join(HISTORY_FILE))
            .unwrap_or_else(|| PathBuf::from(HISTORY_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let config = FileHistoryConfig {
            enabled: true,
            path: Some(PathBuf::from("/tmp/triage.jsonl")),
        };
        assert_eq!(config.resolved_path(), PathBuf::from("/tmp/triage.jsonl"));
    }

    #[test]
    fn test_default_path_ends_with_history_file() {
        let path = FileHistoryConfig::default().resolved_path();
        assert!(path.ends_with(HISTORY_FILE));
    }
}
