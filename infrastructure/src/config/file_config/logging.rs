//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file receiving one record per debate event
    pub debate_log: Option<String>,
}

impl FileLoggingConfig {
    /// Debate log path with a leading `~/` expanded to the home directory.
    pub fn debate_log_path(&self) -> Option<PathBuf> {
        let raw = self.debate_log.as_deref().map(str::trim)?;
        if raw.is_empty() {
            return None;
        }
        match raw.strip_prefix("~/") {
            Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
            None => Some(PathBuf::from(raw)),
        }
    }
}
