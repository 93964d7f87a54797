//! Backend configuration from TOML (`[backend]` section)

use super::{ConfigIssue, ConfigValidationError};
use crate::gateway::{BackendSettings, DEFAULT_BACKEND_URL, DIALECTIC_PATH, HEALTH_PATH};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw backend configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Base URL of the dialectic backend
    pub url: Option<String>,
    pub dialectic_path: String,
    pub health_path: String,
    /// Probe the backend before every submission
    pub probe: bool,
    /// Answer with simulated responses when the backend is unreachable
    pub degraded_mode: bool,
    /// Request timeout in seconds (unset: no timeout)
    pub timeout_secs: Option<u64>,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            url: None,
            dialectic_path: DIALECTIC_PATH.to_string(),
            health_path: HEALTH_PATH.to_string(),
            probe: false,
            degraded_mode: true,
            timeout_secs: None,
        }
    }
}

impl FileBackendConfig {
    /// The configured base URL, or the built-in one when unset or blank.
    pub fn base_url(&self) -> &str {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL)
    }

    pub fn to_settings(&self) -> BackendSettings {
        BackendSettings::new(self.base_url())
            .with_paths(&self.dialectic_path, &self.health_path)
            .with_timeout(self.timeout_secs.filter(|s| *s > 0).map(Duration::from_secs))
    }

    pub(super) fn issues(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if reqwest::Url::parse(self.base_url()).is_err() {
            issues.push(ConfigIssue::error(ConfigValidationError::InvalidUrl(
                self.base_url().to_string(),
            )));
        }
        if self.timeout_secs == Some(0) {
            issues.push(ConfigIssue::warning(ConfigValidationError::InvalidTimeout));
        }
        for (field, value) in [
            ("backend.dialectic_path", &self.dialectic_path),
            ("backend.health_path", &self.health_path),
        ] {
            if !value.starts_with('/') {
                issues.push(ConfigIssue::error(ConfigValidationError::InvalidPath {
                    field,
                    value: value.clone(),
                }));
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_builtin_url() {
        let config = FileBackendConfig::default();
        assert_eq!(config.base_url(), DEFAULT_BACKEND_URL);
        assert!(config.degraded_mode);
        assert!(config.issues().is_empty());

        let blank = FileBackendConfig {
            url: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(blank.base_url(), DEFAULT_BACKEND_URL);
    }

    #[test]
    fn test_to_settings() {
        let config = FileBackendConfig {
            url: Some("http://localhost:8000/".to_string()),
            timeout_secs: Some(30),
            ..Default::default()
        };
        let settings = config.to_settings();
        assert_eq!(settings.dialectic_url(), "http://localhost:8000/v1/dialectic");
        assert_eq!(settings.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_invalid_values_reported() {
        let config = FileBackendConfig {
            url: Some("not a url".to_string()),
            health_path: "health".to_string(),
            timeout_secs: Some(0),
            ..Default::default()
        };
        let issues = config.issues();
        assert_eq!(issues.len(), 3);
        assert!(config.to_settings().timeout.is_none());
    }
}
