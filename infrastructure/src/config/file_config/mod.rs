//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod backend;
mod catalog;
mod logging;
mod profiles;
mod proxy;

pub use backend::FileBackendConfig;
pub use catalog::FileCatalogConfig;
pub use logging::FileLoggingConfig;
pub use profiles::{FileProfileConfig, to_profiles};
pub use proxy::{DEFAULT_BIND, FileProxyConfig};

use janus_application::SubmitConfig;
use janus_domain::{DomainError, PlatformCatalog};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("proxy.variant: unknown value '{0}', expected 'open' or 'authenticated'")]
    UnknownVariant(String),

    #[error("proxy.bind: '{0}' is not a socket address")]
    InvalidBind(String),

    #[error("backend.url: '{0}' is not a valid URL")]
    InvalidUrl(String),

    #[error("backend.timeout_secs cannot be 0, leave it unset for no timeout")]
    InvalidTimeout,

    #[error("{field}: '{value}' must start with '/'")]
    InvalidPath { field: &'static str, value: String },

    #[error("catalog.platforms: {0}")]
    Catalog(#[from] DomainError),

    #[error("catalog.platforms: no free platform, requests must name their platforms")]
    NoFreePlatform,

    #[error("catalog.platforms: platform '{0}' has an empty name")]
    EmptyPlatformName(String),

    #[error("profiles[{0}]: token cannot be empty, entry ignored")]
    EmptyToken(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A detected issue in the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub error: ConfigValidationError,
}

impl ConfigIssue {
    pub fn warning(error: ConfigValidationError) -> Self {
        Self {
            severity: Severity::Warning,
            error,
        }
    }

    pub fn error(error: ConfigValidationError) -> Self {
        Self {
            severity: Severity::Error,
            error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Dialectic backend
    pub backend: FileBackendConfig,
    /// Proxy handler settings
    pub proxy: FileProxyConfig,
    /// Platform catalog and suggested topics
    pub catalog: FileCatalogConfig,
    /// Trusted profiles keyed by bearer token
    pub profiles: Vec<FileProfileConfig>,
    /// Structured debate log
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Every problem found here also has a fallback, so a configuration with
    /// issues still loads; errors mean the fallback likely differs from intent.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.backend.issues());
        issues.extend(self.proxy.parse_variant().1);
        issues.extend(self.proxy.parse_bind().1);
        let (catalog, catalog_issues) = self.catalog.to_catalog();
        issues.extend(catalog_issues);
        issues.extend(to_profiles(&self.profiles, &catalog).1);
        issues
    }

    /// The platform catalog, built-in when unset or invalid.
    pub fn platform_catalog(&self) -> PlatformCatalog {
        self.catalog.to_catalog().0
    }

    /// Submission behavior for the given catalog.
    pub fn submit_config(&self, catalog: &PlatformCatalog) -> SubmitConfig {
        SubmitConfig::for_catalog(catalog)
            .with_variant(self.proxy.parse_variant().0)
            .with_probe(self.backend.probe)
            .with_degraded_mode(self.backend.degraded_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use janus_application::ProxyVariant;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[backend]
url = "http://localhost:8000"
probe = true
degraded_mode = false
timeout_secs = 20

[proxy]
variant = "authenticated"
bind = "0.0.0.0:8080"

[[profiles]]
token = "abc"
tier = "pioneer"

[logging]
debate_log = "debates.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.backend.base_url(), "http://localhost:8000");
        assert!(config.backend.probe);
        assert!(!config.backend.degraded_mode);
        assert_eq!(config.proxy.parse_variant().0, ProxyVariant::Authenticated);
        assert_eq!(config.profiles.len(), 1);
        assert!(config.validate().is_empty());

        let submit = config.submit_config(&config.platform_catalog());
        assert_eq!(submit.variant, ProxyVariant::Authenticated);
        assert!(submit.probe_backend);
        assert!(!submit.degraded_mode);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[backend]
url = "http://localhost:8000"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        // Defaults should apply
        assert!(config.backend.degraded_mode);
        assert_eq!(config.proxy.bind, DEFAULT_BIND);
        assert!(config.profiles.is_empty());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let toml_str = r#"
[backend]
url = "::"

[proxy]
variant = "maybe"
bind = "nowhere"

[[profiles]]
tier = "visionary"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 4);
        assert_eq!(issues.iter().filter(|i| i.is_error()).count(), 3);
        assert!(issues.iter().any(|i| i.message().contains("proxy.variant")));
    }
}
