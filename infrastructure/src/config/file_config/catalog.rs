//! Platform catalog configuration from TOML (`[catalog]` section)

use super::{ConfigIssue, ConfigValidationError};
use janus_domain::{Platform, PlatformCatalog, SUGGESTED_TOPICS};
use serde::{Deserialize, Serialize};

/// Raw catalog configuration from TOML
///
/// ```toml
/// [[catalog.platforms]]
/// id = "chatgpt"
/// name = "ChatGPT"
/// avatar = "🤖"
/// access = "free"
/// ```
///
/// An empty platform list keeps the built-in catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    pub platforms: Vec<Platform>,
    pub suggested_topics: Vec<String>,
}

impl FileCatalogConfig {
    pub fn to_catalog(&self) -> (PlatformCatalog, Vec<ConfigIssue>) {
        if self.platforms.is_empty() {
            return (PlatformCatalog::builtin(), vec![]);
        }

        let mut issues = Vec::new();
        for platform in &self.platforms {
            if platform.name.trim().is_empty() {
                issues.push(ConfigIssue::warning(ConfigValidationError::EmptyPlatformName(
                    platform.id.to_string(),
                )));
            }
        }

        match PlatformCatalog::from_platforms(self.platforms.clone()) {
            Ok(catalog) => {
                if catalog.free().next().is_none() {
                    issues.push(ConfigIssue::warning(ConfigValidationError::NoFreePlatform));
                }
                (catalog, issues)
            }
            Err(e) => {
                issues.push(ConfigIssue::error(ConfigValidationError::Catalog(e)));
                (PlatformCatalog::builtin(), issues)
            }
        }
    }

    pub fn suggested_topics(&self) -> Vec<String> {
        if self.suggested_topics.is_empty() {
            SUGGESTED_TOPICS.iter().map(|t| t.to_string()).collect()
        } else {
            self.suggested_topics.clone()
        }
    }
}
