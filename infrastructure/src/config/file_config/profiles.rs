//! Trusted profiles from TOML (`[[profiles]]` entries)

use super::{ConfigIssue, ConfigValidationError};
use janus_domain::{PlatformCatalog, Profile, Tier};
use serde::{Deserialize, Serialize};

/// One profile keyed by its bearer token
///
/// ```toml
/// [[profiles]]
/// token = "secret"
/// id = "ada"
/// email = "ada@example.com"
/// tier = "visionary"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProfileConfig {
    pub token: String,
    pub id: Option<String>,
    pub email: Option<String>,
    /// Stored tier label; absent means explorer
    pub tier: Option<String>,
}

impl FileProfileConfig {
    pub fn to_profile(&self, catalog: &PlatformCatalog) -> Profile {
        let id = self.id.clone().unwrap_or_else(|| self.token.clone());
        let profile = Profile::new(id, Tier::from_stored(self.tier.as_deref()), catalog);
        match &self.email {
            Some(email) => profile.with_email(email),
            None => profile,
        }
    }
}

/// Convert the configured entries into `(token, profile)` pairs.
///
/// Entries with an empty token are skipped and reported.
pub fn to_profiles(
    entries: &[FileProfileConfig],
    catalog: &PlatformCatalog,
) -> (Vec<(String, Profile)>, Vec<ConfigIssue>) {
    let mut profiles = Vec::with_capacity(entries.len());
    let mut issues = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        let token = entry.token.trim();
        if token.is_empty() {
            issues.push(ConfigIssue::warning(ConfigValidationError::EmptyToken(index)));
            continue;
        }
        profiles.push((token.to_string(), entry.to_profile(catalog)));
    }
    (profiles, issues)
}
