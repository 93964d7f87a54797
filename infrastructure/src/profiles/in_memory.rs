//! In-memory profile store keyed by bearer token.

use async_trait::async_trait;
use janus_application::ports::profile_repository::ProfileRepository;
use janus_domain::Profile;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Profiles held in memory, seeded from `[[profiles]]` at startup
#[derive(Default)]
pub struct InMemoryProfileRepository {
    profiles: RwLock<HashMap<String, Profile>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_profiles(entries: impl IntoIterator<Item = (String, Profile)>) -> Self {
        Self {
            profiles: RwLock::new(entries.into_iter().collect()),
        }
    }

    /// Insert or replace the profile behind `token`.
    pub async fn insert(&self, token: impl Into<String>, profile: Profile) {
        self.profiles.write().await.insert(token.into(), profile);
    }

    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_token(&self, token: &str) -> Option<Profile> {
        let profile = self.profiles.read().await.get(token).cloned();
        if profile.is_none() {
            debug!("No profile for presented token");
        }
        profile
    }
}
