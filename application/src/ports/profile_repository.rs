//! Profile repository port
//!
//! The trusted source of identity and tier. Client-supplied tier values are
//! never consulted for authorization.

use async_trait::async_trait;
use janus_domain::Profile;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Resolve the profile behind a bearer token, if any.
    async fn find_by_token(&self, token: &str) -> Option<Profile>;
}

/// Repository that knows no one; every caller is treated as anonymous.
pub struct NoProfiles;

#[async_trait]
impl ProfileRepository for NoProfiles {
    async fn find_by_token(&self, _token: &str) -> Option<Profile> {
        None
    }
}
