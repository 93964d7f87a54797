//! User profile resolved on the trusted side of the boundary.

use crate::platform::catalog::PlatformCatalog;
use crate::platform::entities::{Platform, PlatformId};
use crate::tier::{Tier, TierGate};
use serde::{Deserialize, Serialize};

/// Identity plus entitlements (Entity)
///
/// `permitted` is derived from the tier when the profile is built and is the
/// list a dashboard would show; authorization decisions go through
/// [`Profile::may_use`], which consults the tier gate directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub tier: Tier,
    pub permitted: Vec<PlatformId>,
}

impl Profile {
    pub fn new(id: impl Into<String>, tier: Tier, catalog: &PlatformCatalog) -> Self {
        let permitted = TierGate::permitted(&tier, catalog)
            .into_iter()
            .map(|p| p.id.clone())
            .collect();
        Self {
            id: id.into(),
            email: None,
            tier,
            permitted,
        }
    }

    /// Anonymous profile used when no identity is known.
    pub fn anonymous(catalog: &PlatformCatalog) -> Self {
        Self::new("anonymous", Tier::default(), catalog)
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn may_use(&self, platform: &Platform) -> bool {
        TierGate::permits(&self.tier, platform)
    }
}
