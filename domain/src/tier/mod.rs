//! Tiers and the tier gate.
//!
//! A [`Tier`] is an entitlement label. The [`TierGate`] decides, as a pure
//! lookup, whether a platform may be selected under a tier: free platforms are
//! always permitted, premium platforms only under a non-free tier.

use crate::platform::catalog::PlatformCatalog;
use crate::platform::entities::Platform;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Entitlement label (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Tier {
    /// Free tier, assumed when no tier is known
    #[default]
    Explorer,
    Pioneer,
    Visionary,
    /// Any other label; treated as non-free
    Custom(String),
}

impl Tier {
    pub fn as_str(&self) -> &str {
        match self {
            Tier::Explorer => "explorer",
            Tier::Pioneer => "pioneer",
            Tier::Visionary => "visionary",
            Tier::Custom(s) => s,
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, Tier::Explorer)
    }

    /// Interpret a possibly absent stored value. Absent or blank means explorer.
    pub fn from_stored(value: Option<&str>) -> Self {
        value.map(Tier::from_label).unwrap_or_default()
    }

    fn from_label(label: &str) -> Self {
        let label = label.trim().to_lowercase();
        match label.as_str() {
            "" | "explorer" => Tier::Explorer,
            "pioneer" => Tier::Pioneer,
            "visionary" => Tier::Visionary,
            _ => Tier::Custom(label),
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tier {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Tier::from_label(s))
    }
}

impl Serialize for Tier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Tier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Tier::from_label(&s))
    }
}

/// Outcome of a gate check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Permit,
    Deny,
}

impl GateDecision {
    pub fn is_permitted(self) -> bool {
        matches!(self, GateDecision::Permit)
    }
}

/// Pure tier gate. No I/O.
pub struct TierGate;

impl TierGate {
    /// Decide whether a platform with the given gated flag is selectable.
    pub fn check(tier: &Tier, gated: bool) -> GateDecision {
        if gated && tier.is_free() {
            GateDecision::Deny
        } else {
            GateDecision::Permit
        }
    }

    pub fn permits(tier: &Tier, platform: &Platform) -> bool {
        Self::check(tier, platform.is_gated()).is_permitted()
    }

    /// Every platform of the catalog the tier may select, in catalog order.
    pub fn permitted<'a>(tier: &Tier, catalog: &'a PlatformCatalog) -> Vec<&'a Platform> {
        catalog.iter().filter(|p| Self::permits(tier, p)).collect()
    }
}
