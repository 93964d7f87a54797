//! Submission behavior: authentication variant and fallback policy.

use janus_domain::{PlatformCatalog, PlatformId};
use serde::{Deserialize, Serialize};

/// Authentication contract of the proxy handler.
///
/// The two variants are distinct deployments and are never combined: `Open`
/// forwards `{ query }` without credentials, `Authenticated` requires a bearer
/// token and forwards `{ query, models }` together with the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyVariant {
    #[default]
    Open,
    Authenticated,
}

impl ProxyVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            ProxyVariant::Open => "open",
            ProxyVariant::Authenticated => "authenticated",
        }
    }

    pub fn requires_credential(self) -> bool {
        matches!(self, ProxyVariant::Authenticated)
    }
}

impl std::fmt::Display for ProxyVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProxyVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" | "none" => Ok(ProxyVariant::Open),
            "authenticated" | "auth" | "bearer" => Ok(ProxyVariant::Authenticated),
            other => Err(format!(
                "unknown proxy variant '{}', expected 'open' or 'authenticated'",
                other
            )),
        }
    }
}

/// Configuration of [`SubmitDebateUseCase`](crate::SubmitDebateUseCase)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitConfig {
    pub variant: ProxyVariant,
    /// Probe the backend before forwarding and degrade immediately when down.
    pub probe_backend: bool,
    /// Synthesize placeholder replies instead of failing when unreachable.
    pub degraded_mode: bool,
    /// Platform list sent as `models` in the authenticated variant.
    pub default_models: Vec<PlatformId>,
}

impl SubmitConfig {
    pub fn for_catalog(catalog: &PlatformCatalog) -> Self {
        Self {
            variant: ProxyVariant::Open,
            probe_backend: false,
            degraded_mode: true,
            default_models: catalog.default_selection(),
        }
    }

    pub fn with_variant(mut self, variant: ProxyVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_probe(mut self, probe: bool) -> Self {
        self.probe_backend = probe;
        self
    }

    pub fn with_degraded_mode(mut self, enabled: bool) -> Self {
        self.degraded_mode = enabled;
        self
    }

    pub fn with_default_models(mut self, models: Vec<PlatformId>) -> Self {
        self.default_models = models;
        self
    }
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self::for_catalog(&PlatformCatalog::builtin())
    }
}
