//! Platform entities

use serde::{Deserialize, Serialize};

/// Identifier of a platform in the catalog (Value Object)
///
/// Identifiers are lowercase slugs such as `chatgpt` or `deepseek`. Parsing
/// normalizes case and surrounding whitespace so `" Claude "` and `claude`
/// refer to the same platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PlatformId(String);

impl PlatformId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlatformId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlatformId {
    fn from(s: &str) -> Self {
        PlatformId::new(s)
    }
}

impl From<String> for PlatformId {
    fn from(s: String) -> Self {
        PlatformId::new(s)
    }
}

impl From<PlatformId> for String {
    fn from(id: PlatformId) -> Self {
        id.0
    }
}

/// Access class of a platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessClass {
    /// Selectable on every tier
    #[default]
    Free,
    /// Requires a non-free tier
    Premium,
}

impl AccessClass {
    pub fn is_gated(self) -> bool {
        matches!(self, AccessClass::Premium)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AccessClass::Free => "free",
            AccessClass::Premium => "premium",
        }
    }
}

impl std::fmt::Display for AccessClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A third-party AI chat service that can take part in a debate (Entity)
///
/// Templates use `{topic}` and `{name}` placeholders and drive the simulated
/// replies produced when the backend cannot be reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub id: PlatformId,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub access: AccessClass,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_template: Option<String>,
}

impl Platform {
    pub fn new(id: impl Into<PlatformId>, name: impl Into<String>, access: AccessClass) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: String::new(),
            access,
            opening_template: None,
            follow_up_template: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    pub fn with_templates(
        mut self,
        opening: impl Into<String>,
        follow_up: impl Into<String>,
    ) -> Self {
        self.opening_template = Some(opening.into());
        self.follow_up_template = Some(follow_up.into());
        self
    }

    /// Returns `true` if selecting this platform requires a non-free tier.
    pub fn is_gated(&self) -> bool {
        self.access.is_gated()
    }
}
