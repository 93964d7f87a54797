//! Platform catalog - the closed set of platforms a debate can draw on.

use super::entities::{AccessClass, Platform, PlatformId};
use crate::core::error::DomainError;
use std::collections::HashSet;

/// Closed, ordered set of platforms (Aggregate)
///
/// The catalog is fixed for the lifetime of the process. It is built either
/// from [`PlatformCatalog::builtin`] or from configuration through
/// [`PlatformCatalog::from_platforms`], which enforces that ids are unique and
/// that at least one platform exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformCatalog {
    platforms: Vec<Platform>,
}

impl PlatformCatalog {
    pub fn from_platforms(platforms: Vec<Platform>) -> Result<Self, DomainError> {
        if platforms.is_empty() {
            return Err(DomainError::EmptyCatalog);
        }
        let mut seen = HashSet::new();
        for platform in &platforms {
            if !seen.insert(platform.id.clone()) {
                return Err(DomainError::DuplicatePlatform(platform.id.to_string()));
            }
        }
        Ok(Self { platforms })
    }

    /// The default catalog: three free platforms and two premium ones.
    pub fn builtin() -> Self {
        Self {
            platforms: builtin_platforms(),
        }
    }

    pub fn get(&self, id: &PlatformId) -> Option<&Platform> {
        self.platforms.iter().find(|p| &p.id == id)
    }

    /// Look up a platform by raw id, failing for ids outside the catalog.
    pub fn resolve(&self, id: &str) -> Result<&Platform, DomainError> {
        let id = PlatformId::new(id);
        self.get(&id)
            .ok_or_else(|| DomainError::UnknownPlatform(id.to_string()))
    }

    pub fn contains(&self, id: &PlatformId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter()
    }

    pub fn free(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter().filter(|p| !p.is_gated())
    }

    pub fn premium(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter().filter(|p| p.is_gated())
    }

    pub fn ids(&self) -> Vec<PlatformId> {
        self.platforms.iter().map(|p| p.id.clone()).collect()
    }

    /// Platforms selected before the user touches the selector: every free one.
    pub fn default_selection(&self) -> Vec<PlatformId> {
        self.free().map(|p| p.id.clone()).collect()
    }

    /// Display name for an id, falling back to the raw id.
    pub fn display_name<'a>(&'a self, id: &'a PlatformId) -> &'a str {
        self.get(id).map(|p| p.name.as_str()).unwrap_or(id.as_str())
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}

impl Default for PlatformCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_platforms() -> Vec<Platform> {
    vec![
        Platform::new("chatgpt", "ChatGPT", AccessClass::Free)
            .with_avatar("🤖")
            .with_templates(
                "I'd approach \"{topic}\" by considering the historical context and contemporary implications. This seems like a complex issue that requires careful analysis of multiple perspectives.",
                "Following up on that point about \"{topic}\", I'd consider how this perspective interacts with other viewpoints in the discussion.",
            ),
        Platform::new("claude", "Claude", AccessClass::Free)
            .with_avatar("🧠")
            .with_templates(
                "Regarding \"{topic}\", I think it's important to examine this through both historical and modern lenses. The interplay between historical narratives and present-day understanding is crucial here.",
                "Building on your observation about \"{topic}\", this seems to connect with several important themes we've been exploring.",
            ),
        Platform::new("gemini", "Gemini", AccessClass::Free)
            .with_avatar("💎")
            .with_templates(
                "When considering \"{topic}\", multiple dimensions come to mind - historical accuracy, cultural memory, and how societies reconcile with complex pasts.",
                "Your point about \"{topic}\" raises interesting questions about how different approaches might complement each other in this analysis.",
            ),
        Platform::new("grok", "Grok", AccessClass::Premium)
            .with_avatar("🚀")
            .with_templates(
                "\"{topic}\" - now that's a topic with some real depth! Let's unpack the historical narratives and see what they reveal about current perspectives.",
                "Now that's an interesting angle on \"{topic}\"! Let me see how this fits with the broader context we're discussing.",
            ),
        Platform::new("deepseek", "DeepSeek", AccessClass::Premium)
            .with_avatar("🔍")
            .with_templates(
                "Analyzing \"{topic}\" requires examining historical interpretations, their evolution over time, and how they shape contemporary understanding and commemorations.",
                "Your input about \"{topic}\" provides a valuable perspective that enhances our multi-faceted analysis of this topic.",
            ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_partition() {
        let catalog = PlatformCatalog::builtin();
        let free: Vec<_> = catalog.free().map(|p| p.id.as_str()).collect();
        let premium: Vec<_> = catalog.premium().map(|p| p.id.as_str()).collect();
        assert_eq!(free, vec!["chatgpt", "claude", "gemini"]);
        assert_eq!(premium, vec!["grok", "deepseek"]);
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_default_selection_is_free_platforms() {
        let catalog = PlatformCatalog::builtin();
        let ids: Vec<_> = catalog
            .default_selection()
            .into_iter()
            .map(|id| id.to_string())
            .collect();
        assert_eq!(ids, vec!["chatgpt", "claude", "gemini"]);
    }

    #[test]
    fn test_resolve_unknown() {
        let catalog = PlatformCatalog::builtin();
        assert!(catalog.resolve("Claude").is_ok());
        assert_eq!(
            catalog.resolve("bard"),
            Err(DomainError::UnknownPlatform("bard".to_string()))
        );
    }

    #[test]
    fn test_from_platforms_validation() {
        assert_eq!(
            PlatformCatalog::from_platforms(vec![]),
            Err(DomainError::EmptyCatalog)
        );

        let dup = vec![
            Platform::new("claude", "Claude", AccessClass::Free),
            Platform::new("CLAUDE", "Claude again", AccessClass::Premium),
        ];
        assert_eq!(
            PlatformCatalog::from_platforms(dup),
            Err(DomainError::DuplicatePlatform("claude".to_string()))
        );
    }

    #[test]
    fn test_display_name_fallback() {
        let catalog = PlatformCatalog::builtin();
        let known = PlatformId::new("deepseek");
        let unknown = PlatformId::new("mystery");
        assert_eq!(catalog.display_name(&known), "DeepSeek");
        assert_eq!(catalog.display_name(&unknown), "mystery");
    }
}
