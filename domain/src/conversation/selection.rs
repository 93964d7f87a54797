//! Platform selection held by the view

use crate::platform::catalog::PlatformCatalog;
use crate::platform::entities::{Platform, PlatformId};
use crate::tier::{Tier, TierGate};
use serde::Serialize;

/// Prompt shown instead of selecting a premium platform on the free tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GatingPrompt {
    pub platform: PlatformId,
    pub title: String,
    pub message: String,
}

impl GatingPrompt {
    pub fn for_platform(platform: &Platform) -> Self {
        Self {
            platform: platform.id.clone(),
            title: "Premium AI Required".to_string(),
            message: format!(
                "To use {}, you'll need a paid subscription. \
                 This helps us cover the API costs for premium AI services.",
                platform.name
            ),
        }
    }
}

/// Result of toggling a platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    Added(PlatformId),
    Removed(PlatformId),
    /// Removal refused: the platform is the only one selected
    KeptLast(PlatformId),
    /// Selection left untouched; the prompt must be surfaced to the user
    Gated(GatingPrompt),
}

/// Ordered set of selected platforms
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlatformSelection {
    selected: Vec<PlatformId>,
}

impl PlatformSelection {
    pub fn new(ids: impl IntoIterator<Item = PlatformId>) -> Self {
        let mut selection = Self::default();
        for id in ids {
            if !selection.contains(&id) {
                selection.selected.push(id);
            }
        }
        selection
    }

    /// Selection a fresh view starts with: all free platforms of the catalog.
    pub fn default_for(catalog: &PlatformCatalog) -> Self {
        Self::new(catalog.default_selection())
    }

    pub fn ids(&self) -> &[PlatformId] {
        &self.selected
    }

    pub fn contains(&self, id: &PlatformId) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Add or remove a platform, subject to the tier gate.
    ///
    /// Removal is never gated, so a premium platform selected under a paid
    /// tier can still be dropped after a downgrade. The last selected platform
    /// cannot be removed.
    pub fn toggle(&mut self, platform: &Platform, tier: &Tier) -> SelectionChange {
        if let Some(pos) = self.selected.iter().position(|id| id == &platform.id) {
            if self.selected.len() == 1 {
                return SelectionChange::KeptLast(platform.id.clone());
            }
            self.selected.remove(pos);
            return SelectionChange::Removed(platform.id.clone());
        }
        if !TierGate::permits(tier, platform) {
            return SelectionChange::Gated(GatingPrompt::for_platform(platform));
        }
        self.selected.push(platform.id.clone());
        SelectionChange::Added(platform.id.clone())
    }

    /// Select every platform the tier permits, keeping current order first.
    pub fn select_all(&mut self, catalog: &PlatformCatalog, tier: &Tier) {
        for platform in TierGate::permitted(tier, catalog) {
            if !self.contains(&platform.id) {
                self.selected.push(platform.id.clone());
            }
        }
    }

    /// Keep only the first selected platform.
    pub fn clear(&mut self) {
        self.selected.truncate(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> PlatformCatalog {
        PlatformCatalog::builtin()
    }

    #[test]
    fn test_gated_toggle_on_explorer_leaves_selection() {
        let catalog = catalog();
        let mut selection = PlatformSelection::default_for(&catalog);
        let before = selection.clone();
        let grok = catalog.resolve("grok").unwrap();

        let change = selection.toggle(grok, &Tier::Explorer);

        match change {
            SelectionChange::Gated(prompt) => {
                assert_eq!(prompt.platform.as_str(), "grok");
                assert!(prompt.message.contains("Grok"));
            }
            other => panic!("expected gating prompt, got {:?}", other),
        }
        assert_eq!(selection, before);
    }

    #[test]
    fn test_gated_toggle_on_paid_tier_adds() {
        let catalog = catalog();
        let mut selection = PlatformSelection::default_for(&catalog);
        let deepseek = catalog.resolve("deepseek").unwrap();

        let change = selection.toggle(deepseek, &Tier::Custom("team".into()));

        assert_eq!(change, SelectionChange::Added(PlatformId::new("deepseek")));
        assert!(selection.contains(&PlatformId::new("deepseek")));
        assert_eq!(selection.len(), 4);
    }

    #[test]
    fn test_toggle_free_platform_removes_then_adds() {
        let catalog = catalog();
        let mut selection = PlatformSelection::default_for(&catalog);
        let claude = catalog.resolve("claude").unwrap();

        assert_eq!(
            selection.toggle(claude, &Tier::Explorer),
            SelectionChange::Removed(PlatformId::new("claude"))
        );
        assert_eq!(
            selection.toggle(claude, &Tier::Explorer),
            SelectionChange::Added(PlatformId::new("claude"))
        );
        let ids: Vec<_> = selection.ids().iter().map(|i| i.as_str()).collect();
        assert_eq!(ids, vec!["chatgpt", "gemini", "claude"]);
    }

    #[test]
    fn test_last_selected_platform_is_kept() {
        let catalog = catalog();
        let mut selection = PlatformSelection::default_for(&catalog);
        for id in ["chatgpt", "claude"] {
            selection.toggle(catalog.resolve(id).unwrap(), &Tier::Explorer);
        }
        let gemini = catalog.resolve("gemini").unwrap();

        assert_eq!(
            selection.toggle(gemini, &Tier::Explorer),
            SelectionChange::KeptLast(PlatformId::new("gemini"))
        );
        assert_eq!(selection.ids(), &[PlatformId::new("gemini")]);
    }

    #[test]
    fn test_select_all_respects_tier() {
        let catalog = catalog();
        let mut selection = PlatformSelection::new(vec![PlatformId::new("gemini")]);
        selection.select_all(&catalog, &Tier::Explorer);
        assert_eq!(selection.len(), 3);
        assert_eq!(selection.ids()[0].as_str(), "gemini");

        selection.select_all(&catalog, &Tier::Pioneer);
        assert_eq!(selection.len(), 5);
    }

    #[test]
    fn test_clear_keeps_first() {
        let catalog = catalog();
        let mut selection = PlatformSelection::default_for(&catalog);
        selection.clear();
        assert_eq!(selection.ids(), &[PlatformId::new("chatgpt")]);
    }

    #[test]
    fn test_new_deduplicates() {
        let selection = PlatformSelection::new(vec![
            PlatformId::new("claude"),
            PlatformId::new("Claude"),
        ]);
        assert_eq!(selection.len(), 1);
    }
}
