//! Deterministic placeholder text for simulated replies.

use crate::platform::entities::Platform;
use serde::{Deserialize, Serialize};

/// Prefix for replies synthesized because the backend could not be reached.
pub const UNAVAILABLE_PREFIX: &str = "[Simulated - API Unavailable] ";

/// Prefix for backend entries that reported a non-live result.
pub const SIMULATED_PREFIX: &str = "[Simulated] ";

const GENERIC_OPENING: &str = "{name} would like to discuss \"{topic}\" with the group.";
const GENERIC_FOLLOW_UP: &str = "{name} thanks you for sharing that perspective about \"{topic}\".";

/// Whether a submission opens a conversation or continues one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnKind {
    #[default]
    Opening,
    FollowUp,
}

/// Render the placeholder body for a platform (without prefix).
///
/// The platform's own template is used when configured, otherwise a generic
/// one. Both substitute `{topic}` with the text verbatim and `{name}` with the
/// display name.
pub fn render(platform: &Platform, topic: &str, kind: TurnKind) -> String {
    let template = match kind {
        TurnKind::Opening => platform.opening_template.as_deref().unwrap_or(GENERIC_OPENING),
        TurnKind::FollowUp => platform
            .follow_up_template
            .as_deref()
            .unwrap_or(GENERIC_FOLLOW_UP),
    };
    // Substitute {name} first so a topic containing "{name}" stays verbatim.
    template
        .replace("{name}", &platform.name)
        .replace("{topic}", topic)
}

/// Placeholder for degraded mode: the backend was unreachable.
pub fn unavailable(platform: &Platform, topic: &str, kind: TurnKind) -> String {
    format!("{}{}", UNAVAILABLE_PREFIX, render(platform, topic, kind))
}

/// Placeholder for a backend entry that was not produced by a live call.
pub fn simulated(platform: &Platform, topic: &str, kind: TurnKind) -> String {
    format!("{}{}", SIMULATED_PREFIX, render(platform, topic, kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::catalog::PlatformCatalog;
    use crate::platform::entities::AccessClass;

    #[test]
    fn test_builtin_templates_quote_topic() {
        let catalog = PlatformCatalog::builtin();
        for platform in catalog.iter() {
            for kind in [TurnKind::Opening, TurnKind::FollowUp] {
                let text = render(platform, "Should AI be regulated?", kind);
                assert!(
                    text.contains("\"Should AI be regulated?\""),
                    "{} {:?}: {}",
                    platform.id,
                    kind,
                    text
                );
            }
        }
    }

    #[test]
    fn test_generic_template_combines_name_and_topic() {
        let platform = Platform::new("mistral", "Mistral", AccessClass::Free);
        assert_eq!(
            render(&platform, "tides", TurnKind::Opening),
            "Mistral would like to discuss \"tides\" with the group."
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let catalog = PlatformCatalog::builtin();
        let claude = catalog.resolve("claude").unwrap();
        assert_eq!(
            render(claude, "x", TurnKind::Opening),
            render(claude, "x", TurnKind::Opening)
        );
    }

    #[test]
    fn test_topic_with_placeholder_text_is_verbatim() {
        let platform = Platform::new("mistral", "Mistral", AccessClass::Free);
        let text = render(&platform, "what is {name}?", TurnKind::Opening);
        assert!(text.contains("what is {name}?"));
    }

    #[test]
    fn test_prefixes() {
        let catalog = PlatformCatalog::builtin();
        let grok = catalog.resolve("grok").unwrap();
        assert!(unavailable(grok, "t", TurnKind::Opening).starts_with(UNAVAILABLE_PREFIX));
        assert!(simulated(grok, "t", TurnKind::FollowUp).starts_with(SIMULATED_PREFIX));
    }
}
