//! Topic value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A topic to be debated by the selected platforms (Value Object)
///
/// The only constraint is that the content is not blank. The original text is
/// kept verbatim (no trimming) so simulated replies can quote it exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Topic {
    content: String,
}

impl Topic {
    /// Parse a topic, rejecting empty or whitespace-only content
    pub fn parse(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            Err(DomainError::EmptyTopic)
        } else {
            Ok(Self { content })
        }
    }

    /// Try to create a new topic, returning None if invalid
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        Self::parse(content).ok()
    }

    /// Get the topic content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }

    /// Short single-line preview for log messages.
    ///
    /// Cuts at a UTF-8 boundary at or below `max_bytes` and appends `...`
    /// when anything was dropped.
    pub fn preview(&self, max_bytes: usize) -> String {
        let line = self.content.lines().next().unwrap_or_default();
        if line.len() <= max_bytes && line.len() == self.content.len() {
            return line.to_string();
        }
        let mut end = max_bytes.min(line.len());
        while end > 0 && !line.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &line[..end])
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Topic {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Topic::parse(value)
    }
}

impl From<Topic> for String {
    fn from(topic: Topic) -> Self {
        topic.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_creation() {
        let t = Topic::parse("Should AI be regulated?").unwrap();
        assert_eq!(t.content(), "Should AI be regulated?");
    }

    #[test]
    fn test_blank_topics_rejected() {
        for blank in ["", " ", "\t", "\n  \n"] {
            assert_eq!(Topic::parse(blank), Err(DomainError::EmptyTopic));
            assert!(Topic::try_new(blank).is_none());
        }
    }

    #[test]
    fn test_content_kept_verbatim() {
        let t = Topic::parse("  padded  ").unwrap();
        assert_eq!(t.content(), "  padded  ");
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let t = Topic::parse("あのね and more").unwrap();
        assert_eq!(t.preview(4), "あ...");
        assert_eq!(t.preview(100), "あのね and more");
    }

    #[test]
    fn test_preview_multiline() {
        let t = Topic::parse("first line\nsecond line").unwrap();
        assert_eq!(t.preview(100), "first line...");
    }

    #[test]
    fn test_deserialize_rejects_blank() {
        assert!(serde_json::from_str::<Topic>("\"   \"").is_err());
        let t: Topic = serde_json::from_str("\"AI ethics\"").unwrap();
        assert_eq!(t.content(), "AI ethics");
    }
}
