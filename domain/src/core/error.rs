//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Query is required")]
    EmptyTopic,

    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("Platform catalog is empty")]
    EmptyCatalog,

    #[error("Duplicate platform id in catalog: {0}")]
    DuplicatePlatform(String),
}

impl DomainError {
    /// Check if this error was caused by caller input rather than configuration
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DomainError::EmptyTopic | DomainError::UnknownPlatform(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_topic_message_matches_wire_contract() {
        assert_eq!(DomainError::EmptyTopic.to_string(), "Query is required");
    }

    #[test]
    fn test_input_error_classification() {
        assert!(DomainError::EmptyTopic.is_input_error());
        assert!(DomainError::UnknownPlatform("bard".to_string()).is_input_error());
        assert!(!DomainError::EmptyCatalog.is_input_error());
        assert!(!DomainError::DuplicatePlatform("claude".to_string()).is_input_error());
    }
}
