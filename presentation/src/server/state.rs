//! Shared application state injected into every handler.

use janus_application::SubmitDebateUseCase;
use janus_domain::{PlatformCatalog, SUGGESTED_TOPICS};
use std::sync::Arc;

/// Immutable state shared across requests
pub struct AppState {
    pub use_case: Arc<SubmitDebateUseCase>,
    pub suggested_topics: Vec<String>,
    /// Allowed CORS origins; empty allows any origin.
    pub cors_origins: Vec<String>,
}

impl AppState {
    pub fn new(use_case: Arc<SubmitDebateUseCase>) -> Self {
        Self {
            use_case,
            suggested_topics: SUGGESTED_TOPICS.iter().map(|t| t.to_string()).collect(),
            cors_origins: Vec::new(),
        }
    }

    pub fn with_suggested_topics(mut self, topics: Vec<String>) -> Self {
        self.suggested_topics = topics;
        self
    }

    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = origins;
        self
    }

    pub fn catalog(&self) -> &PlatformCatalog {
        self.use_case.catalog()
    }
}
