//! Per-platform debate responses

use crate::platform::entities::PlatformId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One platform's answer to a submission (Value Object)
///
/// `live` distinguishes text obtained from the backend from a locally
/// synthesized placeholder. Both shapes are otherwise identical so callers can
/// render them the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformResponse {
    pub platform: PlatformId,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub live: bool,
    pub timestamp: DateTime<Utc>,
}

impl PlatformResponse {
    /// Text relayed from the backend.
    pub fn live(platform: impl Into<PlatformId>, text: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            text: text.into(),
            error: None,
            live: true,
            timestamp: Utc::now(),
        }
    }

    /// Placeholder text produced locally.
    pub fn simulated(platform: impl Into<PlatformId>, text: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            text: text.into(),
            error: None,
            live: false,
            timestamp: Utc::now(),
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn is_live(&self) -> bool {
        self.live
    }
}
