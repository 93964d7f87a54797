//! Debate Gateway port
//!
//! Defines the interface for talking to the external dialectic backend.
//! Wire types live here so the infrastructure adapter can (de)serialize them
//! directly and the use case stays free of HTTP details.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The backend answered with a non-success status.
    #[error("Backend error: {status}")]
    Upstream { status: u16, body: String },

    /// The request never produced a response (DNS, connect, reset, timeout).
    #[error("Transport error: {0}")]
    Transport(String),

    /// A success status whose body does not match the contract.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    /// `true` when the backend could not be reached or understood, i.e. the
    /// cases in which a locally synthesized result may stand in.
    pub fn is_unreachable(&self) -> bool {
        matches!(
            self,
            GatewayError::Transport(_) | GatewayError::InvalidResponse(_)
        )
    }
}

/// Body of `POST /v1/dialectic`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialecticRequest {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<String>>,
    /// Forwarded verbatim as the `Authorization` header, never serialized.
    #[serde(skip)]
    pub authorization: Option<String>,
}

impl DialecticRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            models: None,
            authorization: None,
        }
    }

    pub fn with_models(mut self, models: Vec<String>) -> Self {
        self.models = Some(models);
        self
    }

    pub fn with_authorization(mut self, value: impl Into<String>) -> Self {
        self.authorization = Some(value.into());
        self
    }
}

/// One entry of the backend reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialecticEntry {
    /// Platform id. Some backend builds name this field `ai`.
    #[serde(alias = "ai")]
    pub model: String,
    #[serde(default)]
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_ai_used: Option<bool>,
    /// Kept as text; backends disagree on the format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl DialecticEntry {
    /// The reply timestamp, if it reads as RFC 3339 or as a naive ISO 8601
    /// date-time (taken as UTC).
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        let raw = self.timestamp.as_deref()?.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|naive| naive.and_utc())
    }
}

/// Success body of `POST /v1/dialectic`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DialecticReply {
    pub responses: Vec<DialecticEntry>,
}

/// Gateway to the dialectic backend
///
/// This port defines how the application layer reaches the backend.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait DebateGateway: Send + Sync {
    /// Issue exactly one dialectic call. Implementations must not retry.
    async fn dialectic(&self, request: &DialecticRequest) -> Result<DialecticReply, GatewayError>;

    /// Lightweight reachability check.
    async fn probe(&self) -> bool;
}
