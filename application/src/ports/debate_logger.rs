//! Port for structured debate logging.
//!
//! Records every submission and its result in a machine-readable form
//! (JSONL in the infrastructure adapter). This is separate from `tracing`,
//! which carries the human-readable diagnostics.

use serde_json::Value;

/// A structured debate event.
pub struct DebateEvent {
    /// Event type identifier (e.g., "debate_submitted", "debate_degraded").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl DebateEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging debate events.
///
/// `log` is synchronous and infallible; a failing sink must not disturb the
/// submission.
pub trait DebateLogger: Send + Sync {
    fn log(&self, event: DebateEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoDebateLogger;

impl DebateLogger for NoDebateLogger {
    fn log(&self, _event: DebateEvent) {}
}
