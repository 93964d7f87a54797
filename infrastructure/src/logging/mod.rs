//! Logging infrastructure: structured debate records.
//!
//! Provides [`JsonlDebateLogger`], a JSONL file writer that implements
//! the [`DebateLogger`](janus_application::DebateLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlDebateLogger;
