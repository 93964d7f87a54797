//! Result of one debate submission

use super::response::PlatformResponse;
use crate::core::topic::Topic;
use serde::{Deserialize, Serialize};

/// How the responses of an outcome were obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeSource {
    /// Relayed from the backend (individual entries may still be non-live)
    Backend,
    /// Synthesized locally because the backend was unreachable
    Degraded,
}

/// The per-platform responses produced for a topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateOutcome {
    pub topic: Topic,
    pub responses: Vec<PlatformResponse>,
    pub source: OutcomeSource,
}

impl DebateOutcome {
    pub fn from_backend(topic: Topic, responses: Vec<PlatformResponse>) -> Self {
        Self {
            topic,
            responses,
            source: OutcomeSource::Backend,
        }
    }

    pub fn degraded(topic: Topic, responses: Vec<PlatformResponse>) -> Self {
        Self {
            topic,
            responses,
            source: OutcomeSource::Degraded,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.source == OutcomeSource::Degraded
    }

    pub fn live_count(&self) -> usize {
        self.responses.iter().filter(|r| r.live).count()
    }

    pub fn all_live(&self) -> bool {
        self.responses.iter().all(|r| r.live)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_accounting() {
        let topic = Topic::parse("t").unwrap();
        let outcome = DebateOutcome::from_backend(
            topic,
            vec![
                PlatformResponse::live("chatgpt", "a"),
                PlatformResponse::simulated("claude", "b"),
            ],
        );
        assert_eq!(outcome.live_count(), 1);
        assert!(!outcome.all_live());
        assert!(!outcome.is_degraded());
    }
}
