//! Conversation entities

use crate::debate::response::PlatformResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a turn carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum TurnContent {
    /// A topic or follow-up typed by the user
    User { text: String },
    /// One platform's answer
    Platform { response: PlatformResponse },
}

/// A single entry of a conversation (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub id: u64,
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub content: TurnContent,
}

impl Turn {
    pub fn is_user(&self) -> bool {
        matches!(self.content, TurnContent::User { .. })
    }

    pub fn response(&self) -> Option<&PlatformResponse> {
        match &self.content {
            TurnContent::Platform { response } => Some(response),
            TurnContent::User { .. } => None,
        }
    }
}

/// Append-only sequence of turns (Aggregate)
///
/// Turns are never edited or removed individually; [`Conversation::reset`]
/// clears everything at once and advances the generation so results of
/// submissions issued before the reset can be recognised as stale.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    turns: Vec<Turn>,
    generation: u64,
    next_id: u64,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn append_user(&mut self, text: impl Into<String>) -> &Turn {
        self.push(TurnContent::User { text: text.into() })
    }

    pub fn append_response(&mut self, response: PlatformResponse) -> &Turn {
        self.push(TurnContent::Platform { response })
    }

    pub fn append_responses(&mut self, responses: impl IntoIterator<Item = PlatformResponse>) {
        for response in responses {
            self.append_response(response);
        }
    }

    /// Drop every turn and start a new generation.
    pub fn reset(&mut self) {
        self.turns.clear();
        self.generation += 1;
    }

    fn push(&mut self, content: TurnContent) -> &Turn {
        // Clock steps backwards must not reorder turns.
        let now = Utc::now();
        let at = match self.turns.last() {
            Some(last) if last.at > now => last.at,
            _ => now,
        };
        self.next_id += 1;
        self.turns.push(Turn {
            id: self.next_id,
            at,
            content,
        });
        &self.turns[self.turns.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut c = Conversation::new();
        c.append_user("topic");
        c.append_responses(vec![
            PlatformResponse::live("chatgpt", "a"),
            PlatformResponse::live("claude", "b"),
        ]);

        assert_eq!(c.len(), 3);
        assert!(c.turns()[0].is_user());
        assert_eq!(c.turns()[2].response().unwrap().platform.as_str(), "claude");

        let ids: Vec<_> = c.turns().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(c.turns().windows(2).all(|w| w[0].at <= w[1].at));
    }

    #[test]
    fn test_reset_clears_and_bumps_generation() {
        let mut c = Conversation::new();
        c.append_user("topic");
        let before = c.generation();

        c.reset();

        assert!(c.is_empty());
        assert_eq!(c.generation(), before + 1);
    }

    #[test]
    fn test_ids_keep_increasing_across_resets() {
        let mut c = Conversation::new();
        c.append_user("one");
        c.reset();
        let id = c.append_user("two").id;
        assert_eq!(id, 2);
    }

    #[test]
    fn test_turn_serialization_shape() {
        let mut c = Conversation::new();
        c.append_user("hello");
        let json = serde_json::to_value(&c.turns()[0]).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["text"], "hello");
    }
}
