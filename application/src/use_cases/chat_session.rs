//! Chat session use case
//!
//! Holds the conversation state of one view: the turns, the platform
//! selection, the busy flag and the last error. Submissions go through
//! [`SubmitDebateUseCase`].
//!
//! A submission is split into [`ChatSession::begin_start`] /
//! [`ChatSession::begin_follow_up`] (validate, append the user turn, mark busy)
//! and [`ChatSession::complete`] (apply the result). Each pending submission
//! carries the conversation generation it was issued under; once the
//! conversation has been reset its result is discarded as stale.

use super::submit_debate::{SubmitDebateInput, SubmitDebateUseCase, SubmitError};
use crate::ports::progress::SubmitProgress;
use janus_domain::{
    Conversation, DebateOutcome, PlatformCatalog, PlatformSelection, SelectionChange, Tier, Topic,
    TurnKind,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors raised before a submission is issued
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("Query is required")]
    EmptyInput,

    #[error("Please select at least one AI platform to continue.")]
    NoPlatformsSelected,

    #[error("A request is already in progress")]
    Busy,

    #[error("No conversation has been started")]
    NotStarted,

    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),
}

/// A submission that has been issued but not yet applied
#[derive(Debug)]
pub struct PendingSubmission {
    generation: u64,
    input: SubmitDebateInput,
}

impl PendingSubmission {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn input(&self) -> &SubmitDebateInput {
        &self.input
    }
}

/// What [`ChatSession::complete`] did with a result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// Responses were appended to the conversation
    Responses { count: usize, degraded: bool },
    /// The submission failed; the error is also kept as the session's last error
    Failed(SubmitError),
    /// The conversation was reset while the submission was outstanding
    Stale,
}

/// Conversation state plus submission lifecycle for one view
pub struct ChatSession {
    use_case: Arc<SubmitDebateUseCase>,
    conversation: Conversation,
    selection: PlatformSelection,
    tier: Tier,
    token: Option<String>,
    started: bool,
    in_flight: Option<u64>,
    last_error: Option<String>,
}

impl ChatSession {
    pub fn new(use_case: Arc<SubmitDebateUseCase>) -> Self {
        let selection = PlatformSelection::default_for(use_case.catalog());
        Self {
            use_case,
            conversation: Conversation::new(),
            selection,
            tier: Tier::default(),
            token: None,
            started: false,
            in_flight: None,
            last_error: None,
        }
    }

    /// Tier used to gate selection changes in this view.
    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = tier;
        self
    }

    /// Bearer token attached to every submission.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_selection(mut self, selection: PlatformSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn catalog(&self) -> &PlatformCatalog {
        self.use_case.catalog()
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn selection(&self) -> &PlatformSelection {
        &self.selection
    }

    pub fn tier(&self) -> &Tier {
        &self.tier
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    // ==================== Selection ====================

    pub fn toggle_platform(&mut self, id: &str) -> Result<SelectionChange, ChatError> {
        let platform = self
            .use_case
            .catalog()
            .resolve(id)
            .map_err(|_| ChatError::UnknownPlatform(id.to_string()))?;
        Ok(self.selection.toggle(platform, &self.tier))
    }

    pub fn select_all(&mut self) {
        self.selection.select_all(self.use_case.catalog(), &self.tier);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // ==================== Submission ====================

    /// Begin a new conversation on `topic`, replacing any previous one.
    pub fn begin_start(&mut self, topic: &str) -> Result<PendingSubmission, ChatError> {
        let topic = self.check_submittable(topic)?;
        self.conversation.reset();
        self.started = true;
        Ok(self.issue(topic, TurnKind::Opening))
    }

    /// Begin a follow-up message in the current conversation.
    pub fn begin_follow_up(&mut self, message: &str) -> Result<PendingSubmission, ChatError> {
        if !self.started {
            return Err(ChatError::NotStarted);
        }
        let topic = self.check_submittable(message)?;
        Ok(self.issue(topic, TurnKind::FollowUp))
    }

    /// Apply the result of a pending submission.
    pub fn complete(
        &mut self,
        pending: PendingSubmission,
        result: Result<DebateOutcome, SubmitError>,
    ) -> Applied {
        if pending.generation != self.conversation.generation()
            || self.in_flight != Some(pending.generation)
        {
            debug!(
                issued = pending.generation,
                current = self.conversation.generation(),
                "Discarding stale submission result"
            );
            return Applied::Stale;
        }
        self.in_flight = None;
        match result {
            Ok(outcome) => {
                self.last_error = None;
                let count = outcome.responses.len();
                let degraded = outcome.is_degraded();
                self.conversation.append_responses(outcome.responses);
                Applied::Responses { count, degraded }
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                Applied::Failed(e)
            }
        }
    }

    /// Start a conversation and wait for the responses.
    pub async fn start(
        &mut self,
        topic: &str,
        progress: &dyn SubmitProgress,
    ) -> Result<Applied, ChatError> {
        let pending = self.begin_start(topic)?;
        Ok(self.run(pending, progress).await)
    }

    /// Send a follow-up and wait for the responses.
    pub async fn send(
        &mut self,
        message: &str,
        progress: &dyn SubmitProgress,
    ) -> Result<Applied, ChatError> {
        let pending = self.begin_follow_up(message)?;
        Ok(self.run(pending, progress).await)
    }

    /// Clear the conversation. Outstanding submissions become stale.
    pub fn reset(&mut self) {
        self.conversation.reset();
        self.started = false;
        self.in_flight = None;
        self.last_error = None;
    }

    async fn run(&mut self, pending: PendingSubmission, progress: &dyn SubmitProgress) -> Applied {
        let result = self
            .use_case
            .execute_with_progress(pending.input.clone(), progress)
            .await;
        self.complete(pending, result)
    }

    fn check_submittable(&self, text: &str) -> Result<Topic, ChatError> {
        if self.is_busy() {
            return Err(ChatError::Busy);
        }
        let topic = Topic::try_new(text).ok_or(ChatError::EmptyInput)?;
        if self.selection.is_empty() {
            return Err(ChatError::NoPlatformsSelected);
        }
        Ok(topic)
    }

    fn issue(&mut self, topic: Topic, kind: TurnKind) -> PendingSubmission {
        self.conversation.append_user(topic.content());
        self.last_error = None;
        let generation = self.conversation.generation();
        self.in_flight = Some(generation);

        let mut input = SubmitDebateInput::new(topic.into_content()).with_platforms(
            self.selection.ids().iter().map(|id| id.to_string()),
        );
        input.kind = kind;
        if let Some(token) = &self.token {
            input = input.with_bearer(token);
        }
        PendingSubmission { generation, input }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SubmitConfig;
    use crate::ports::debate_gateway::{
        DebateGateway, DialecticEntry, DialecticReply, DialecticRequest, GatewayError,
    };
    use crate::ports::progress::NoProgress;
    use async_trait::async_trait;
    use janus_domain::{GatingPrompt, PlatformId, PlatformResponse};

    struct EchoGateway;

    #[async_trait]
    impl DebateGateway for EchoGateway {
        async fn dialectic(
            &self,
            request: &DialecticRequest,
        ) -> Result<DialecticReply, GatewayError> {
            Ok(DialecticReply {
                responses: vec![DialecticEntry {
                    model: "claude".to_string(),
                    response: format!("echo: {}", request.query),
                    real_ai_used: Some(true),
                    timestamp: None,
                }],
            })
        }

        async fn probe(&self) -> bool {
            true
        }
    }

    struct DownGateway;

    #[async_trait]
    impl DebateGateway for DownGateway {
        async fn dialectic(&self, _: &DialecticRequest) -> Result<DialecticReply, GatewayError> {
            Err(GatewayError::Transport("connection refused".to_string()))
        }

        async fn probe(&self) -> bool {
            false
        }
    }

    fn session(gateway: impl DebateGateway + 'static, config: SubmitConfig) -> ChatSession {
        let uc = SubmitDebateUseCase::new(
            Arc::new(gateway),
            Arc::new(PlatformCatalog::builtin()),
            config,
        );
        ChatSession::new(Arc::new(uc))
    }

    fn outcome(topic: &str) -> DebateOutcome {
        DebateOutcome::from_backend(
            Topic::parse(topic).unwrap(),
            vec![PlatformResponse::live("chatgpt", "late")],
        )
    }

    #[tokio::test]
    async fn test_start_appends_user_turn_then_responses() {
        let mut chat = session(EchoGateway, SubmitConfig::default());

        let applied = chat.start("AI ethics", &NoProgress).await.unwrap();

        assert_eq!(
            applied,
            Applied::Responses {
                count: 1,
                degraded: false
            }
        );
        let turns = chat.conversation().turns();
        assert_eq!(turns.len(), 2);
        assert!(turns[0].is_user());
        assert_eq!(turns[1].response().unwrap().text, "echo: AI ethics");
        assert!(!chat.is_busy());
        assert!(chat.is_started());
    }

    #[tokio::test]
    async fn test_follow_up_extends_conversation() {
        let mut chat = session(DownGateway, SubmitConfig::default());

        chat.start("AI ethics", &NoProgress).await.unwrap();
        let applied = chat.send("What about jobs?", &NoProgress).await.unwrap();

        assert_eq!(
            applied,
            Applied::Responses {
                count: 3,
                degraded: true
            }
        );
        // user + 3 + user + 3
        assert_eq!(chat.conversation().len(), 8);
        let last = chat.conversation().last().unwrap().response().unwrap();
        assert!(last.text.contains("What about jobs?"));
        assert!(!last.live);
    }

    #[tokio::test]
    async fn test_follow_up_requires_started_conversation() {
        let mut chat = session(EchoGateway, SubmitConfig::default());
        let err = chat.send("hello", &NoProgress).await.unwrap_err();
        assert_eq!(err, ChatError::NotStarted);
        assert!(chat.conversation().is_empty());
    }

    #[test]
    fn test_blank_input_rejected() {
        let mut chat = session(EchoGateway, SubmitConfig::default());
        assert_eq!(chat.begin_start("   ").unwrap_err(), ChatError::EmptyInput);
        assert!(!chat.is_busy());
        assert!(chat.conversation().is_empty());
    }

    #[test]
    fn test_empty_selection_rejected() {
        let mut chat = session(EchoGateway, SubmitConfig::default())
            .with_selection(PlatformSelection::new(Vec::<PlatformId>::new()));
        assert_eq!(
            chat.begin_start("AI ethics").unwrap_err(),
            ChatError::NoPlatformsSelected
        );
    }

    #[test]
    fn test_second_submission_while_busy_rejected() {
        let mut chat = session(EchoGateway, SubmitConfig::default());
        let _pending = chat.begin_start("first").unwrap();
        assert!(chat.is_busy());
        assert_eq!(chat.begin_follow_up("second").unwrap_err(), ChatError::Busy);
        assert_eq!(chat.conversation().len(), 1);
    }

    #[test]
    fn test_reset_discards_outstanding_result() {
        let mut chat = session(EchoGateway, SubmitConfig::default());
        let pending = chat.begin_start("old topic").unwrap();

        chat.reset();
        assert!(!chat.is_busy());
        assert!(!chat.is_started());

        let applied = chat.complete(pending, Ok(outcome("old topic")));
        assert_eq!(applied, Applied::Stale);
        assert!(chat.conversation().is_empty());
    }

    #[test]
    fn test_result_applied_only_once_per_submission() {
        let mut chat = session(EchoGateway, SubmitConfig::default());
        let pending = chat.begin_start("AI ethics").unwrap();
        let duplicate = PendingSubmission {
            generation: pending.generation(),
            input: pending.input().clone(),
        };

        assert_eq!(
            chat.complete(pending, Ok(outcome("AI ethics"))),
            Applied::Responses { count: 1, degraded: false }
        );
        assert_eq!(chat.complete(duplicate, Ok(outcome("AI ethics"))), Applied::Stale);
        assert_eq!(chat.conversation().len(), 2);
    }

    #[test]
    fn test_restart_discards_previous_result() {
        let mut chat = session(EchoGateway, SubmitConfig::default());
        let stale = chat.begin_start("old topic").unwrap();
        chat.reset();
        let fresh = chat.begin_start("new topic").unwrap();

        assert_eq!(chat.complete(stale, Ok(outcome("old topic"))), Applied::Stale);
        assert!(chat.is_busy());
        assert!(matches!(
            chat.complete(fresh, Ok(outcome("new topic"))),
            Applied::Responses { count: 1, .. }
        ));
        assert_eq!(chat.conversation().len(), 2);
    }

    #[test]
    fn test_failure_recorded_as_last_error() {
        let mut chat = session(EchoGateway, SubmitConfig::default());
        let pending = chat.begin_start("topic").unwrap();

        let applied = chat.complete(pending, Err(SubmitError::Internal));

        assert_eq!(applied, Applied::Failed(SubmitError::Internal));
        assert_eq!(chat.last_error(), Some("Failed to process debate request"));
        assert!(!chat.is_busy());
        // user turn stays
        assert_eq!(chat.conversation().len(), 1);
    }

    #[test]
    fn test_toggle_premium_gated_for_explorer() {
        let mut chat = session(EchoGateway, SubmitConfig::default());
        let change = chat.toggle_platform("grok").unwrap();
        let grok = chat.catalog().resolve("grok").unwrap().clone();
        assert_eq!(
            change,
            SelectionChange::Gated(GatingPrompt::for_platform(&grok))
        );
        assert_eq!(chat.selection().len(), 3);
    }

    #[test]
    fn test_toggle_premium_allowed_for_paid_tier() {
        let mut chat = session(EchoGateway, SubmitConfig::default()).with_tier(Tier::Pioneer);
        assert_eq!(
            chat.toggle_platform("grok").unwrap(),
            SelectionChange::Added(PlatformId::new("grok"))
        );
        chat.select_all();
        assert_eq!(chat.selection().len(), 5);
        chat.clear_selection();
        assert_eq!(chat.selection().len(), 1);
    }

    #[test]
    fn test_toggle_unknown_platform() {
        let mut chat = session(EchoGateway, SubmitConfig::default());
        assert_eq!(
            chat.toggle_platform("bard").unwrap_err(),
            ChatError::UnknownPlatform("bard".to_string())
        );
    }

    #[test]
    fn test_token_attached_to_submissions() {
        let mut chat = session(EchoGateway, SubmitConfig::default()).with_token("abc");
        let pending = chat.begin_start("topic").unwrap();
        assert_eq!(pending.input().authorization.as_deref(), Some("Bearer abc"));
        assert_eq!(pending.input().kind, TurnKind::Opening);
    }
}
