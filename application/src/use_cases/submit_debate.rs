//! Submit Debate use case
//!
//! The debate-submission contract behind `POST /api/debate`:
//!
//! 1. Validate the topic (400 when blank)
//! 2. Apply the authentication variant (401 when a credential is required but absent)
//! 3. Check entitlements of the requested platforms against the trusted profile (403)
//! 4. Forward exactly once to the dialectic backend
//! 5. Relay the reply, relay upstream failures, or degrade to placeholders

use crate::config::SubmitConfig;
use crate::ports::debate_gateway::{DebateGateway, DialecticEntry, DialecticRequest, GatewayError};
use crate::ports::debate_logger::{DebateEvent, DebateLogger, NoDebateLogger};
use crate::ports::profile_repository::{NoProfiles, ProfileRepository};
use crate::ports::progress::{NoProgress, SubmitProgress};
use janus_domain::debate::templates;
use janus_domain::{
    DebateOutcome, DomainError, Platform, PlatformCatalog, PlatformId, PlatformResponse, Tier,
    TierGate, Topic, TurnKind,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Marker the backend puts in the text of entries whose provider call failed.
const API_ERROR_MARKER: &str = "API Error";

/// Errors that can occur during submission, each mapped to an HTTP status
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Query is required")]
    InvalidQuery,

    #[error("At least one platform must be selected")]
    NoPlatforms,

    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("Authentication required")]
    Unauthorized,

    #[error("Premium AI Required: {0}")]
    Forbidden(String),

    /// Non-success status from the backend; `message` is its body text.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    #[error("Failed to process debate request")]
    Internal,
}

impl SubmitError {
    pub fn status(&self) -> u16 {
        match self {
            SubmitError::InvalidQuery
            | SubmitError::NoPlatforms
            | SubmitError::UnknownPlatform(_) => 400,
            SubmitError::Unauthorized => 401,
            SubmitError::Forbidden(_) => 403,
            SubmitError::Upstream { status, .. } => *status,
            SubmitError::Internal => 500,
        }
    }
}

impl From<DomainError> for SubmitError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::EmptyTopic => SubmitError::InvalidQuery,
            DomainError::UnknownPlatform(id) => SubmitError::UnknownPlatform(id),
            DomainError::EmptyCatalog | DomainError::DuplicatePlatform(_) => SubmitError::Internal,
        }
    }
}

/// Input for the [`SubmitDebateUseCase`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitDebateInput {
    /// Raw topic; absent and blank are both rejected.
    pub query: Option<String>,
    /// Raw `Authorization` header value.
    #[serde(skip)]
    pub authorization: Option<String>,
    /// Requested platform ids; `None` means the catalog's free platforms.
    #[serde(default)]
    pub platforms: Option<Vec<String>>,
    #[serde(default)]
    pub kind: TurnKind,
}

impl SubmitDebateInput {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    pub fn with_authorization(mut self, header: impl Into<String>) -> Self {
        self.authorization = Some(header.into());
        self
    }

    pub fn with_bearer(self, token: &str) -> Self {
        self.with_authorization(format!("Bearer {}", token))
    }

    pub fn with_platforms<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platforms = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn follow_up(mut self) -> Self {
        self.kind = TurnKind::FollowUp;
        self
    }
}

/// Extract the token from a `Bearer <token>` header value.
pub fn bearer_token(header: Option<&str>) -> Option<&str> {
    let value = header?.trim();
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

/// Use case for submitting a topic to the selected platforms
pub struct SubmitDebateUseCase {
    gateway: Arc<dyn DebateGateway>,
    catalog: Arc<PlatformCatalog>,
    config: SubmitConfig,
    profiles: Arc<dyn ProfileRepository>,
    logger: Arc<dyn DebateLogger>,
}

impl SubmitDebateUseCase {
    pub fn new(
        gateway: Arc<dyn DebateGateway>,
        catalog: Arc<PlatformCatalog>,
        config: SubmitConfig,
    ) -> Self {
        Self {
            gateway,
            catalog,
            config,
            profiles: Arc::new(NoProfiles),
            logger: Arc::new(NoDebateLogger),
        }
    }

    /// Use a trusted profile source for entitlement checks.
    pub fn with_profiles(mut self, profiles: Arc<dyn ProfileRepository>) -> Self {
        self.profiles = profiles;
        self
    }

    /// Create with a debate logger.
    pub fn with_logger(mut self, logger: Arc<dyn DebateLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn catalog(&self) -> &PlatformCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &SubmitConfig {
        &self.config
    }

    /// Report whether the backend currently answers its probe.
    pub async fn backend_reachable(&self) -> bool {
        self.gateway.probe().await
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: SubmitDebateInput) -> Result<DebateOutcome, SubmitError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: SubmitDebateInput,
        progress: &dyn SubmitProgress,
    ) -> Result<DebateOutcome, SubmitError> {
        let topic = Topic::parse(input.query.unwrap_or_default())?;

        let token = bearer_token(input.authorization.as_deref());
        if self.config.variant.requires_credential() && token.is_none() {
            debug!("Rejecting submission without credential");
            return Err(SubmitError::Unauthorized);
        }

        let selected = self.resolve_platforms(input.platforms.as_deref())?;
        let tier = self.resolve_tier(token).await;
        if let Some(denied) = selected.iter().find(|p| !TierGate::permits(&tier, p)) {
            info!(platform = %denied.id, tier = %tier, "Platform not permitted for tier");
            return Err(SubmitError::Forbidden(denied.name.clone()));
        }

        let ids: Vec<PlatformId> = selected.iter().map(|p| p.id.clone()).collect();
        info!(
            "Submitting debate to {} platforms: {}",
            ids.len(),
            topic.preview(80)
        );
        self.logger.log(DebateEvent::new(
            "debate_submitted",
            json!({
                "topic": topic.content(),
                "platforms": &ids,
                "kind": input.kind,
                "variant": self.config.variant.as_str(),
            }),
        ));
        progress.on_submit_start(&ids);

        if self.config.probe_backend && !self.gateway.probe().await {
            warn!("Backend probe failed, answering with simulated responses");
            let outcome = self.degraded(topic, &selected, input.kind, "probe_failed");
            progress.on_submit_complete(&outcome);
            return Ok(outcome);
        }

        let request = self.build_request(&topic, token);
        match self.gateway.dialectic(&request).await {
            Ok(reply) => {
                let responses = self.relay(&topic, reply.responses, input.kind);
                let outcome = DebateOutcome::from_backend(topic, responses);
                info!(
                    "Backend returned {} responses ({} live)",
                    outcome.responses.len(),
                    outcome.live_count()
                );
                self.logger.log(DebateEvent::new(
                    "debate_completed",
                    json!({
                        "responses": outcome.responses.len(),
                        "live": outcome.live_count(),
                    }),
                ));
                progress.on_submit_complete(&outcome);
                Ok(outcome)
            }
            Err(e) if e.is_unreachable() && self.config.degraded_mode => {
                warn!(error = %e, "Backend unreachable, answering with simulated responses");
                let outcome = self.degraded(topic, &selected, input.kind, "unreachable");
                progress.on_submit_complete(&outcome);
                Ok(outcome)
            }
            Err(e) => {
                let err = match e {
                    GatewayError::Upstream { status, body } => {
                        warn!(status, "Backend returned an error status");
                        let message = if body.trim().is_empty() {
                            format!("Backend error: {}", status)
                        } else {
                            body
                        };
                        SubmitError::Upstream { status, message }
                    }
                    other => {
                        error!(error = %other, "Debate request failed");
                        SubmitError::Internal
                    }
                };
                self.logger.log(DebateEvent::new(
                    "debate_failed",
                    json!({ "status": err.status(), "message": err.to_string() }),
                ));
                progress.on_submit_failed(&err.to_string());
                Err(err)
            }
        }
    }

    fn resolve_platforms(&self, requested: Option<&[String]>) -> Result<Vec<&Platform>, SubmitError> {
        let Some(ids) = requested else {
            let free: Vec<&Platform> = self.catalog.free().collect();
            if free.is_empty() {
                return Err(SubmitError::NoPlatforms);
            }
            return Ok(free);
        };
        if ids.is_empty() {
            return Err(SubmitError::NoPlatforms);
        }
        let mut selected: Vec<&Platform> = Vec::with_capacity(ids.len());
        for id in ids {
            let platform = self.catalog.resolve(id)?;
            if !selected.iter().any(|p| p.id == platform.id) {
                selected.push(platform);
            }
        }
        Ok(selected)
    }

    async fn resolve_tier(&self, token: Option<&str>) -> Tier {
        match token {
            Some(token) => self
                .profiles
                .find_by_token(token)
                .await
                .map(|profile| profile.tier)
                .unwrap_or_default(),
            None => Tier::default(),
        }
    }

    fn build_request(&self, topic: &Topic, token: Option<&str>) -> DialecticRequest {
        let mut request = DialecticRequest::new(topic.content());
        if self.config.variant.requires_credential() {
            request = request.with_models(
                self.config
                    .default_models
                    .iter()
                    .map(|m| m.to_string())
                    .collect(),
            );
            if let Some(token) = token {
                request = request.with_authorization(format!("Bearer {}", token));
            }
        }
        request
    }

    /// Map backend entries to responses. Entries naming a platform outside the
    /// catalog are dropped.
    fn relay(&self, topic: &Topic, entries: Vec<DialecticEntry>, kind: TurnKind) -> Vec<PlatformResponse> {
        entries
            .into_iter()
            .filter_map(|entry| {
                let Ok(platform) = self.catalog.resolve(&entry.model) else {
                    warn!(model = %entry.model, "Dropping response for platform outside the catalog");
                    return None;
                };
                let timestamp = entry.parsed_timestamp();
                let api_error = entry.response.contains(API_ERROR_MARKER);
                let live = entry.real_ai_used.unwrap_or(true) && !api_error;
                let mut response = if live {
                    PlatformResponse::live(platform.id.clone(), entry.response)
                } else {
                    let text = templates::simulated(platform, topic.content(), kind);
                    let simulated = PlatformResponse::simulated(platform.id.clone(), text);
                    if api_error {
                        simulated.with_error(entry.response)
                    } else {
                        simulated
                    }
                };
                if let Some(ts) = timestamp {
                    response = response.with_timestamp(ts);
                }
                Some(response)
            })
            .collect()
    }

    fn degraded(
        &self,
        topic: Topic,
        selected: &[&Platform],
        kind: TurnKind,
        reason: &'static str,
    ) -> DebateOutcome {
        let responses = selected
            .iter()
            .map(|p| {
                PlatformResponse::simulated(
                    p.id.clone(),
                    templates::unavailable(p, topic.content(), kind),
                )
            })
            .collect();
        self.logger.log(DebateEvent::new(
            "debate_degraded",
            json!({ "reason": reason, "platforms": selected.len() }),
        ));
        DebateOutcome::degraded(topic, responses)
    }
}
