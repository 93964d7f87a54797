//! Route handlers of the proxy server.

use super::error::ServerError;
use super::state::AppState;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use chrono::{DateTime, Utc};
use janus_application::SubmitDebateInput;
use janus_domain::{DebateOutcome, Platform, PlatformCatalog, Tier, TierGate, TurnKind};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;

/// Body of `POST /api/debate`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DebateRequest {
    pub query: Option<String>,
    pub platforms: Option<Vec<String>>,
    pub follow_up: bool,
}

/// One platform's entry in a debate reply
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseEntry {
    pub platform: String,
    pub name: String,
    pub avatar: String,
    pub response: String,
    pub live: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Success body of `POST /api/debate`
#[derive(Debug, Serialize, Deserialize)]
pub struct DebateResponse {
    pub query: String,
    pub degraded: bool,
    pub responses: Vec<ResponseEntry>,
}

impl DebateResponse {
    fn from_outcome(outcome: DebateOutcome, catalog: &PlatformCatalog) -> Self {
        let degraded = outcome.is_degraded();
        let responses = outcome
            .responses
            .into_iter()
            .map(|r| {
                let (name, avatar) = catalog
                    .get(&r.platform)
                    .map(|p| (p.name.clone(), p.avatar.clone()))
                    .unwrap_or_else(|| (r.platform.to_string(), String::new()));
                ResponseEntry {
                    platform: r.platform.to_string(),
                    name,
                    avatar,
                    response: r.text,
                    live: r.live,
                    error: r.error,
                    timestamp: r.timestamp,
                }
            })
            .collect();
        Self {
            query: outcome.topic.into_content(),
            degraded,
            responses,
        }
    }
}

/// `POST /api/debate`
pub async fn post_debate(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<DebateRequest>, JsonRejection>,
) -> Result<Json<DebateResponse>, ServerError> {
    let Json(request) = payload?;

    let input = SubmitDebateInput {
        query: request.query,
        authorization: headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        platforms: request.platforms,
        kind: if request.follow_up {
            TurnKind::FollowUp
        } else {
            TurnKind::Opening
        },
    };

    let outcome = state.use_case.execute(input).await?;
    Ok(Json(DebateResponse::from_outcome(outcome, state.catalog())))
}

#[derive(Debug, Serialize)]
struct CatalogResponse<'a> {
    platforms: Vec<&'a Platform>,
    suggested_topics: &'a [String],
}

/// `GET /api/platforms`
pub async fn get_platforms(State(state): State<Arc<AppState>>) -> Json<Value> {
    let body = CatalogResponse {
        platforms: state.catalog().iter().collect(),
        suggested_topics: &state.suggested_topics,
    };
    Json(serde_json::to_value(body).unwrap_or_default())
}

#[derive(Debug, Default, Deserialize)]
pub struct EntitlementsQuery {
    pub tier: Option<String>,
}

/// `GET /api/entitlements?tier=<label>`
///
/// Display hint for a view; submissions are authorized separately.
pub async fn get_entitlements(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EntitlementsQuery>,
) -> Json<Value> {
    let tier = Tier::from_stored(query.tier.as_deref());
    let (permitted, gated): (Vec<&Platform>, Vec<&Platform>) = state
        .catalog()
        .iter()
        .partition(|p| TierGate::permits(&tier, p));
    Json(json!({
        "tier": tier,
        "permitted": permitted.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
        "gated": gated.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
    }))
}

/// `GET /health`
pub async fn get_health(State(state): State<Arc<AppState>>) -> Json<Value> {
    let backend_reachable = state.use_case.backend_reachable().await;
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "backend_reachable": backend_reachable,
    }))
}
