//! reqwest adapter for the dialectic backend.

use async_trait::async_trait;
use janus_application::ports::debate_gateway::{
    DebateGateway, DialecticReply, DialecticRequest, GatewayError,
};
use reqwest::header::AUTHORIZATION;
use std::time::Duration;
use tracing::{debug, warn};

/// Base URL used when neither the environment nor a config file names one.
pub const DEFAULT_BACKEND_URL: &str = "https://janus-forge-production.up.railway.app";

pub const DIALECTIC_PATH: &str = "/v1/dialectic";

pub const HEALTH_PATH: &str = "/health";

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Where and how to reach the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendSettings {
    pub base_url: String,
    pub dialectic_path: String,
    pub health_path: String,
    /// Overall request timeout; `None` keeps the client default (no timeout).
    pub timeout: Option<Duration>,
    pub probe_timeout: Duration,
}

impl BackendSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            dialectic_path: DIALECTIC_PATH.to_string(),
            health_path: HEALTH_PATH.to_string(),
            timeout: None,
            probe_timeout: PROBE_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_paths(mut self, dialectic: impl Into<String>, health: impl Into<String>) -> Self {
        self.dialectic_path = dialectic.into();
        self.health_path = health.into();
        self
    }

    pub fn dialectic_url(&self) -> String {
        format!("{}{}", self.base_url, self.dialectic_path)
    }

    pub fn health_url(&self) -> String {
        format!("{}{}", self.base_url, self.health_path)
    }
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

/// Dialectic backend reached over HTTP
pub struct HttpDialecticGateway {
    client: reqwest::Client,
    settings: BackendSettings,
}

impl HttpDialecticGateway {
    pub fn new(settings: BackendSettings) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder().user_agent(concat!(
            "janus-forge/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Transport(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &BackendSettings {
        &self.settings
    }
}

#[async_trait]
impl DebateGateway for HttpDialecticGateway {
    async fn dialectic(&self, request: &DialecticRequest) -> Result<DialecticReply, GatewayError> {
        let url = self.settings.dialectic_url();
        debug!(url = %url, models = ?request.models, "Forwarding dialectic request");

        let mut builder = self.client.post(&url).json(request);
        if let Some(auth) = &request.authorization {
            builder = builder.header(AUTHORIZATION, auth);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // The body is relayed as-is; a body that cannot be read counts as empty.
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Dialectic backend returned an error");
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| GatewayError::InvalidResponse(e.to_string()))
    }

    async fn probe(&self) -> bool {
        let url = self.settings.health_url();
        match self
            .client
            .get(&url)
            .timeout(self.settings.probe_timeout)
            .send()
            .await
        {
            Ok(response) => {
                let reachable = !response.status().is_server_error();
                debug!(url = %url, status = response.status().as_u16(), reachable, "Backend probe");
                reachable
            }
            Err(e) => {
                debug!(url = %url, error = %e, "Backend probe failed");
                false
            }
        }
    }
}
