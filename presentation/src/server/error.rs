//! Server error type.
//!
//! Handlers return `Result<T, ServerError>`; every error becomes a JSON body
//! `{ "error": "<message>" }` with the matching status code.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use janus_application::SubmitError;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Submit(#[from] SubmitError),

    /// The request body could not be read as JSON.
    #[error("Invalid request body: {0}")]
    BadRequest(String),
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Submit(e) => {
                StatusCode::from_u16(e.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "Debate request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "Debate request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ServerError::from(SubmitError::InvalidQuery).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::from(SubmitError::Unauthorized).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ServerError::from(SubmitError::Forbidden("Grok".into())).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ServerError::from(SubmitError::Upstream {
                status: 503,
                message: "down".into()
            })
            .status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        // Not a valid HTTP status.
        assert_eq!(
            ServerError::from(SubmitError::Upstream {
                status: 42,
                message: "odd".into()
            })
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_message_is_submit_message() {
        let err = ServerError::from(SubmitError::Forbidden("Grok".into()));
        assert_eq!(err.to_string(), "Premium AI Required: Grok");
    }
}
