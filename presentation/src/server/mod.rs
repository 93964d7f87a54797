//! HTTP proxy server.
//!
//! [`router`] assembles the routes:
//! - `POST /api/debate`: submit a topic (see [`handlers::post_debate`])
//! - `GET /api/platforms`: catalog and suggested topics
//! - `GET /api/entitlements`: platforms a tier label may select
//! - `GET /health`: liveness plus backend reachability
//!
//! [`serve`] runs it until Ctrl-C or SIGTERM.

mod error;
mod handlers;
mod state;

pub use error::ServerError;
pub use handlers::{DebateRequest, DebateResponse, ResponseEntry};
pub use state::AppState;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Build the complete router for the application.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/debate", post(handlers::post_debate))
        .route("/api/platforms", get(handlers::get_platforms))
        .route("/api/entitlements", get(handlers::get_entitlements))
        .route("/health", get(handlers::get_health))
        .layer(cors_layer(&state.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|s| s.trim().parse().ok())
        .collect();
    let layer = CorsLayer::new().allow_headers(Any).allow_methods(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins)
    }
}

/// Serve until a shutdown signal arrives.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    info!(%addr, variant = %state.use_case.config().variant, "Proxy server listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Proxy server stopped");
    Ok(())
}

/// Resolves when SIGINT (Ctrl-C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl-C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => warn!(error = %e, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("Shutdown signal received");
}
