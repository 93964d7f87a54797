//! Gateway to the external dialectic backend.
//!
//! Provides [`HttpDialecticGateway`], a reqwest client that implements the
//! [`DebateGateway`](janus_application::DebateGateway) port.

mod http_gateway;

pub use http_gateway::{
    BackendSettings, DEFAULT_BACKEND_URL, DIALECTIC_PATH, HEALTH_PATH, HttpDialecticGateway,
};
