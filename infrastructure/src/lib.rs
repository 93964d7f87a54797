//! Infrastructure layer for janus-forge
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gateway;
pub mod logging;
pub mod profiles;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, ConfigValidationError, FileBackendConfig, FileCatalogConfig,
    FileConfig, FileLoggingConfig, FileProfileConfig, FileProxyConfig, Severity,
};
pub use gateway::{BackendSettings, DEFAULT_BACKEND_URL, HttpDialecticGateway};
pub use logging::JsonlDebateLogger;
pub use profiles::InMemoryProfileRepository;
