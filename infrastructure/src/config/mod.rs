//! Configuration file loading for janus-forge
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `JANUS_*` and `NEXT_PUBLIC_API_URL` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./janus.toml` or `./.janus.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/janus-forge/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, ConfigValidationError, DEFAULT_BIND, FileBackendConfig, FileCatalogConfig,
    FileConfig, FileLoggingConfig, FileProfileConfig, FileProxyConfig, Severity, to_profiles,
};
pub use loader::{ConfigLoader, PUBLIC_API_URL_VAR};
