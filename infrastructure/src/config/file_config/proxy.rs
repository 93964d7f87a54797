//! Proxy handler configuration from TOML (`[proxy]` section)

use super::{ConfigIssue, ConfigValidationError};
use janus_application::ProxyVariant;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Raw proxy configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProxyConfig {
    /// "open" or "authenticated"
    pub variant: String,
    /// Listen address of `--serve`
    pub bind: String,
    /// Allowed CORS origins (empty: any)
    pub cors_origins: Vec<String>,
}

impl Default for FileProxyConfig {
    fn default() -> Self {
        Self {
            variant: ProxyVariant::Open.as_str().to_string(),
            bind: DEFAULT_BIND.to_string(),
            cors_origins: Vec::new(),
        }
    }
}

impl FileProxyConfig {
    /// Parse the variant, falling back to `open` with an issue.
    pub fn parse_variant(&self) -> (ProxyVariant, Vec<ConfigIssue>) {
        match self.variant.parse() {
            Ok(v) => (v, vec![]),
            Err(_) => (
                ProxyVariant::Open,
                vec![ConfigIssue::error(ConfigValidationError::UnknownVariant(
                    self.variant.clone(),
                ))],
            ),
        }
    }

    pub fn parse_bind(&self) -> (Option<SocketAddr>, Vec<ConfigIssue>) {
        match self.bind.trim().parse() {
            Ok(addr) => (Some(addr), vec![]),
            Err(_) => (
                None,
                vec![ConfigIssue::error(ConfigValidationError::InvalidBind(
                    self.bind.clone(),
                ))],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_open_on_localhost() {
        let config = FileProxyConfig::default();
        assert_eq!(config.parse_variant(), (ProxyVariant::Open, vec![]));
        assert_eq!(
            config.parse_bind().0,
            Some("127.0.0.1:3000".parse().unwrap())
        );
    }

    #[test]
    fn test_invalid_variant_falls_back() {
        let config = FileProxyConfig {
            variant: "sometimes".to_string(),
            ..Default::default()
        };
        let (variant, issues) = config.parse_variant();
        assert_eq!(variant, ProxyVariant::Open);
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_invalid_bind() {
        let config = FileProxyConfig {
            bind: "localhost".to_string(),
            ..Default::default()
        };
        let (addr, issues) = config.parse_bind();
        assert!(addr.is_none());
        assert_eq!(issues.len(), 1);
    }
}
