//! Application-level configuration.
//!
//! - [`SubmitConfig`]: authentication variant, probe and fallback policy
//! - [`ProxyVariant`]: open vs. authenticated proxy contract

pub mod submit_config;

pub use submit_config::{ProxyVariant, SubmitConfig};
