//! Core domain concepts shared across all subdomains.
//!
//! - [`topic::Topic`]: a validated topic to put before the platforms
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod topic;
