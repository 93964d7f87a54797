//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod debate_gateway;
pub mod debate_logger;
pub mod profile_repository;
pub mod progress;
