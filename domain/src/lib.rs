//! Domain layer for janus-forge
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Platforms
//!
//! A closed catalog of third-party AI chat services. Each platform is either
//! free or premium; premium platforms are gated behind a non-free [`Tier`].
//!
//! ## Debate
//!
//! A [`Topic`] is put before the selected platforms. Every platform yields one
//! [`PlatformResponse`], flagged live when it came from the backend and not
//! live when it was synthesized locally.
//!
//! ## Conversation
//!
//! The append-only sequence of user turns and platform responses held by a
//! view, reset as a whole.

pub mod conversation;
pub mod core;
pub mod debate;
pub mod platform;
pub mod profile;
pub mod tier;

// Re-export commonly used types
pub use conversation::{
    entities::{Conversation, Turn, TurnContent},
    selection::{GatingPrompt, PlatformSelection, SelectionChange},
};
pub use core::{error::DomainError, topic::Topic};
pub use debate::{
    SUGGESTED_TOPICS,
    outcome::{DebateOutcome, OutcomeSource},
    response::PlatformResponse,
    templates::TurnKind,
};
pub use platform::{
    catalog::PlatformCatalog,
    entities::{AccessClass, Platform, PlatformId},
};
pub use profile::Profile;
pub use tier::{GateDecision, Tier, TierGate};
