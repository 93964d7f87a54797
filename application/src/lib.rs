//! Application layer for janus-forge
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ProxyVariant, SubmitConfig};
pub use ports::{
    debate_gateway::{DebateGateway, DialecticEntry, DialecticReply, DialecticRequest, GatewayError},
    debate_logger::{DebateEvent, DebateLogger, NoDebateLogger},
    profile_repository::{NoProfiles, ProfileRepository},
    progress::{NoProgress, SubmitProgress},
};
pub use use_cases::chat_session::{Applied, ChatError, ChatSession, PendingSubmission};
pub use use_cases::submit_debate::{
    SubmitDebateInput, SubmitDebateUseCase, SubmitError, bearer_token,
};
