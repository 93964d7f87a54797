//! Conversation subdomain: the turns of a session and the platform selection.

pub mod entities;
pub mod selection;
