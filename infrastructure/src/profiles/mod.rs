//! Profile store implementing the
//! [`ProfileRepository`](janus_application::ProfileRepository) port.

mod in_memory;

pub use in_memory::InMemoryProfileRepository;
