//! Interactive chat module
//!
//! Provides a readline-based interactive debate interface.

mod repl;

pub use repl::ChatRepl;
