//! # mitra-core
//!
//! Core types, traits, and abstractions for the BhashaMitra writing
//! assistant.
//!
//! This crate provides the foundational data structures and trait
//! definitions that the other BhashaMitra crates depend on: the suggestion
//! record types decoded from analysis replies, the `DocumentSurface` and
//! `SuggestionEngine` interfaces behind which the host word processor and
//! the remote model live, and the shared error type.

pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use traits::{DocumentSurface, SuggestionEngine, TextRange};
