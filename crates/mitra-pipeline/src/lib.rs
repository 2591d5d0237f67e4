//! # mitra-pipeline
//!
//! The BhashaMitra text-analysis pipeline: from raw document text, through
//! the remote Suggestion Engine, to a validated set of typed suggestion
//! records driving safe, idempotent document mutations.
//!
//! The flow is strictly downstream:
//!
//! 1. Text extraction from the [`DocumentSurface`]
//! 2. Prompt rendering (`mitra-inference`)
//! 3. The two sequential analyzer calls
//! 4. JSON extraction and defensive decoding ([`extract`])
//! 5. Position reconciliation ([`reconcile`])
//! 6. Presentation projection and highlighting ([`project`])
//! 7. Mutation application on user acceptance ([`session`])
//!
//! All state lives in a [`CheckSession`] for exactly one analysis cycle;
//! nothing is persisted.

pub mod extract;
pub mod mock;
pub mod project;
pub mod reconcile;
pub mod session;
pub mod stats;

// Re-export core types
pub use mitra_core::*;

pub use project::{apply_highlights, project, SuggestionCard};
pub use session::CheckSession;
