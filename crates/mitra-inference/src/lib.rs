//! # mitra-inference
//!
//! Suggestion Engine backends for BhashaMitra.
//!
//! This crate provides:
//! - The two fixed analysis prompt templates (linguistic and content)
//! - Gemini `generateContent` backend (default)
//! - Deterministic mock engine for tests (feature `mock`)
//!
//! # Example
//!
//! ```rust,no_run
//! use mitra_inference::{build_prompt, AnalysisKind, GeminiBackend};
//! use mitra_core::SuggestionEngine;
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend = GeminiBackend::from_env().unwrap();
//!     let prompt = build_prompt(AnalysisKind::Linguistic, "আমি সকালে যাব");
//!     let reply = backend.generate(&prompt).await.unwrap();
//!     println!("{reply}");
//! }
//! ```

pub mod gemini;
pub mod prompt;

// Mock suggestion engine for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export core types
pub use mitra_core::*;

pub use gemini::GeminiBackend;
pub use prompt::{build_prompt, AnalysisKind};

#[cfg(any(test, feature = "mock"))]
pub use mock::MockSuggestionEngine;
