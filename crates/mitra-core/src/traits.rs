//! Core traits for BhashaMitra abstractions.
//!
//! These traits are the two seams of the system: `DocumentSurface` is the
//! host word processor's scripting API, `SuggestionEngine` is the remote
//! text-completion service. Concrete implementations live outside the
//! pipeline (host adapters, `mitra-inference` backends, mocks).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

// =============================================================================
// TEXT RANGES
// =============================================================================

/// A contiguous span of document text, in zero-based char offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRange {
    pub start: usize,
    pub len: usize,
}

impl TextRange {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Offset one past the end of the range.
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

// =============================================================================
// DOCUMENT SURFACE
// =============================================================================

/// The host application's API for reading, searching, highlighting,
/// selecting, and replacing text in the open document.
///
/// Every operation is an independent request/acknowledge round trip to the
/// host. The pipeline issues them sequentially, awaiting each acknowledgment,
/// and treats failures as best-effort: logged, never allowed to break the
/// overall flow. The surface owns the authoritative document text at all
/// times; any text the pipeline holds is a snapshot.
#[async_trait]
pub trait DocumentSurface: Send + Sync {
    /// Read the full current document text.
    async fn read_all_text(&self) -> Result<String>;

    /// Find every literal occurrence of `pattern`.
    async fn search_literal(&self, pattern: &str, case_sensitive: bool) -> Result<Vec<TextRange>>;

    /// Set (or with `None`, remove) the highlight color on a range.
    async fn set_highlight(&self, range: TextRange, color: Option<&str>) -> Result<()>;

    /// Remove all highlighting from the document.
    async fn clear_highlights(&self) -> Result<()>;

    /// Select a range and scroll it into view.
    async fn select_range(&self, range: TextRange) -> Result<()>;

    /// Replace every literal occurrence of `pattern` with `replacement`.
    /// Returns the number of occurrences replaced.
    async fn replace_all(&self, pattern: &str, replacement: &str) -> Result<usize>;
}

// =============================================================================
// SUGGESTION ENGINE
// =============================================================================

/// The external text-completion service.
///
/// Receives a prompt and returns free-form text expected to contain one JSON
/// analysis object. No schema is enforced server-side; all validation is
/// client-side and defensive (see `mitra-pipeline::extract`).
#[async_trait]
pub trait SuggestionEngine: Send + Sync {
    /// Submit a prompt and await the single, non-streamed reply.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// The model slug this engine submits to.
    fn model_name(&self) -> &str;
}
