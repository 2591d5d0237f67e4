//! In-memory document surface for deterministic testing.
//!
//! Holds the document text in a mutex and records every surface call in
//! order, so tests can assert on the exact mutation and highlight traffic
//! the pipeline produces. Ranges are char-offset based, matching the
//! [`DocumentSurface`] contract.

use std::sync::Mutex;

use async_trait::async_trait;

use mitra_core::{DocumentSurface, Error, Result, TextRange};

/// One recorded surface operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    ReadAllText,
    SearchLiteral {
        pattern: String,
        case_sensitive: bool,
    },
    SetHighlight {
        range: TextRange,
        color: Option<String>,
    },
    ClearHighlights,
    SelectRange {
        range: TextRange,
    },
    ReplaceAll {
        pattern: String,
        replacement: String,
    },
}

/// In-memory [`DocumentSurface`] with a full call log.
pub struct MemorySurface {
    text: Mutex<String>,
    calls: Mutex<Vec<SurfaceCall>>,
    fail_reads: bool,
}

impl MemorySurface {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Mutex::new(text.into()),
            calls: Mutex::new(Vec::new()),
            fail_reads: false,
        }
    }

    /// Make `read_all_text` fail with a surface error.
    pub fn with_failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Current document text.
    pub fn text(&self) -> String {
        self.text.lock().unwrap().clone()
    }

    /// All surface calls received so far, in order.
    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: SurfaceCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn find_ranges(text: &str, pattern: &str, case_sensitive: bool) -> Vec<TextRange> {
        if pattern.is_empty() {
            return Vec::new();
        }
        // Case folding is char-for-char here; fine for Bengali and ASCII.
        let (haystack, needle) = if case_sensitive {
            (text.to_string(), pattern.to_string())
        } else {
            (text.to_lowercase(), pattern.to_lowercase())
        };
        let len = needle.chars().count();
        haystack
            .match_indices(&needle)
            .map(|(byte_idx, _)| {
                let start = haystack[..byte_idx].chars().count();
                TextRange::new(start, len)
            })
            .collect()
    }
}

#[async_trait]
impl DocumentSurface for MemorySurface {
    async fn read_all_text(&self) -> Result<String> {
        self.record(SurfaceCall::ReadAllText);
        if self.fail_reads {
            return Err(Error::Surface("read failed".to_string()));
        }
        Ok(self.text())
    }

    async fn search_literal(&self, pattern: &str, case_sensitive: bool) -> Result<Vec<TextRange>> {
        self.record(SurfaceCall::SearchLiteral {
            pattern: pattern.to_string(),
            case_sensitive,
        });
        Ok(Self::find_ranges(
            &self.text.lock().unwrap(),
            pattern,
            case_sensitive,
        ))
    }

    async fn set_highlight(&self, range: TextRange, color: Option<&str>) -> Result<()> {
        self.record(SurfaceCall::SetHighlight {
            range,
            color: color.map(String::from),
        });
        Ok(())
    }

    async fn clear_highlights(&self) -> Result<()> {
        self.record(SurfaceCall::ClearHighlights);
        Ok(())
    }

    async fn select_range(&self, range: TextRange) -> Result<()> {
        self.record(SurfaceCall::SelectRange { range });
        Ok(())
    }

    async fn replace_all(&self, pattern: &str, replacement: &str) -> Result<usize> {
        self.record(SurfaceCall::ReplaceAll {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
        });
        let mut text = self.text.lock().unwrap();
        let count = text.matches(pattern).count();
        if count > 0 {
            *text = text.replace(pattern, replacement);
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_returns_char_offsets() {
        let surface = MemorySurface::new("আমি শকাল এ যাব শকাল");
        let ranges = surface.search_literal("শকাল", true).await.unwrap();
        assert_eq!(
            ranges,
            vec![TextRange::new(4, 4), TextRange::new(15, 4)]
        );
    }

    #[tokio::test]
    async fn search_missing_pattern_is_empty() {
        let surface = MemorySurface::new("আমি যাব");
        assert!(surface.search_literal("নেই", true).await.unwrap().is_empty());
        assert!(surface.search_literal("", true).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn replace_all_patches_text_and_counts() {
        let surface = MemorySurface::new("শকাল শকাল সন্ধ্যা");
        let count = surface.replace_all("শকাল", "সকাল").await.unwrap();
        assert_eq!(count, 2);
        assert_eq!(surface.text(), "সকাল সকাল সন্ধ্যা");
    }

    #[tokio::test]
    async fn calls_are_logged_in_order() {
        let surface = MemorySurface::new("আমি");
        surface.read_all_text().await.unwrap();
        surface.clear_highlights().await.unwrap();
        surface
            .set_highlight(TextRange::new(0, 3), Some("#fee2e2"))
            .await
            .unwrap();

        assert_eq!(
            surface.calls(),
            vec![
                SurfaceCall::ReadAllText,
                SurfaceCall::ClearHighlights,
                SurfaceCall::SetHighlight {
                    range: TextRange::new(0, 3),
                    color: Some("#fee2e2".to_string()),
                },
            ]
        );
    }

    #[tokio::test]
    async fn failing_reads_surface_an_error() {
        let surface = MemorySurface::new("আমি").with_failing_reads();
        assert!(matches!(
            surface.read_all_text().await,
            Err(Error::Surface(_))
        ));
    }
}
