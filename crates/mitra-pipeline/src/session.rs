//! One analysis cycle over a document.
//!
//! A [`CheckSession`] holds the text snapshot, the validated suggestion
//! records from the latest check, and the derived statistics. Running a new
//! check resets everything; nothing survives the session and nothing is
//! persisted.
//!
//! The exclusive `&mut self` receiver on [`CheckSession::run_check`] is what
//! enforces single-flight: a caller cannot start a second check on the same
//! session while one is in progress.

use tracing::{debug, info, warn};

use mitra_core::{
    ContentAnalysis, DocumentSurface, Error, EuphonyImprovement, LanguageStyleMixing,
    PunctuationIssue, Result, SpellingError, Stats, SuggestionEngine, ToneImprovement,
};
use mitra_inference::{build_prompt, AnalysisKind};

use crate::extract::{parse_content, parse_linguistic};
use crate::project::{apply_highlights, project, SuggestionCard};
use crate::reconcile::reconcile_positions;
use crate::stats;

/// State for exactly one analysis cycle.
#[derive(Debug, Default)]
pub struct CheckSession {
    /// Snapshot of the document text as read at check time, patched locally
    /// on acceptance. The surface owns the authoritative text.
    pub text: String,
    pub spelling: Vec<SpellingError>,
    pub tone: Vec<ToneImprovement>,
    pub style_mixing: Option<LanguageStyleMixing>,
    pub punctuation: Vec<PunctuationIssue>,
    pub euphony: Vec<EuphonyImprovement>,
    pub content: Option<ContentAnalysis>,
    pub stats: Stats,
}

impl CheckSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a full check: read the document, call the analyzer twice
    /// (linguistic then content), validate and reconcile the replies, and
    /// apply highlights.
    ///
    /// An unreachable analyzer on the linguistic call aborts the check.
    /// A malformed linguistic reply degrades to zero suggestions; the
    /// content call still happens and degrades independently. All surface
    /// traffic is best-effort.
    pub async fn run_check(
        &mut self,
        engine: &dyn SuggestionEngine,
        surface: &dyn DocumentSurface,
    ) -> Result<()> {
        let text = match surface.read_all_text().await {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    subsystem = "pipeline",
                    op = "run_check",
                    error = %e,
                    "Document read failed; treating document as empty"
                );
                String::new()
            }
        };
        if text.trim().is_empty() {
            return Err(Error::EmptyDocument);
        }

        self.reset();
        self.text = text;

        // Linguistic pass. Engine failure aborts; a malformed reply does not.
        let prompt = build_prompt(AnalysisKind::Linguistic, &self.text);
        let reply = engine.generate(&prompt).await?;
        match parse_linguistic(&reply) {
            Ok(report) => {
                self.spelling = report.spelling_errors;
                self.tone = report.tone_improvements;
                self.style_mixing = report.language_style_mixing;
                self.punctuation = report.punctuation_issues;
                self.euphony = report.euphony_improvements;
            }
            Err(e) => {
                warn!(
                    subsystem = "pipeline",
                    op = "run_check",
                    error = %e,
                    "Linguistic reply unusable; degrading to zero suggestions"
                );
            }
        }

        reconcile_positions(&mut self.spelling, &self.text);
        self.stats = stats::recompute(&self.text, self.spelling.len());

        apply_highlights(self, surface).await;

        // Content pass, independent of the linguistic outcome.
        let prompt = build_prompt(AnalysisKind::Content, &self.text);
        self.content = match engine.generate(&prompt).await {
            Ok(reply) => match parse_content(&reply) {
                Ok(content) => Some(content),
                Err(e) => {
                    warn!(
                        subsystem = "pipeline",
                        op = "run_check",
                        error = %e,
                        "Content reply unusable; skipping content analysis"
                    );
                    None
                }
            },
            Err(e) => {
                warn!(
                    subsystem = "pipeline",
                    op = "run_check",
                    error = %e,
                    "Content call failed; skipping content analysis"
                );
                None
            }
        };

        info!(
            subsystem = "pipeline",
            op = "run_check",
            suggestion_count = self.suggestion_count(),
            "Check complete"
        );
        Ok(())
    }

    /// Accept a suggestion: replace every occurrence of `flagged` with
    /// `replacement` in the document, retire the record everywhere it
    /// appears, patch the local snapshot, and recompute statistics.
    ///
    /// The document mutation is best-effort; record retirement and the
    /// snapshot patch happen regardless so a dead suggestion never comes
    /// back.
    pub async fn accept(
        &mut self,
        flagged: &str,
        replacement: &str,
        surface: &dyn DocumentSurface,
    ) {
        match surface.replace_all(flagged, replacement).await {
            Ok(count) => {
                debug!(
                    subsystem = "pipeline",
                    op = "accept",
                    match_count = count,
                    "Replacement applied"
                );
            }
            Err(e) => {
                warn!(
                    subsystem = "pipeline",
                    op = "accept",
                    error = %e,
                    "Document replacement failed; retiring the record anyway"
                );
            }
        }

        self.retire(flagged);
        self.text = self.text.replace(flagged, replacement);
        self.stats = stats::recompute(&self.text, self.spelling.len());
    }

    /// Select the first occurrence of `flagged` in the document and scroll
    /// it into view. Best-effort; a failed search or selection only logs.
    pub async fn reveal(&self, flagged: &str, surface: &dyn DocumentSurface) {
        let ranges = match surface.search_literal(flagged, true).await {
            Ok(ranges) => ranges,
            Err(e) => {
                warn!(
                    subsystem = "pipeline",
                    op = "reveal",
                    error = %e,
                    "Search failed"
                );
                return;
            }
        };
        if let Some(range) = ranges.first() {
            if let Err(e) = surface.select_range(*range).await {
                warn!(
                    subsystem = "pipeline",
                    op = "reveal",
                    error = %e,
                    "Selection failed"
                );
            }
        }
    }

    /// Project the live records into presentation order.
    pub fn cards(&self) -> Vec<SuggestionCard> {
        project(self)
    }

    /// Total live suggestion records across all categories.
    pub fn suggestion_count(&self) -> usize {
        self.spelling.len()
            + self.tone.len()
            + self
                .style_mixing
                .as_ref()
                .map_or(0, |m| m.corrections.len())
            + self.punctuation.len()
            + self.euphony.len()
    }

    /// Remove `flagged` from every category it appears in. A style-mixing
    /// report whose corrections empty out collapses to `None`.
    fn retire(&mut self, flagged: &str) {
        self.spelling.retain(|e| e.wrong != flagged);
        self.tone.retain(|t| t.current != flagged);
        self.euphony.retain(|e| e.current != flagged);
        self.punctuation.retain(|p| p.current_sentence != flagged);

        if let Some(mixing) = &mut self.style_mixing {
            mixing.corrections.retain(|c| c.current != flagged);
            if mixing.corrections.is_empty() {
                self.style_mixing = None;
            }
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
