//! Presentation projection: suggestion records to cards and highlights.
//!
//! Cards are a pure function of the live records, produced in fixed render
//! order: spelling, style mixing, tone, punctuation, euphony. Highlighting
//! walks the same records against the live document; since replacements may
//! have landed after the snapshot was taken, each highlight pass searches
//! first and silently skips spans that no longer exist.

use serde::Serialize;
use tracing::{debug, warn};

use mitra_core::{DocumentSurface, SuggestionCategory, SuggestionState};

use crate::session::CheckSession;

/// One presentable suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionCard {
    pub category: SuggestionCategory,
    pub state: SuggestionState,
    /// The text span this suggestion targets.
    pub flagged: String,
    /// Replacement candidates, best first.
    pub replacements: Vec<String>,
    /// Category-specific explanation, when the analyzer gave one.
    pub detail: Option<String>,
}

fn card(
    category: SuggestionCategory,
    flagged: &str,
    replacements: Vec<String>,
    detail: Option<String>,
) -> SuggestionCard {
    SuggestionCard {
        category,
        state: SuggestionState::Proposed,
        flagged: flagged.to_string(),
        replacements,
        detail: detail.filter(|d| !d.is_empty()),
    }
}

/// Project the session's live records into render order.
pub fn project(session: &CheckSession) -> Vec<SuggestionCard> {
    let mut cards = Vec::with_capacity(session.suggestion_count());

    for e in &session.spelling {
        cards.push(card(
            SuggestionCategory::Spelling,
            &e.wrong,
            e.suggestions.clone(),
            None,
        ));
    }

    if let Some(mixing) = &session.style_mixing {
        for c in &mixing.corrections {
            cards.push(card(
                SuggestionCategory::StyleMixing,
                &c.current,
                vec![c.suggestion.clone()],
                Some(c.kind.clone()),
            ));
        }
    }

    for t in &session.tone {
        cards.push(card(
            SuggestionCategory::Tone,
            &t.current,
            t.suggestions.clone(),
            Some(t.reason.clone()),
        ));
    }

    for p in &session.punctuation {
        cards.push(card(
            SuggestionCategory::Punctuation,
            &p.current_sentence,
            vec![p.corrected_sentence.clone()],
            Some(p.explanation.clone()),
        ));
    }

    for e in &session.euphony {
        cards.push(card(
            SuggestionCategory::Euphony,
            &e.current,
            e.suggestions.clone(),
            Some(e.reason.clone()),
        ));
    }

    cards
}

/// Re-highlight the document from the session's live records.
///
/// Clears all existing highlighting first, then runs one sequential pass per
/// highlighted category in fixed order: spelling, tone, style mixing,
/// euphony. Punctuation is card-only. Every surface call is best-effort.
pub async fn apply_highlights(session: &CheckSession, surface: &dyn DocumentSurface) {
    if let Err(e) = surface.clear_highlights().await {
        warn!(
            subsystem = "pipeline",
            op = "highlight",
            error = %e,
            "Clearing highlights failed"
        );
    }

    let spelling = session.spelling.iter().map(|e| e.wrong.as_str());
    highlight_spans(surface, SuggestionCategory::Spelling, spelling).await;

    let tone = session.tone.iter().map(|t| t.current.as_str());
    highlight_spans(surface, SuggestionCategory::Tone, tone).await;

    if let Some(mixing) = &session.style_mixing {
        let style = mixing.corrections.iter().map(|c| c.current.as_str());
        highlight_spans(surface, SuggestionCategory::StyleMixing, style).await;
    }

    let euphony = session.euphony.iter().map(|e| e.current.as_str());
    highlight_spans(surface, SuggestionCategory::Euphony, euphony).await;
}

async fn highlight_spans(
    surface: &dyn DocumentSurface,
    category: SuggestionCategory,
    spans: impl Iterator<Item = &str>,
) {
    let Some(color) = category.highlight_color() else {
        return;
    };

    for span in spans {
        let ranges = match surface.search_literal(span, true).await {
            Ok(ranges) => ranges,
            Err(e) => {
                warn!(
                    subsystem = "pipeline",
                    op = "highlight",
                    category = %category,
                    error = %e,
                    "Search failed; skipping span"
                );
                continue;
            }
        };
        debug!(
            subsystem = "pipeline",
            op = "highlight",
            category = %category,
            match_count = ranges.len(),
            "Highlighting span"
        );
        for range in ranges {
            if let Err(e) = surface.set_highlight(range, Some(color)).await {
                warn!(
                    subsystem = "pipeline",
                    op = "highlight",
                    category = %category,
                    error = %e,
                    "Highlight failed; continuing"
                );
            }
        }
    }
}
