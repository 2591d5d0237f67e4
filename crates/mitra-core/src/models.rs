//! Suggestion record types decoded from analyzer replies.
//!
//! Field names on the wire are camelCase, matching the JSON shape the
//! instruction templates ask the model to produce. Every collection-valued
//! field defaults to empty when absent; the analyzer reply is untrusted and
//! all validation is client-side.

use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Suggestion categories
// ---------------------------------------------------------------------------

/// The categories a suggestion record can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionCategory {
    Spelling,
    Tone,
    StyleMixing,
    Punctuation,
    Euphony,
}

impl SuggestionCategory {
    /// Fixed highlight color for this category, or `None` for categories
    /// that are not highlighted in the document.
    ///
    /// Punctuation issues target whole sentences and are presented in the
    /// card list only.
    pub fn highlight_color(&self) -> Option<&'static str> {
        match self {
            Self::Spelling => Some("#fee2e2"),    // light red
            Self::Tone => Some("#dbeafe"),        // light blue
            Self::StyleMixing => Some("#e9d5ff"), // light purple
            Self::Punctuation => None,
            Self::Euphony => Some("#fce7f3"), // light pink
        }
    }
}

impl std::fmt::Display for SuggestionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spelling => write!(f, "spelling"),
            Self::Tone => write!(f, "tone"),
            Self::StyleMixing => write!(f, "style_mixing"),
            Self::Punctuation => write!(f, "punctuation"),
            Self::Euphony => write!(f, "euphony"),
        }
    }
}

/// Lifecycle of a suggestion within one analysis cycle.
///
/// `Proposed` on arrival from the response extractor, `Accepted` when the
/// user picks a replacement, `Retired` once the record has been pruned.
/// Retired records are never reintroduced until a fresh check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionState {
    Proposed,
    Accepted,
    Retired,
}

// ---------------------------------------------------------------------------
// Record types
// ---------------------------------------------------------------------------

/// A misspelled span with ordered replacement candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellingError {
    /// The misspelled text as it appears in the document.
    pub wrong: String,
    /// Replacement candidates, best first.
    #[serde(default)]
    pub suggestions: Vec<String>,
    /// Zero-based char offset into the source text. `None` until
    /// reconciliation resolves it; stays `None` when the span cannot be
    /// located (the "not found" sentinel, ordered after all real offsets).
    #[serde(default, deserialize_with = "de_position")]
    pub position: Option<usize>,
}

/// A word-choice suggestion driven by the detected tone of the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneImprovement {
    pub current: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub reason: String,
}

/// One register correction inside a style-mixing report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleCorrection {
    pub current: String,
    pub suggestion: String,
    /// Direction of the register change, e.g. "সাধু→চলিত".
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Report on mixing of the sadhu and cholito registers.
///
/// When `detected` is false the whole report is meaningless and callers
/// must treat `corrections` as empty regardless of payload contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageStyleMixing {
    #[serde(default)]
    pub detected: bool,
    #[serde(default)]
    pub recommended_style: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub corrections: Vec<StyleCorrection>,
}

/// A punctuation problem. Unlike the other kinds, replacement targets the
/// whole sentence rather than a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PunctuationIssue {
    #[serde(default)]
    pub issue: String,
    pub current_sentence: String,
    pub corrected_sentence: String,
    #[serde(default)]
    pub explanation: String,
}

/// A euphony (শ্রুতিমধুরতা) improvement suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EuphonyImprovement {
    pub current: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub reason: String,
}

/// Genre/content analysis of the whole document. Singleton per run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalysis {
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub missing_elements: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// The full linguistic analysis object embedded in the first analyzer reply.
///
/// Every field defaults to its empty value so a partial reply still decodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinguisticReport {
    pub spelling_errors: Vec<SpellingError>,
    pub tone_improvements: Vec<ToneImprovement>,
    pub language_style_mixing: Option<LanguageStyleMixing>,
    pub punctuation_issues: Vec<PunctuationIssue>,
    pub euphony_improvements: Vec<EuphonyImprovement>,
}

// ---------------------------------------------------------------------------
// Derived statistics
// ---------------------------------------------------------------------------

/// Word/error statistics recomputed from the in-memory text snapshot.
/// Derived, never persisted, and an approximation after mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_words: usize,
    pub error_count: usize,
    /// Percentage 0-100.
    pub accuracy: u8,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            total_words: 0,
            error_count: 0,
            accuracy: 100,
        }
    }
}

// ---------------------------------------------------------------------------
// Defensive deserialization
// ---------------------------------------------------------------------------

/// Accept absent, null, negative, or non-integer positions as `None`.
///
/// The model is asked for a zero-based index but is free text underneath;
/// a junk value must not reject the whole report.
fn de_position<'de, D>(deserializer: D) -> std::result::Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.as_i64())
        .and_then(|n| usize::try_from(n).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // -----------------------------------------------------------------------
    // Wire format tests
    // -----------------------------------------------------------------------

    #[test]
    fn linguistic_report_decodes_camel_case_keys() {
        let raw = json!({
            "spellingErrors": [{"wrong": "শকাল", "suggestions": ["সকাল"], "position": 4}],
            "toneImprovements": [{"current": "খারাপ", "suggestions": ["মন্দ"], "reason": "ভাব"}],
            "languageStyleMixing": {"detected": true, "recommendedStyle": "চলিত রীতি"},
            "punctuationIssues": [],
            "euphonyImprovements": []
        });

        let report: LinguisticReport = serde_json::from_value(raw).unwrap();
        assert_eq!(report.spelling_errors.len(), 1);
        assert_eq!(report.spelling_errors[0].position, Some(4));
        assert_eq!(report.tone_improvements[0].reason, "ভাব");
        let mixing = report.language_style_mixing.unwrap();
        assert!(mixing.detected);
        assert_eq!(mixing.recommended_style.as_deref(), Some("চলিত রীতি"));
    }

    #[test]
    fn linguistic_report_absent_keys_default_empty() {
        let report: LinguisticReport = serde_json::from_str("{}").unwrap();
        assert!(report.spelling_errors.is_empty());
        assert!(report.tone_improvements.is_empty());
        assert!(report.language_style_mixing.is_none());
        assert!(report.punctuation_issues.is_empty());
        assert!(report.euphony_improvements.is_empty());
    }

    #[test]
    fn style_correction_type_key_maps_to_kind() {
        let raw = json!({"current": "করিতেছি", "suggestion": "করছি", "type": "সাধু→চলিত"});
        let correction: StyleCorrection = serde_json::from_value(raw).unwrap();
        assert_eq!(correction.kind, "সাধু→চলিত");

        let back = serde_json::to_value(&correction).unwrap();
        assert_eq!(back["type"], "সাধু→চলিত");
    }

    #[test]
    fn punctuation_issue_decodes_sentence_fields() {
        let raw = json!({
            "issue": "দাঁড়ি নেই",
            "currentSentence": "আমি যাব",
            "correctedSentence": "আমি যাব।",
            "explanation": "বাক্য শেষে দাঁড়ি প্রয়োজন"
        });
        let issue: PunctuationIssue = serde_json::from_value(raw).unwrap();
        assert_eq!(issue.current_sentence, "আমি যাব");
        assert_eq!(issue.corrected_sentence, "আমি যাব।");
    }

    // -----------------------------------------------------------------------
    // Defensive position handling
    // -----------------------------------------------------------------------

    #[test]
    fn position_absent_is_none() {
        let e: SpellingError =
            serde_json::from_value(json!({"wrong": "ভুল", "suggestions": ["ঠিক"]})).unwrap();
        assert_eq!(e.position, None);
    }

    #[test]
    fn position_negative_is_none() {
        let e: SpellingError =
            serde_json::from_value(json!({"wrong": "ভুল", "suggestions": [], "position": -1}))
                .unwrap();
        assert_eq!(e.position, None);
    }

    #[test]
    fn position_non_integer_is_none() {
        let e: SpellingError =
            serde_json::from_value(json!({"wrong": "ভুল", "suggestions": [], "position": "চার"}))
                .unwrap();
        assert_eq!(e.position, None);
    }

    #[test]
    fn position_valid_is_some() {
        let e: SpellingError =
            serde_json::from_value(json!({"wrong": "ভুল", "suggestions": [], "position": 7}))
                .unwrap();
        assert_eq!(e.position, Some(7));
    }

    // -----------------------------------------------------------------------
    // Category and state tests
    // -----------------------------------------------------------------------

    #[test]
    fn highlight_colors_are_fixed_per_category() {
        assert_eq!(
            SuggestionCategory::Spelling.highlight_color(),
            Some("#fee2e2")
        );
        assert_eq!(SuggestionCategory::Tone.highlight_color(), Some("#dbeafe"));
        assert_eq!(
            SuggestionCategory::StyleMixing.highlight_color(),
            Some("#e9d5ff")
        );
        assert_eq!(SuggestionCategory::Punctuation.highlight_color(), None);
        assert_eq!(
            SuggestionCategory::Euphony.highlight_color(),
            Some("#fce7f3")
        );
    }

    #[test]
    fn category_display() {
        assert_eq!(SuggestionCategory::Spelling.to_string(), "spelling");
        assert_eq!(SuggestionCategory::StyleMixing.to_string(), "style_mixing");
    }

    #[test]
    fn suggestion_state_serialization() {
        let json = serde_json::to_string(&SuggestionState::Proposed).unwrap();
        assert_eq!(json, "\"proposed\"");
    }

    // -----------------------------------------------------------------------
    // Stats tests
    // -----------------------------------------------------------------------

    #[test]
    fn stats_default_is_clean_slate() {
        let stats = Stats::default();
        assert_eq!(stats.total_words, 0);
        assert_eq!(stats.error_count, 0);
        assert_eq!(stats.accuracy, 100);
    }

    #[test]
    fn stats_serializes_camel_case() {
        let stats = Stats {
            total_words: 4,
            error_count: 1,
            accuracy: 75,
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["totalWords"], 4);
        assert_eq!(json["errorCount"], 1);
        assert_eq!(json["accuracy"], 75);
    }
}
