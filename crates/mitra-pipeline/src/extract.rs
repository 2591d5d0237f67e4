//! Locating and decoding the JSON analysis object inside a free-text reply.
//!
//! The analyzer is asked for exactly one JSON object but replies in free
//! text; prose before and after the object is normal. The scanner here is
//! brace-depth-aware and JSON-string-aware, so example braces inside a
//! `reason` string do not end the object early. When the reply is
//! unbalanced, the scan falls back to the greedy first-`{`-to-last-`}` span.
//!
//! Decode failures are [`Error::MalformedResponse`] and must never abort the
//! overall check; the caller degrades that analysis to zero suggestions.

use tracing::debug;

use mitra_core::{ContentAnalysis, Error, LinguisticReport, Result};

/// Locate the JSON object span within `reply`.
///
/// Scans from the first `{`, tracking brace depth and string/escape state,
/// and returns the slice up to the matching close brace. Falls back to the
/// greedy span when no balanced object exists.
pub fn extract_json_object(reply: &str) -> Option<&str> {
    let start = reply.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (i, c) in reply[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&reply[start..start + i + 1]);
                }
            }
            _ => {}
        }
    }

    // Unbalanced braces: greedy span, matching the legacy extraction.
    let end = reply.rfind('}')?;
    if end > start {
        debug!("Falling back to greedy JSON span");
        Some(&reply[start..=end])
    } else {
        None
    }
}

/// Decode and normalize the linguistic analysis reply.
pub fn parse_linguistic(reply: &str) -> Result<LinguisticReport> {
    let json = extract_json_object(reply)
        .ok_or_else(|| Error::MalformedResponse("no JSON object in reply".to_string()))?;
    let mut report: LinguisticReport =
        serde_json::from_str(json).map_err(|e| Error::MalformedResponse(e.to_string()))?;
    normalize(&mut report);
    Ok(report)
}

/// Decode the content analysis reply.
pub fn parse_content(reply: &str) -> Result<ContentAnalysis> {
    let json = extract_json_object(reply)
        .ok_or_else(|| Error::MalformedResponse("no JSON object in reply".to_string()))?;
    serde_json::from_str(json).map_err(|e| Error::MalformedResponse(e.to_string()))
}

/// Drop records that cannot be located or applied, and enforce the
/// `detected: false` invariant on style mixing.
fn normalize(report: &mut LinguisticReport) {
    report.spelling_errors.retain(|e| !e.wrong.is_empty());
    for error in &mut report.spelling_errors {
        error.suggestions.retain(|s| !s.is_empty());
    }
    report.tone_improvements.retain(|t| !t.current.is_empty());
    report.euphony_improvements.retain(|e| !e.current.is_empty());
    report
        .punctuation_issues
        .retain(|p| !p.current_sentence.is_empty());

    // detected: false means the corrections are meaningless whatever the
    // payload says.
    if report
        .language_style_mixing
        .as_ref()
        .is_some_and(|m| !m.detected)
    {
        report.language_style_mixing = None;
    }
}
