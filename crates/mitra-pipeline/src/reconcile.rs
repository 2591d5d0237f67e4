//! Position reconciliation for spelling corrections.
//!
//! The analyzer is asked for a zero-based index per spelling error but often
//! omits or garbles it. Reconciliation fills the gap by first-occurrence
//! search in the source snapshot, then orders the whole set for
//! reading-order presentation.

use mitra_core::SpellingError;

/// Resolve missing positions and sort the set ascending.
///
/// Entries whose flagged text cannot be found keep `position == None`, the
/// sentinel that orders after every real offset. Explicit positions supplied
/// by the analyzer are preserved as-is. The sort is stable.
pub fn reconcile_positions(errors: &mut [SpellingError], source: &str) {
    for error in errors.iter_mut() {
        if error.position.is_none() {
            error.position = first_char_index(source, &error.wrong);
        }
    }
    errors.sort_by_key(|e| e.position.unwrap_or(usize::MAX));
}

/// Zero-based char index of the first literal occurrence of `needle`.
pub fn first_char_index(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    haystack
        .find(needle)
        .map(|byte_idx| haystack[..byte_idx].chars().count())
}
