//! Word and accuracy statistics derived from the text snapshot.

use mitra_core::Stats;

/// Recompute statistics from the snapshot and the current spelling error
/// count.
///
/// Words are maximal whitespace-separated runs. Accuracy is the rounded
/// percentage of words not flagged as misspelled, clamped at zero when the
/// analyzer flags more errors than there are words. Empty text is a clean
/// slate: zero words, 100% accuracy.
pub fn recompute(text: &str, error_count: usize) -> Stats {
    let total_words = text.split_whitespace().count();
    if total_words == 0 {
        return Stats::default();
    }

    let correct = total_words.saturating_sub(error_count);
    let accuracy = ((correct as f64 / total_words as f64) * 100.0).round() as u8;

    Stats {
        total_words,
        error_count,
        accuracy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_whitespace_separated_words() {
        let stats = recompute("আমি শকাল এ যাব", 1);
        assert_eq!(stats.total_words, 4);
        assert_eq!(stats.error_count, 1);
        assert_eq!(stats.accuracy, 75);
    }

    #[test]
    fn no_errors_is_full_accuracy() {
        let stats = recompute("আমি সকালে যাব", 0);
        assert_eq!(stats.total_words, 3);
        assert_eq!(stats.accuracy, 100);
    }

    #[test]
    fn empty_text_is_clean_slate() {
        assert_eq!(recompute("", 0), Stats::default());
        assert_eq!(recompute("   \n\t", 3), Stats::default());
    }

    #[test]
    fn accuracy_rounds_to_nearest_percent() {
        // 2 of 3 correct = 66.67 -> 67
        assert_eq!(recompute("এক দুই তিন", 1).accuracy, 67);
        // 1 of 3 correct = 33.33 -> 33
        assert_eq!(recompute("এক দুই তিন", 2).accuracy, 33);
    }

    #[test]
    fn more_errors_than_words_clamps_to_zero() {
        let stats = recompute("এক দুই", 5);
        assert_eq!(stats.accuracy, 0);
        assert_eq!(stats.error_count, 5);
    }

    #[test]
    fn mixed_whitespace_runs_collapse() {
        let stats = recompute("এক  দুই\nতিন\t চার", 0);
        assert_eq!(stats.total_words, 4);
    }
}
