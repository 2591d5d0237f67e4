//! Structured logging field name constants for BhashaMitra.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log queries work across every subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Lifecycle events, operation completions |
//! | DEBUG | Decision points, intermediate values, config choices |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "inference", "pipeline", "surface"
pub const SUBSYSTEM: &str = "subsystem";

/// Logical operation name.
/// Examples: "generate", "run_check", "accept", "highlight"
pub const OPERATION: &str = "op";

// ─── Inference fields ──────────────────────────────────────────────────────

/// Model slug used for the analyzer call.
pub const MODEL: &str = "model";

/// Byte length of a prompt.
pub const PROMPT_LEN: &str = "prompt_len";

/// Byte length of a model reply.
pub const RESPONSE_LEN: &str = "response_len";

// ─── Pipeline fields ───────────────────────────────────────────────────────

/// Suggestion category being processed.
pub const CATEGORY: &str = "category";

/// Number of ranges matched by a literal search.
pub const MATCH_COUNT: &str = "match_count";

/// Number of suggestion records in a collection.
pub const SUGGESTION_COUNT: &str = "suggestion_count";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";

/// Slow operation threshold exceeded.
pub const SLOW: &str = "slow";
