//! Default configuration values for BhashaMitra.
//!
//! Environment variables override these at construction time; see the
//! `from_env` constructors in `mitra-inference`.

/// Default Gemini API base URL.
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default generation model.
pub const GEN_MODEL: &str = "gemini-2.5-flash";

/// Timeout for generation requests (seconds).
///
/// A hung analyzer call would otherwise leave the check pending forever;
/// on expiry the call surfaces as `Error::AnalyzerUnavailable`.
pub const GEN_TIMEOUT_SECS: u64 = 120;

/// Threshold above which a generation call is logged as slow (milliseconds).
pub const SLOW_GEN_MS: u64 = 30_000;

/// Env var holding the API credential.
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";

/// Env var overriding the model slug.
pub const ENV_MODEL: &str = "GEMINI_MODEL";

/// Env var overriding the API base URL.
pub const ENV_BASE_URL: &str = "GEMINI_BASE_URL";

/// Env var overriding the generation timeout (seconds).
pub const ENV_GEN_TIMEOUT_SECS: &str = "MITRA_GEN_TIMEOUT_SECS";
