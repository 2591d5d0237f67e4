//! Error types for BhashaMitra.

use thiserror::Error;

/// Result type alias using BhashaMitra's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for BhashaMitra operations.
#[derive(Error, Debug)]
pub enum Error {
    /// No API credential configured; a check cannot be initiated
    #[error("Missing credential: {0}")]
    Credential(String),

    /// The document contains no text to analyze
    #[error("Empty document: nothing to analyze")]
    EmptyDocument,

    /// The analyzer endpoint could not be reached or returned a failure
    #[error("Analyzer unavailable: {0}")]
    AnalyzerUnavailable(String),

    /// The configured credential was rejected by the analyzer
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The analyzer reply contained no decodable JSON analysis object
    #[error("Malformed analysis response: {0}")]
    MalformedResponse(String),

    /// A Document Surface call failed (best-effort, callers log and continue)
    #[error("Document surface error: {0}")]
    Surface(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}
