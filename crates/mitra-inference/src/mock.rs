//! Mock suggestion engine for deterministic testing.
//!
//! Replies are queued in order or fall back to a default; every prompt is
//! captured in a call log for assertion. No randomness.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mitra_inference::mock::MockSuggestionEngine;
//!
//! let engine = MockSuggestionEngine::new()
//!     .with_queued_reply(r#"{"spellingErrors": []}"#)
//!     .with_queued_reply(r#"{"contentType": "চিঠি"}"#);
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use mitra_core::{Error, Result, SuggestionEngine};

/// Deterministic in-memory [`SuggestionEngine`].
#[derive(Clone)]
pub struct MockSuggestionEngine {
    queued: Arc<Mutex<VecDeque<String>>>,
    default_reply: Arc<Mutex<String>>,
    failure: Arc<Mutex<Option<String>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockSuggestionEngine {
    pub fn new() -> Self {
        Self {
            queued: Arc::new(Mutex::new(VecDeque::new())),
            default_reply: Arc::new(Mutex::new("{}".to_string())),
            failure: Arc::new(Mutex::new(None)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a reply; queued replies are consumed in FIFO order before the
    /// default reply is used.
    pub fn with_queued_reply(self, reply: impl Into<String>) -> Self {
        self.queued.lock().unwrap().push_back(reply.into());
        self
    }

    /// Set the reply returned once the queue is empty.
    pub fn with_default_reply(self, reply: impl Into<String>) -> Self {
        *self.default_reply.lock().unwrap() = reply.into();
        self
    }

    /// Make every subsequent call fail with `AnalyzerUnavailable(message)`.
    pub fn failing_with(self, message: impl Into<String>) -> Self {
        *self.failure.lock().unwrap() = Some(message.into());
        self
    }

    /// All prompts received so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Number of generate calls received.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl Default for MockSuggestionEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SuggestionEngine for MockSuggestionEngine {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(Error::AnalyzerUnavailable(message));
        }

        if let Some(reply) = self.queued.lock().unwrap().pop_front() {
            return Ok(reply);
        }
        Ok(self.default_reply.lock().unwrap().clone())
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}
