//! Gemini `generateContent` backend implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use mitra_core::{defaults, Error, Result, SuggestionEngine};

/// Default Gemini API base URL.
pub const DEFAULT_BASE_URL: &str = defaults::GEMINI_BASE_URL;

/// Default generation model.
pub const DEFAULT_GEN_MODEL: &str = defaults::GEN_MODEL;

/// Timeout for generation requests (seconds).
pub const GEN_TIMEOUT_SECS: u64 = defaults::GEN_TIMEOUT_SECS;

/// Gemini suggestion-engine backend.
///
/// Holds the credential explicitly; nothing is read from ambient state at
/// request time. One synchronous (non-streamed) reply per prompt.
pub struct GeminiBackend {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    timeout_secs: u64,
}

impl GeminiBackend {
    /// Create a backend with explicit configuration.
    pub fn with_config(base_url: String, api_key: String, model: String) -> Self {
        let timeout_secs = std::env::var(defaults::ENV_GEN_TIMEOUT_SECS)
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(GEN_TIMEOUT_SECS);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        info!(
            "Initializing Gemini backend: url={}, model={}",
            base_url, model
        );

        Self {
            client,
            base_url,
            api_key,
            model,
            timeout_secs,
        }
    }

    /// Create from environment variables.
    ///
    /// Fails with [`Error::Credential`] when `GEMINI_API_KEY` is missing or
    /// empty; a check cannot be initiated without a credential.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(defaults::ENV_API_KEY)
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::Credential(format!("{} not set", defaults::ENV_API_KEY)))?;
        let base_url =
            std::env::var(defaults::ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model =
            std::env::var(defaults::ENV_MODEL).unwrap_or_else(|_| DEFAULT_GEN_MODEL.to_string());

        Ok(Self::with_config(base_url, api_key, model))
    }

    /// Set the generation model to use.
    pub fn set_model(&mut self, model: String) {
        info!("Switching generation model from {} to {}", self.model, model);
        self.model = model;
    }
}

/// Request payload for the Gemini `generateContent` endpoint.
#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Default)]
struct Part {
    #[serde(default)]
    text: String,
}

/// Response from the Gemini `generateContent` endpoint. Only the reply text
/// path is decoded; everything else in the payload is ignored.
#[derive(Deserialize, Default)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Default)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Deserialize, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[async_trait]
impl SuggestionEngine for GeminiBackend {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let start = Instant::now();

        debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            "Starting generation"
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .timeout(Duration::from_secs(self.timeout_secs))
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::AnalyzerUnavailable(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if status == reqwest::StatusCode::UNAUTHORIZED
                || status == reqwest::StatusCode::FORBIDDEN
            {
                return Err(Error::Unauthorized(format!(
                    "Gemini rejected the credential ({})",
                    status
                )));
            }
            return Err(Error::AnalyzerUnavailable(format!(
                "Gemini returned {}: {}",
                status, body
            )));
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| Error::MalformedResponse(format!("Failed to parse response: {}", e)))?;

        let reply = result
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                Error::MalformedResponse("Reply contained no candidate text".to_string())
            })?;

        let elapsed = start.elapsed().as_millis() as u64;
        debug!(
            response_len = reply.len(),
            duration_ms = elapsed,
            "Generation complete"
        );
        if elapsed > defaults::SLOW_GEN_MS {
            warn!(
                duration_ms = elapsed,
                prompt_len = prompt.len(),
                slow = true,
                "Slow generation operation"
            );
        }
        Ok(reply)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn backend_for(server: &MockServer) -> GeminiBackend {
        GeminiBackend::with_config(
            server.uri(),
            "test-key".to_string(),
            "gemini-2.5-flash".to_string(),
        )
    }

    fn reply_body(text: &str) -> serde_json::Value {
        json!({
            "candidates": [
                {"content": {"parts": [{"text": text}]}}
            ]
        })
    }

    #[tokio::test]
    async fn generate_returns_first_candidate_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("উত্তর")))
            .mount(&server)
            .await;

        let backend = backend_for(&server);
        let reply = backend.generate("প্রম্পট").await.unwrap();
        assert_eq!(reply, "উত্তর");
    }

    #[tokio::test]
    async fn generate_sends_prompt_in_contents_parts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "contents": [{"parts": [{"text": "আমার প্রম্পট"}]}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("ঠিক আছে")))
            .expect(1)
            .mount(&server)
            .await;

        let backend = backend_for(&server);
        backend.generate("আমার প্রম্পট").await.unwrap();
    }

    #[tokio::test]
    async fn server_error_maps_to_analyzer_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let backend = backend_for(&server);
        match backend.generate("প্রম্পট").await {
            Err(Error::AnalyzerUnavailable(msg)) => assert!(msg.contains("500")),
            other => panic!("Expected AnalyzerUnavailable, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn unauthorized_status_maps_to_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let backend = backend_for(&server);
        assert!(matches!(
            backend.generate("প্রম্পট").await,
            Err(Error::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn forbidden_status_maps_to_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let backend = backend_for(&server);
        assert!(matches!(
            backend.generate("প্রম্পট").await,
            Err(Error::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn non_json_body_maps_to_malformed_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let backend = backend_for(&server);
        assert!(matches!(
            backend.generate("প্রম্পট").await,
            Err(Error::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn empty_candidates_maps_to_malformed_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
            .mount(&server)
            .await;

        let backend = backend_for(&server);
        assert!(matches!(
            backend.generate("প্রম্পট").await,
            Err(Error::MalformedResponse(_))
        ));
    }

    #[test]
    fn model_name_reports_configured_slug() {
        let backend = GeminiBackend::with_config(
            DEFAULT_BASE_URL.to_string(),
            "k".to_string(),
            "gemini-1.5-pro".to_string(),
        );
        assert_eq!(backend.model_name(), "gemini-1.5-pro");
    }
}
