//! LLM Client — the single point of entry for all generative-text calls.
//!
//! ARCHITECTURAL RULE: No other module may call the Google AI API directly.
//! All LLM interactions MUST go through the `TextGenerator` trait.
//!
//! One request per call, fixed 30s timeout, no retries. A timeout surfaces as `LlmError::Http`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-pro";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Configuration error: {0}")]
    ConfigurationMissing(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid response from AI service (status {status}): {message}")]
    InvalidResponse { status: u16, message: String },

    #[error("No valid response from AI")]
    NoValidResponse,

    #[error("Failed to decode AI response: {0}")]
    Decoding(String),
}

/// Sends one prompt and returns the model's raw text output.
///
/// Implemented by `GeminiClient`; tests substitute canned responses.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<String, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn single_prompt(text: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text }],
            }],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate. Only that path is consumed.
    /// Empty text counts as missing.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .as_deref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_deref()?
            .first()?
            .text
            .as_deref()
            .filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct GoogleError {
    error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// Google AI `generateContent` client.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
}

impl GeminiClient {
    /// A missing or blank key is accepted here and reported on each call instead.
    pub fn new(api_key: Option<String>, base_url: &str, model: &str) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            endpoint: format!(
                "{}/models/{}:generateContent",
                base_url.trim_end_matches('/'),
                model
            ),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            LlmError::ConfigurationMissing("Google AI API key not configured".to_string())
        })?;

        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, api_key)
            .json(&GenerateContentRequest::single_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<GoogleError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::InvalidResponse {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| LlmError::Decoding(e.to_string()))?;
        let text = parsed.text().ok_or(LlmError::NoValidResponse)?;

        debug!(
            "LLM call succeeded: prompt_chars={}, response_chars={}",
            prompt.len(),
            text.len()
        );

        Ok(text.to_string())
    }
}
