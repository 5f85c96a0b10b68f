//! Generation client — the single point of entry for remote text generation.
//!
//! All category prompts go through this module; no other module may call the
//! generation endpoint directly. The endpoint speaks the `contents`/`parts`
//! wire format and returns generated text at
//! `candidates[0].content.parts[0].text`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod retry;

use retry::RetryPolicy;

const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Sampling parameters sent with every generation request.
const TEMPERATURE: f32 = 0.7;
const TOP_K: u32 = 40;
const TOP_P: f32 = 0.95;
const MAX_OUTPUT_TOKENS: u32 = 2048;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Generator returned no text content")]
    EmptyContent,
}

impl GenError {
    /// 429, 5xx, and transport-level failures are worth retrying.
    /// Every other HTTP status and a malformed success body are terminal.
    pub fn is_retryable(&self) -> bool {
        match self {
            GenError::Http(e) => !e.is_decode(),
            GenError::Api { status, .. } => *status == 429 || *status >= 500,
            GenError::EmptyContent => false,
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: TEMPERATURE,
            top_k: TOP_K,
            top_p: TOP_P,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate's first part, if present.
    fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

/// Pluggable text-generation seam. The orchestrator only depends on this
/// trait, so tests can script responses without a network.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenError>;
}

/// HTTP client for the remote generation endpoint, with bounded
/// retry/backoff on transient failures.
#[derive(Clone)]
pub struct GenerationClient {
    client: Client,
    endpoint: String,
    api_key: String,
    policy: RetryPolicy,
}

impl std::fmt::Debug for GenerationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationClient")
            .field("endpoint", &self.endpoint)
            .field("policy", &self.policy)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl GenerationClient {
    pub fn new(endpoint: String, api_key: String, policy: RetryPolicy) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            endpoint,
            api_key,
            policy,
        }
    }

    async fn call_once(&self, body: &GenerateRequest<'_>) -> Result<String, GenError> {
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        parsed
            .text()
            .map(str::to_owned)
            .ok_or(GenError::EmptyContent)
    }
}

#[async_trait]
impl TextGenerator for GenerationClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenError> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig::default(),
        };

        let text =
            retry::with_backoff(&self.policy, GenError::is_retryable, |_| self.call_once(&body))
                .await?;

        debug!("generation succeeded: {} chars", text.len());
        Ok(text)
    }
}
