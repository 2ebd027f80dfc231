//! # synth-gemini
//!
//! Research idea generation for Idea Synthesizer.
//!
//! One call to [`IdeaGenerator::generate`] sends one `generateContent` request,
//! constrained to a JSON response schema, and returns the decoded ideas with
//! fresh ids and a shared timestamp. Any failure aborts the whole call.

pub mod decode;
pub mod prompt;
pub mod wire;

mod error;
mod http;

pub use error::GenerationError;

use async_trait::async_trait;
use synth_config::GeminiConfig;
use synth_core::entities::ResearchIdea;
use synth_core::enums::Creativity;
use synth_schema::SchemaRegistry;

use crate::http::check_response;
use crate::wire::{GenerateContentRequest, GenerateContentResponse};

// ── Types ──────────────────────────────────────────────────────────

/// Inputs of one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationParams {
    /// Selected academic fields, in selection order.
    pub fields: Vec<String>,
    /// Exact number of ideas to request.
    pub count: u32,
    pub creativity: Creativity,
    /// Names of the frameworks applied as lenses. May be empty.
    pub active_frameworks: Vec<String>,
}

/// Anything that can turn [`GenerationParams`] into research ideas.
#[async_trait]
pub trait IdeaGenerator: Send + Sync {
    /// Generate ideas for `params`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] on any transport, service, or decoding
    /// failure. No partial results are returned.
    async fn generate(&self, params: &GenerationParams)
    -> Result<Vec<ResearchIdea>, GenerationError>;
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
    schemas: SchemaRegistry,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Build a client from configuration.
    ///
    /// No request timeout is set: a stalled call keeps the caller waiting.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::NotConfigured`] if no API key is set, or
    /// [`GenerationError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &GeminiConfig) -> Result<Self, GenerationError> {
        if !config.is_configured() {
            return Err(GenerationError::NotConfigured);
        }
        let http = reqwest::Client::builder()
            .user_agent("synth/0.1")
            .build()?;
        Ok(Self {
            http,
            url: config.generate_content_url(),
            api_key: config.api_key.trim().to_string(),
            schemas: SchemaRegistry::new(),
        })
    }

    /// The full `generateContent` URL this client posts to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Decode a successful HTTP response into research ideas.
    async fn decode_response(
        &self,
        resp: reqwest::Response,
    ) -> Result<Vec<ResearchIdea>, GenerationError> {
        let envelope: GenerateContentResponse = resp
            .json()
            .await
            .map_err(|e| GenerationError::Parse(e.to_string()))?;
        let text = envelope.text().ok_or(GenerationError::MissingContent)?;
        let timestamp = chrono::Utc::now().timestamp_millis();
        decode::decode_ideas(&self.schemas, &text, timestamp)
    }
}

#[async_trait]
impl IdeaGenerator for GeminiClient {
    async fn generate(
        &self,
        params: &GenerationParams,
    ) -> Result<Vec<ResearchIdea>, GenerationError> {
        let body = GenerateContentRequest::from_params(params);
        tracing::debug!(
            fields = params.fields.len(),
            count = params.count,
            creativity = %params.creativity,
            frameworks = params.active_frameworks.len(),
            "sending generation request"
        );

        let resp = self
            .http
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let ideas = self.decode_response(resp).await?;

        tracing::info!(ideas = ideas.len(), "generation complete");
        Ok(ideas)
    }
}
