//! Generative-model provider configuration.

use serde::{Deserialize, Serialize};

fn default_model() -> String {
    String::from("gemini-3-flash-preview")
}

/// Base URL of the Generative Language REST API.
fn default_endpoint() -> String {
    String::from("https://generativelanguage.googleapis.com/v1beta")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// API key sent as `x-goog-api-key`. Falls back to `GEMINI_API_KEY`.
    #[serde(default)]
    pub api_key: String,

    /// Model name used in `models/{model}:generateContent`.
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            endpoint: default_endpoint(),
        }
    }
}

impl GeminiConfig {
    /// Check if an API key is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Full `generateContent` URL for the configured model.
    #[must_use]
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}
