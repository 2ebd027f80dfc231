//! Generation error types.

use thiserror::Error;

/// Errors that can occur during one generation call.
///
/// Every variant aborts the whole call: no partial results are returned.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No API key is configured.
    #[error("generation client is not configured: set SYNTH_GEMINI__API_KEY or GEMINI_API_KEY")]
    NotConfigured,

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Summary of Gemini's error envelope, or the raw body.
        message: String,
    },

    /// The response envelope carried no candidate text.
    #[error("response contained no generated content")]
    MissingContent,

    /// The candidate text was not valid JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// The candidate JSON did not match the idea batch schema.
    #[error("invalid upstream response: {0}")]
    InvalidResponse(String),

    /// The service returned an empty idea list.
    #[error("service returned no ideas")]
    Empty,
}
