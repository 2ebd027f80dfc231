//! Status handling for `generateContent` responses.

use crate::error::GenerationError;
use crate::wire::ErrorResponse;

/// Pass a success response through; turn anything else into
/// [`GenerationError::Api`].
///
/// The message is taken from Gemini's error envelope when the body carries
/// one, otherwise from the raw body, otherwise from the status reason.
pub async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, GenerationError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = error_message(&body)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());
    tracing::debug!(status = status.as_u16(), %message, "generation request rejected");

    Err(GenerationError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Best description of a failure body, or `None` if it is blank.
fn error_message(body: &str) -> Option<String> {
    let summary = serde_json::from_str::<ErrorResponse>(body)
        .map(|envelope| envelope.error.summary())
        .unwrap_or_else(|_| body.trim().to_string());
    (!summary.is_empty()).then_some(summary)
}
