//! Controller error types.

use synth_gemini::GenerationError;
use synth_store::StoreError;
use thiserror::Error;

/// Errors surfaced by [`crate::Laboratory`] operations.
///
/// The `Display` text of the two generation variants is the user-facing
/// message recorded in the laboratory's error slot.
#[derive(Debug, Error)]
pub enum LabError {
    /// Fewer than two fields were selected. No request is made.
    #[error("Please select at least two fields to synthesize.")]
    NotEnoughFields,

    /// Requested idea count is outside the accepted range.
    #[error("idea count must be between {min} and {max}, got {count}")]
    InvalidCount { count: u32, min: u32, max: u32 },

    /// A generation call is already running.
    #[error("a generation is already in progress")]
    GenerationInFlight,

    /// The generation call failed. Every cause shares this message.
    #[error("Failed to generate research ideas.")]
    GenerationFailed(#[source] GenerationError),

    /// Input rejected before any state changed.
    #[error("{0}")]
    Validation(String),

    /// No entity with this id exists.
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// Persisting a mutation failed.
    #[error("failed to persist state: {0}")]
    Store(#[from] StoreError),
}

impl LabError {
    pub(crate) fn not_found(entity_type: &str, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}
