//! Turn candidate text into validated, decorated research ideas.

use synth_core::entities::{IdeaBatch, ResearchIdea};
use synth_core::ids::{PREFIX_IDEA, new_id};
use synth_schema::{IDEA_BATCH, SchemaError, SchemaRegistry};

use crate::error::GenerationError;

/// Parse and validate `text` as an idea batch, then give every idea a fresh id
/// and the shared `timestamp`. Order is preserved.
///
/// # Errors
///
/// - [`GenerationError::Parse`] if `text` is not JSON.
/// - [`GenerationError::InvalidResponse`] if the JSON does not match the batch schema.
/// - [`GenerationError::Empty`] if the batch holds no ideas.
pub fn decode_ideas(
    schemas: &SchemaRegistry,
    text: &str,
    timestamp: i64,
) -> Result<Vec<ResearchIdea>, GenerationError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| GenerationError::Parse(e.to_string()))?;

    let batch: IdeaBatch = schemas
        .validate_as(IDEA_BATCH, value)
        .map_err(|e| match e {
            SchemaError::ValidationFailed { errors } => {
                GenerationError::InvalidResponse(errors.join("; "))
            }
            other => GenerationError::InvalidResponse(other.to_string()),
        })?;

    if batch.research_ideas.is_empty() {
        return Err(GenerationError::Empty);
    }

    Ok(batch
        .research_ideas
        .into_iter()
        .map(|draft| ResearchIdea::from_draft(draft, new_id(PREFIX_IDEA), timestamp))
        .collect())
}
