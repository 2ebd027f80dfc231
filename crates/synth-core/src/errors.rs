//! Cross-cutting error types for Idea Synthesizer.
//!
//! Domain-specific errors (e.g., `StoreError`, `GenerationError`) are defined in
//! their respective crates. They converge in `synth-lab` and `synth-cli`.

use thiserror::Error;

/// Errors that can be raised by any synth crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
