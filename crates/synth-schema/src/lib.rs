//! # synth-schema
//!
//! JSON Schema generation, validation, and registry for Idea Synthesizer.
//!
//! This crate provides:
//! - `SchemaRegistry`: central store of the JSON Schemas of every persisted and
//!   exchanged record
//! - Validation of upstream generation responses before they are decoded
//! - Schema export for external tooling (`synth schema` command)
//!
//! Entity types are defined in `synth-core` with `#[derive(JsonSchema)]`.
//! This crate imports those types and provides the registry and validation layer.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::{IDEA_BATCH, SchemaRegistry};
