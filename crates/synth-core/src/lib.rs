//! # synth-core
//!
//! Core types, ID generation, and error types for Idea Synthesizer.
//!
//! This crate provides the foundational types shared across all synth crates:
//! - Entity structs for the domain objects (ideas, bookmarks, resources, profile, frameworks)
//! - Enums for creativity levels, resource kinds, and views
//! - ID prefix constants and generation
//! - The built-in catalog of fields and generation limits
//! - Cross-cutting error types

pub mod catalog;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
