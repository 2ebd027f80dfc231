//! Prompt construction and the creativity policy.
//!
//! The creativity table is a fixed policy: callers choose a level, never the
//! raw sampling parameters.

use synth_core::enums::Creativity;

use crate::GenerationParams;

/// Sampling controls derived from a creativity level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationControls {
    pub temperature: f32,
    /// Token budget for internal reasoning. Zero disables extra reasoning.
    pub thinking_budget: u32,
}

/// Map a creativity level to its sampling controls.
#[must_use]
pub const fn controls_for(creativity: Creativity) -> GenerationControls {
    match creativity {
        Creativity::Conservative => GenerationControls {
            temperature: 0.3,
            thinking_budget: 0,
        },
        Creativity::Balanced => GenerationControls {
            temperature: 0.7,
            thinking_budget: 4_000,
        },
        Creativity::Radical => GenerationControls {
            temperature: 1.0,
            thinking_budget: 16_000,
        },
    }
}

const SYSTEM_PREAMBLE: &str = "\
You are a world-class Interdisciplinary Research Architect.
Your task is to generate novel, academic research ideas that integrate multiple disparate fields.

GUIDELINES:
1. Integration: Each idea MUST synthesize elements from ALL provided fields.
2. Focus: Ideas must be research-oriented (e.g., investigating a phenomenon), not just commercial product ideas.
3. Novelty: Avoid the obvious. Look for deep patterns, unexpected metaphors, and future-facing methodologies.
4. Plausibility: While radical, the ideas must be intellectually rigorous and academically defensible.
5. Tone: Intellectual, playful, curious, and exploratory.";

/// Clause naming the active frameworks, or `None` when none are active.
#[must_use]
pub fn frameworks_clause(active_frameworks: &[String]) -> Option<String> {
    if active_frameworks.is_empty() {
        return None;
    }
    Some(format!(
        "Apply the following intellectual frameworks/lenses to the generation: {}.",
        active_frameworks.join(", ")
    ))
}

/// System-level instruction: synthesis rules plus the optional framework clause.
#[must_use]
pub fn system_instruction(active_frameworks: &[String]) -> String {
    match frameworks_clause(active_frameworks) {
        Some(clause) => format!("{SYSTEM_PREAMBLE}\n{clause}"),
        None => SYSTEM_PREAMBLE.to_string(),
    }
}

/// User-level prompt naming the fields, the count, and the creativity label.
#[must_use]
pub fn user_prompt(params: &GenerationParams) -> String {
    format!(
        "Generate {} unique interdisciplinary research ideas based on these fields: {}.\n\n\
         The creativity level is set to: {}.",
        params.count,
        params.fields.join(", "),
        params.creativity
    )
}
