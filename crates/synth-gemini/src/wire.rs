//! `generateContent` wire format.
//!
//! Request types serialize to the camelCase JSON the REST API expects.
//! Response types deserialize only the parts of the envelope we read.

use serde::{Deserialize, Serialize};

use crate::GenerationParams;
use crate::prompt::{controls_for, system_instruction, user_prompt};

const RESPONSE_MIME_TYPE: &str = "application/json";

// ── Request ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub system_instruction: Content,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Set on reasoning summaries; those never carry the answer.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub thought: bool,
}

impl Content {
    fn text(role: Option<&str>, text: String) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part {
                text: Some(text),
                thought: false,
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub thinking_config: ThinkingConfig,
    pub response_mime_type: &'static str,
    pub response_schema: serde_json::Value,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    pub thinking_budget: u32,
}

impl GenerateContentRequest {
    /// Build the full request for one generation call.
    #[must_use]
    pub fn from_params(params: &GenerationParams) -> Self {
        let controls = controls_for(params.creativity);
        Self {
            contents: vec![Content::text(Some("user"), user_prompt(params))],
            system_instruction: Content::text(None, system_instruction(&params.active_frameworks)),
            generation_config: GenerationConfig {
                temperature: controls.temperature,
                thinking_config: ThinkingConfig {
                    thinking_budget: controls.thinking_budget,
                },
                response_mime_type: RESPONSE_MIME_TYPE,
                response_schema: response_schema(),
            },
        }
    }
}

/// The structured output schema, in the provider's OpenAPI-subset dialect.
///
/// Object → `research_ideas` array of six-field records, all required; the two
/// list fields are arrays of strings.
#[must_use]
pub fn response_schema() -> serde_json::Value {
    let string_list = serde_json::json!({
        "type": "ARRAY",
        "items": { "type": "STRING" }
    });
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "research_ideas": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "core_question": { "type": "STRING" },
                        "concept_overview": { "type": "STRING" },
                        "why_it_matters": { "type": "STRING" },
                        "possible_methods": string_list,
                        "related_disciplines": string_list
                    },
                    "required": [
                        "title",
                        "core_question",
                        "concept_overview",
                        "why_it_matters",
                        "possible_methods",
                        "related_disciplines"
                    ]
                }
            }
        },
        "required": ["research_ideas"]
    })
}

// ── Response ───────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Answer text of the first candidate, with reasoning parts skipped.
    ///
    /// Returns `None` when there is no candidate or it carries no text.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter(|part| !part.thought)
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Body of a non-success response: `{"error": {"code", "message", "status"}}`.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub message: String,
    /// Canonical status name, e.g. `RESOURCE_EXHAUSTED`.
    #[serde(default)]
    pub status: Option<String>,
}

impl ErrorDetail {
    /// `STATUS: message`, or whichever of the two is present.
    #[must_use]
    pub fn summary(&self) -> String {
        let message = self.message.trim();
        match self.status.as_deref().map(str::trim) {
            Some(status) if !status.is_empty() && !message.is_empty() => {
                format!("{status}: {message}")
            }
            Some(status) if !status.is_empty() => status.to_string(),
            _ => message.to_string(),
        }
    }
}
