use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Idea content exactly as the generative service returns it.
///
/// All six fields are required by the response schema. The two list fields
/// must be non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IdeaDraft {
    pub title: String,
    pub core_question: String,
    pub concept_overview: String,
    pub why_it_matters: String,
    #[schemars(length(min = 1))]
    pub possible_methods: Vec<String>,
    #[schemars(length(min = 1))]
    pub related_disciplines: Vec<String>,
}

/// The structured payload the generative service must return.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IdeaBatch {
    pub research_ideas: Vec<IdeaDraft>,
}

/// A generated interdisciplinary research idea.
///
/// Immutable once generated; `timestamp` is epoch milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResearchIdea {
    pub id: String,
    pub title: String,
    pub core_question: String,
    pub concept_overview: String,
    pub why_it_matters: String,
    pub possible_methods: Vec<String>,
    pub related_disciplines: Vec<String>,
    pub timestamp: i64,
}

impl ResearchIdea {
    /// Decorate a draft with its identifier and generation timestamp.
    #[must_use]
    pub fn from_draft(draft: IdeaDraft, id: String, timestamp: i64) -> Self {
        Self {
            id,
            title: draft.title,
            core_question: draft.core_question,
            concept_overview: draft.concept_overview,
            why_it_matters: draft.why_it_matters,
            possible_methods: draft.possible_methods,
            related_disciplines: draft.related_disciplines,
            timestamp,
        }
    }
}
