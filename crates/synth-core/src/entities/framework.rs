use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::{PREFIX_FRAMEWORK, new_id};

/// A named interpretive lens the generation prompt may apply.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Framework {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub active: bool,
}

impl Framework {
    /// Create a user-defined framework. New frameworks start inactive.
    #[must_use]
    pub fn custom(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: new_id(PREFIX_FRAMEWORK),
            name: name.into(),
            description: description.into(),
            active: false,
        }
    }

    /// The collection seeded when no stored record exists.
    #[must_use]
    pub fn default_set() -> Vec<Self> {
        [
            ("fw-1", "Game Theory", "Analyze interactions as strategic games."),
            ("fw-2", "Systems Thinking", "Focus on interconnected feedback loops."),
            ("fw-3", "Post-Humanism", "Decenter the human perspective in analysis."),
        ]
        .into_iter()
        .map(|(id, name, description)| Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            active: false,
        })
        .collect()
    }
}
