use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::ResearchIdea;
use crate::enums::ResourceKind;
use crate::ids::{PREFIX_RESOURCE, new_id};

/// An external link or file attached to exactly one bookmark.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Resource {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub url: String,
}

impl Resource {
    /// Create a resource with a fresh `res-` identifier.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ResourceKind, url: impl Into<String>) -> Self {
        Self {
            id: new_id(PREFIX_RESOURCE),
            name: name.into(),
            kind,
            url: url.into(),
        }
    }

    #[must_use]
    pub fn link(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(name, ResourceKind::Link, url)
    }
}

/// A saved research idea with journal notes and linked resources.
///
/// Serialized flat: the idea's fields sit next to `notes` and `resources`.
/// The bookmark is identified by the idea's `id`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Bookmark {
    #[serde(flatten)]
    pub idea: ResearchIdea,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl Bookmark {
    /// Promote an idea with empty notes and no resources.
    #[must_use]
    pub const fn from_idea(idea: ResearchIdea) -> Self {
        Self {
            idea,
            notes: String::new(),
            resources: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.idea.id
    }

    /// Remove the resource with `resource_id`. Returns `true` if one was removed.
    pub fn remove_resource(&mut self, resource_id: &str) -> bool {
        let before = self.resources.len();
        self.resources.retain(|r| r.id != resource_id);
        self.resources.len() != before
    }
}
