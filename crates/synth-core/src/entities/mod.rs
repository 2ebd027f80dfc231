//! Entity structs for all Idea Synthesizer domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip
//! and schema validation. Field names match the persisted record layout.

mod bookmark;
mod framework;
mod idea;
mod profile;

pub use bookmark::{Bookmark, Resource};
pub use framework::Framework;
pub use idea::{IdeaBatch, IdeaDraft, ResearchIdea};
pub use profile::UserProfile;
