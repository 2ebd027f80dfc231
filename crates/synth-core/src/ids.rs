//! ID prefixes and generation.
//!
//! IDs have the form `{prefix}-{32 hex chars}` where the suffix is a UUID v4
//! in simple format. Uniqueness holds across sessions, not just within one
//! generation batch.

use uuid::Uuid;

pub const PREFIX_IDEA: &str = "idea";
pub const PREFIX_RESOURCE: &str = "res";
pub const PREFIX_FRAMEWORK: &str = "fw";

/// Generate a new prefixed identifier.
#[must_use]
pub fn new_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

/// Check whether `id` carries the given prefix.
#[must_use]
pub fn has_prefix(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with('-'))
}
