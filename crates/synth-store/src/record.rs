//! Typed records and their versioned on-disk envelope.
//!
//! Records are written as `{"version": N, "data": …}`. Reading accepts:
//! - the current version: `data` is decoded;
//! - an older version: `data` is decoded as the current shape if it fits;
//! - bare JSON without an envelope (unversioned): decoded as the current shape if it fits.
//!
//! Anything else (a newer version, malformed text, a mismatched shape) is
//! reported as a [`DecodeFailure`] and the caller falls back to the default.
//! Decoded collections are passed through [`Record::normalize`], so duplicate
//! ids or interests written by hand never reach the caller.

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use synth_core::entities::{Bookmark, Framework, ResearchIdea, UserProfile};
use thiserror::Error;

pub const KEY_PROFILE: &str = "is_profile";
pub const KEY_BOOKMARKS: &str = "is_bookmarks";
pub const KEY_FRAMEWORKS: &str = "is_frameworks";
pub const KEY_IDEAS: &str = "is_ideas";
pub const KEY_AUTHENTICATED: &str = "is_authenticated";

/// A value persisted under a fixed key.
pub trait Record: Serialize + DeserializeOwned {
    /// Storage key.
    const KEY: &'static str;
    /// Shape version written into the envelope.
    const VERSION: u32 = 1;
    /// Value used when nothing usable is stored.
    fn fallback() -> Self;
    /// Restore collection invariants on a value read back from storage.
    #[must_use]
    fn normalize(self) -> Self {
        self
    }
}

/// Keep the first entry for every id, preserving order.
fn dedup_by_id<T>(items: Vec<T>, id: impl Fn(&T) -> &str) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(id(item).to_string()))
        .collect()
}

impl Record for UserProfile {
    const KEY: &'static str = KEY_PROFILE;
    fn fallback() -> Self {
        Self::default()
    }
    fn normalize(mut self) -> Self {
        let interests = std::mem::take(&mut self.interests);
        self.set_interests(interests);
        self
    }
}

impl Record for Vec<Bookmark> {
    const KEY: &'static str = KEY_BOOKMARKS;
    fn fallback() -> Self {
        Self::new()
    }
    fn normalize(self) -> Self {
        dedup_by_id(self, |b| b.idea.id.as_str())
    }
}

impl Record for Vec<Framework> {
    const KEY: &'static str = KEY_FRAMEWORKS;
    fn fallback() -> Self {
        Framework::default_set()
    }
    fn normalize(self) -> Self {
        dedup_by_id(self, |f| f.id.as_str())
    }
}

/// Last displayed generation batch, kept between CLI invocations.
impl Record for Vec<ResearchIdea> {
    const KEY: &'static str = KEY_IDEAS;
    fn fallback() -> Self {
        Self::new()
    }
    fn normalize(self) -> Self {
        dedup_by_id(self, |i| i.id.as_str())
    }
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    version: u32,
    data: &'a T,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Envelope {
    version: u32,
    data: serde_json::Value,
}

/// Why a stored value could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeFailure {
    /// Not JSON at all.
    #[error("malformed JSON: {0}")]
    Malformed(String),
    /// Written by a newer release.
    #[error("version {found} is newer than supported version {supported}")]
    NewerVersion { found: u32, supported: u32 },
    /// JSON, but not the expected shape.
    #[error("unexpected shape: {0}")]
    Shape(String),
}

/// Serialize `value` inside its versioned envelope.
///
/// # Errors
///
/// Returns the serializer error if `value` cannot be represented as JSON.
pub fn encode<T: Record>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(&EnvelopeRef {
        version: T::VERSION,
        data: value,
    })
}

/// Decode stored text into `T`.
///
/// # Errors
///
/// Returns the [`DecodeFailure`] that made the text unusable.
pub fn decode<T: Record>(raw: &str) -> Result<T, DecodeFailure> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| DecodeFailure::Malformed(e.to_string()))?;

    let data = match serde_json::from_value::<Envelope>(value.clone()) {
        Ok(envelope) if envelope.version > T::VERSION => {
            return Err(DecodeFailure::NewerVersion {
                found: envelope.version,
                supported: T::VERSION,
            });
        }
        Ok(envelope) => envelope.data,
        Err(_) => value,
    };

    serde_json::from_value(data)
        .map(T::normalize)
        .map_err(|e| DecodeFailure::Shape(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn encode_wraps_in_envelope() {
        let raw = encode(&UserProfile::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["data"]["username"], "Researcher");
    }

    #[test]
    fn decode_current_envelope() {
        let raw = r#"{"version":1,"data":{"username":"Ada","avatar":"","interests":["Ethics"]}}"#;
        let profile: UserProfile = decode(raw).unwrap();
        assert_eq!(profile.username, "Ada");
        assert_eq!(profile.interests, vec!["Ethics".to_string()]);
    }

    #[test]
    fn decode_bare_legacy_json() {
        let raw = r#"[{"id":"fw-1","name":"Game Theory","description":"d","active":true}]"#;
        let frameworks: Vec<Framework> = decode(raw).unwrap();
        assert_eq!(frameworks.len(), 1);
        assert!(frameworks[0].active);
    }

    #[test]
    fn decode_newer_version_is_refused() {
        let raw = r#"{"version":7,"data":[]}"#;
        let err = decode::<Vec<Bookmark>>(raw).unwrap_err();
        assert_eq!(
            err,
            DecodeFailure::NewerVersion {
                found: 7,
                supported: 1
            }
        );
    }

    #[test]
    fn decode_older_version_uses_current_shape() {
        let raw = r#"{"version":0,"data":[]}"#;
        let bookmarks: Vec<Bookmark> = decode(raw).unwrap();
        assert!(bookmarks.is_empty());
    }

    #[test]
    fn decode_malformed_text() {
        assert!(matches!(
            decode::<UserProfile>("{not json"),
            Err(DecodeFailure::Malformed(_))
        ));
    }

    #[test]
    fn decode_wrong_shape() {
        assert!(matches!(
            decode::<Vec<Framework>>(r#"{"username":"Ada"}"#),
            Err(DecodeFailure::Shape(_))
        ));
    }

    fn bookmark(id: &str, notes: &str) -> Bookmark {
        let mut bookmark = Bookmark::from_idea(ResearchIdea {
            id: id.to_string(),
            title: format!("Idea {id}"),
            core_question: "q".to_string(),
            concept_overview: "o".to_string(),
            why_it_matters: "w".to_string(),
            possible_methods: vec![],
            related_disciplines: vec![],
            timestamp: 1,
        });
        bookmark.notes = notes.to_string();
        bookmark
    }

    #[test]
    fn decode_drops_duplicate_interests() {
        let raw = r#"{"version":1,"data":{"username":"Ada","avatar":"","interests":["Ethics","Law","Ethics"]}}"#;
        let profile: UserProfile = decode(raw).unwrap();
        assert_eq!(profile.interests, vec!["Ethics".to_string(), "Law".to_string()]);
    }

    #[test]
    fn decode_keeps_first_bookmark_per_id() {
        let stored = vec![
            bookmark("idea-1", "first"),
            bookmark("idea-2", ""),
            bookmark("idea-1", "second"),
        ];
        let raw = encode(&stored).unwrap();

        let bookmarks: Vec<Bookmark> = decode(&raw).unwrap();
        let ids: Vec<&str> = bookmarks.iter().map(|b| b.idea.id.as_str()).collect();
        assert_eq!(ids, vec!["idea-1", "idea-2"]);
        assert_eq!(bookmarks[0].notes, "first");
    }

    #[test]
    fn decode_failure_messages() {
        let err = DecodeFailure::NewerVersion {
            found: 3,
            supported: 1,
        };
        assert_eq!(err.to_string(), "version 3 is newer than supported version 1");
        assert_eq!(
            DecodeFailure::Shape("missing field".into()).to_string(),
            "unexpected shape: missing field"
        );
    }
}
