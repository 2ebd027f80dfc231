use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const DEFAULT_USERNAME: &str = "Researcher";

/// The single researcher profile of a session.
///
/// `avatar` is a data URI or empty. `interests` keeps insertion order and never
/// holds the same value twice (exact, case-sensitive match).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserProfile {
    pub username: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            avatar: String::new(),
            interests: Vec::new(),
        }
    }
}

impl UserProfile {
    /// Add an interest. Returns `false` if it is empty after trimming or already present.
    pub fn add_interest(&mut self, interest: &str) -> bool {
        let trimmed = interest.trim();
        if trimmed.is_empty() || self.interests.iter().any(|i| i == trimmed) {
            return false;
        }
        self.interests.push(trimmed.to_string());
        true
    }

    /// Remove an interest by exact value. Returns `true` if it was present.
    pub fn remove_interest(&mut self, interest: &str) -> bool {
        let before = self.interests.len();
        self.interests.retain(|i| i != interest);
        self.interests.len() != before
    }

    /// Replace all interests, dropping empties and duplicates while keeping order.
    pub fn set_interests<I, S>(&mut self, interests: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.interests.clear();
        for interest in interests {
            self.add_interest(interest.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile() {
        let profile = UserProfile::default();
        assert_eq!(profile.username, "Researcher");
        assert!(profile.avatar.is_empty());
        assert!(profile.interests.is_empty());
    }

    #[test]
    fn add_interest_trims_and_dedupes() {
        let mut profile = UserProfile::default();
        assert!(profile.add_interest("  Cognition "));
        assert!(!profile.add_interest("Cognition"));
        assert!(!profile.add_interest("   "));
        assert!(profile.add_interest("cognition"));
        assert_eq!(profile.interests, vec!["Cognition", "cognition"]);
    }

    #[test]
    fn remove_interest_reports_presence() {
        let mut profile = UserProfile::default();
        profile.add_interest("Ethics");
        assert!(profile.remove_interest("Ethics"));
        assert!(!profile.remove_interest("Ethics"));
        assert!(profile.interests.is_empty());
    }

    #[test]
    fn set_interests_dedupes_in_order() {
        let mut profile = UserProfile::default();
        profile.set_interests(["B", "A", "B", "", "C"]);
        assert_eq!(profile.interests, vec!["B", "A", "C"]);
    }
}
