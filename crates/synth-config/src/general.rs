//! General application configuration.

use serde::{Deserialize, Serialize};
use synth_core::catalog::{DEFAULT_IDEA_COUNT, MAX_IDEA_COUNT, MIN_IDEA_COUNT, is_valid_count};
use synth_core::enums::Creativity;

use crate::ConfigError;

const fn default_count() -> u32 {
    DEFAULT_IDEA_COUNT
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Idea count a new session starts with.
    #[serde(default = "default_count")]
    pub default_count: u32,

    /// Creativity level a new session starts with.
    #[serde(default)]
    pub default_creativity: Creativity,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_count: default_count(),
            default_creativity: Creativity::default(),
        }
    }
}

impl GeneralConfig {
    /// Reject values the generation client would refuse.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `default_count` is outside 1–10.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if is_valid_count(self.default_count) {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "general.default_count".into(),
                reason: format!(
                    "{} is outside {MIN_IDEA_COUNT}..={MAX_IDEA_COUNT}",
                    self.default_count
                ),
            })
        }
    }
}
