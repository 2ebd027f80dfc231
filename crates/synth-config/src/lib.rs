//! # synth-config
//!
//! Layered configuration loading for Idea Synthesizer using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SYNTH_*` prefix, `__` as separator)
//! 2. `GEMINI_API_KEY` (maps to `gemini.api_key`)
//! 3. Project-level `.synth/config.toml`
//! 4. User-level `~/.config/synth/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SYNTH_GEMINI__API_KEY` -> `gemini.api_key`,
//! `SYNTH_STORAGE__DATA_DIR` -> `storage.data_dir`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use synth_config::SynthConfig;
//!
//! let config = SynthConfig::load_with_dotenv().expect("config");
//!
//! if config.gemini.is_configured() {
//!     println!("model: {}", config.gemini.model);
//! }
//! ```

mod error;
mod gemini;
mod general;
mod storage;

pub use error::ConfigError;
pub use gemini::GeminiConfig;
pub use general::GeneralConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SynthConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl SynthConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed, or
    /// [`ConfigError::InvalidValue`] if a loaded value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.general.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".synth/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: The provider's conventional key variable
        figment = figment.merge(
            Env::raw()
                .only(&["GEMINI_API_KEY"])
                .map(|_| "gemini.api_key".into()),
        );

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("SYNTH_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("synth").join("config.toml"))
    }
}
