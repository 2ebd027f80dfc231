//! Local storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the persisted records. Empty means the platform data dir.
    #[serde(default)]
    pub data_dir: String,
}

impl StorageConfig {
    /// Resolve the data directory: explicit `data_dir`, else `{data_dir}/synth`,
    /// else `.synth/data` relative to the working directory.
    #[must_use]
    pub fn resolve_data_dir(&self) -> PathBuf {
        if !self.data_dir.trim().is_empty() {
            return PathBuf::from(self.data_dir.trim());
        }
        dirs::data_dir().map_or_else(
            || PathBuf::from(".synth").join("data"),
            |dir| dir.join("synth"),
        )
    }
}
