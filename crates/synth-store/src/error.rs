//! Storage error types for synth-store.

use thiserror::Error;

/// Errors from writing or removing stored records.
///
/// Reads never surface these: an unreadable record loads as its default.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be serialized.
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The temp file could not be moved over the record file.
    #[error("failed to replace record file: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// Key contains characters that cannot name a file.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}
