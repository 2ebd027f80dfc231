//! # synth-store
//!
//! Local persistence for Idea Synthesizer: the user profile, bookmarks,
//! frameworks, the last displayed idea batch, and the session gate flag.
//!
//! Reads are forgiving. [`Store::load`] never fails: a missing record yields
//! its default, and an unreadable one yields its default with a warning.
//! Writes overwrite the whole record and report failures.

mod backend;
mod error;
pub mod record;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use error::StoreError;
pub use record::Record;

use record::KEY_AUTHENTICATED;

/// Typed access to records over a [`KeyValueStore`] backend.
#[derive(Debug, Clone, Default)]
pub struct Store<S> {
    backend: S,
}

impl<S: KeyValueStore> Store<S> {
    pub const fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Load a record, falling back to `T::fallback()` when absent or unusable.
    #[must_use]
    pub fn load<T: Record>(&self) -> T {
        let raw = match self.backend.get(T::KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return T::fallback(),
            Err(error) => {
                tracing::warn!(key = T::KEY, %error, "failed to read record; using default");
                return T::fallback();
            }
        };
        match record::decode(&raw) {
            Ok(value) => value,
            Err(reason) => {
                tracing::warn!(key = T::KEY, %reason, "stored record unusable; using default");
                T::fallback()
            }
        }
    }

    /// Overwrite a record with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the backend write fails.
    pub fn save<T: Record>(&mut self, value: &T) -> Result<(), StoreError> {
        let raw = record::encode(value)?;
        self.backend.set(T::KEY, &raw)?;
        tracing::debug!(key = T::KEY, bytes = raw.len(), "saved record");
        Ok(())
    }

    /// Whether the session gate is open.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        match self.backend.get(KEY_AUTHENTICATED) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(error) => {
                tracing::warn!(%error, "failed to read session flag; treating as signed out");
                false
            }
        }
    }

    /// Open or close the session gate. Closing removes the flag.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend write fails.
    pub fn set_authenticated(&mut self, authenticated: bool) -> Result<(), StoreError> {
        if authenticated {
            self.backend.set(KEY_AUTHENTICATED, "true")
        } else {
            self.backend.remove(KEY_AUTHENTICATED)
        }
    }

    /// The underlying backend.
    pub const fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }
}
