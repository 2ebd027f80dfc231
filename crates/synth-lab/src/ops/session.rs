//! Session gate. No credential is checked; opening the gate always succeeds.

use synth_store::KeyValueStore;

use crate::{LabError, Laboratory};

impl<S: KeyValueStore> Laboratory<S> {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Open the gate and persist the flag.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::Store`] if the flag cannot be written.
    pub fn sign_in(&mut self) -> Result<(), LabError> {
        self.store.set_authenticated(true)?;
        self.authenticated = true;
        tracing::info!("session opened");
        Ok(())
    }

    /// Close the gate and remove the persisted flag.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::Store`] if the flag cannot be removed.
    pub fn sign_out(&mut self) -> Result<(), LabError> {
        self.store.set_authenticated(false)?;
        self.authenticated = false;
        tracing::info!("session closed");
        Ok(())
    }
}
