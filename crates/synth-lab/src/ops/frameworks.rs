//! Framework collection.

use synth_core::entities::Framework;
use synth_store::KeyValueStore;

use crate::{LabError, Laboratory};

impl<S: KeyValueStore> Laboratory<S> {
    /// Names of the active frameworks, in collection order.
    #[must_use]
    pub fn active_framework_names(&self) -> Vec<String> {
        self.frameworks
            .iter()
            .filter(|f| f.active)
            .map(|f| f.name.clone())
            .collect()
    }

    /// Flip a framework between active and inactive. Returns the new state.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::NotFound`] for an unknown id, or
    /// [`LabError::Store`] if the collection cannot be persisted.
    pub fn toggle_framework_active(&mut self, id: &str) -> Result<bool, LabError> {
        let framework = self
            .frameworks
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| LabError::not_found("framework", id))?;
        framework.active = !framework.active;
        let active = framework.active;
        self.flush_frameworks()?;
        tracing::debug!(id, active, "toggled framework");
        Ok(active)
    }

    /// Append a user-defined framework. It starts inactive.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::Validation`] if `name` is blank, or
    /// [`LabError::Store`] if the collection cannot be persisted.
    pub fn add_framework(&mut self, name: &str, description: &str) -> Result<&Framework, LabError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LabError::Validation("framework name must not be empty".into()));
        }
        self.frameworks
            .push(Framework::custom(name, description.trim()));
        self.flush_frameworks()?;
        let added = &self.frameworks[self.frameworks.len() - 1];
        tracing::debug!(id = %added.id, "added framework");
        Ok(added)
    }

    fn flush_frameworks(&mut self) -> Result<(), LabError> {
        self.store.save(&self.frameworks)?;
        Ok(())
    }
}
