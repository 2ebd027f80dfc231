//! Researcher profile.

use synth_store::KeyValueStore;

use crate::{LabError, Laboratory};

/// Partial profile change. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    /// Ignored when blank after trimming.
    pub username: Option<String>,
    /// Data URI, or empty to clear the avatar.
    pub avatar: Option<String>,
    /// Replaces the whole interest list; blanks and repeats are dropped.
    pub interests: Option<Vec<String>>,
}

impl<S: KeyValueStore> Laboratory<S> {
    /// Merge `update` into the profile. Returns whether anything changed.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::Store`] if the profile cannot be persisted.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<bool, LabError> {
        let before = self.profile.clone();

        if let Some(username) = update.username
            && !username.trim().is_empty()
        {
            username.trim().clone_into(&mut self.profile.username);
        }
        if let Some(avatar) = update.avatar {
            self.profile.avatar = avatar;
        }
        if let Some(interests) = update.interests {
            self.profile.set_interests(interests);
        }

        if self.profile == before {
            return Ok(false);
        }
        self.flush_profile()?;
        Ok(true)
    }

    /// Add an interest. No-op when blank after trimming or already present.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::Store`] if the profile cannot be persisted.
    pub fn add_interest(&mut self, interest: &str) -> Result<bool, LabError> {
        if !self.profile.add_interest(interest) {
            return Ok(false);
        }
        self.flush_profile()?;
        Ok(true)
    }

    /// Remove an interest by exact value.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::Store`] if the profile cannot be persisted.
    pub fn remove_interest(&mut self, interest: &str) -> Result<bool, LabError> {
        if !self.profile.remove_interest(interest) {
            return Ok(false);
        }
        self.flush_profile()?;
        Ok(true)
    }

    fn flush_profile(&mut self) -> Result<(), LabError> {
        self.store.save(&self.profile)?;
        Ok(())
    }
}
