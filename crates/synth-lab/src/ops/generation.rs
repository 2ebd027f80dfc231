//! The generation call.

use synth_core::catalog::{MAX_IDEA_COUNT, MIN_FIELDS, MIN_IDEA_COUNT, is_valid_count};
use synth_core::entities::ResearchIdea;
use synth_gemini::GenerationParams;
use synth_store::KeyValueStore;

use crate::{LabError, Laboratory};

impl<S: KeyValueStore> Laboratory<S> {
    /// Generate ideas from the current selection and controls.
    ///
    /// On entry the previous error and ideas are cleared and the laboratory is
    /// marked as generating until the call settles. On success the returned
    /// ideas replace the displayed list.
    ///
    /// # Errors
    ///
    /// - [`LabError::NotEnoughFields`] with fewer than two selected fields. No
    ///   request is made and the displayed ideas are kept.
    /// - [`LabError::InvalidCount`] if the count was configured out of range.
    /// - [`LabError::GenerationInFlight`] while a previous call has not settled.
    /// - [`LabError::GenerationFailed`] for any failure of the call itself.
    ///
    /// The `Display` text of the first and last is also recorded in
    /// [`Laboratory::error`].
    pub async fn generate(&mut self) -> Result<&[ResearchIdea], LabError> {
        if self.selected_fields.len() < MIN_FIELDS {
            return Err(self.record_error(LabError::NotEnoughFields));
        }
        if !is_valid_count(self.count) {
            return Err(LabError::InvalidCount {
                count: self.count,
                min: MIN_IDEA_COUNT,
                max: MAX_IDEA_COUNT,
            });
        }
        if self.generating {
            return Err(LabError::GenerationInFlight);
        }

        self.error = None;
        self.ideas.clear();
        self.generating = true;

        let params = GenerationParams {
            fields: self.selected_fields.clone(),
            count: self.count,
            creativity: self.creativity,
            active_frameworks: self.active_framework_names(),
        };
        let result = self.generator.generate(&params).await;
        self.generating = false;

        match result {
            Ok(ideas) => {
                tracing::info!(ideas = ideas.len(), "displaying generated ideas");
                self.ideas = ideas;
                Ok(&self.ideas)
            }
            Err(source) => {
                tracing::warn!(error = %source, "generation failed");
                Err(self.record_error(LabError::GenerationFailed(source)))
            }
        }
    }

    /// Re-display the batch saved by [`Self::remember_ideas`], typically by a
    /// previous process. Returns how many ideas were restored.
    pub fn restore_ideas(&mut self) -> usize {
        self.ideas = self.store.load::<Vec<ResearchIdea>>();
        self.ideas.len()
    }

    /// Save the displayed batch so a later session can restore it.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::Store`] if the batch cannot be persisted.
    pub fn remember_ideas(&mut self) -> Result<(), LabError> {
        self.store.save(&self.ideas)?;
        Ok(())
    }

    /// Clear the recorded error message.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    fn record_error(&mut self, error: LabError) -> LabError {
        self.error = Some(error.to_string());
        error
    }
}
