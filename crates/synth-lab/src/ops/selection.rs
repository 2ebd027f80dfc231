//! Field selection and generation controls.

use synth_core::catalog::{MAX_IDEA_COUNT, MIN_IDEA_COUNT, is_valid_count};
use synth_core::enums::Creativity;
use synth_store::KeyValueStore;

use crate::{LabError, Laboratory};

impl<S: KeyValueStore> Laboratory<S> {
    /// Replace the selection. Values are trimmed; empties and repeats are
    /// dropped and the first occurrence keeps its position.
    pub fn set_selected_fields<I, T>(&mut self, fields: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.selected_fields.clear();
        for field in fields {
            self.add_custom_field(field.as_ref());
        }
    }

    /// Select `field` if unselected, deselect it otherwise. Returns whether it
    /// is selected afterwards.
    pub fn toggle_field(&mut self, field: &str) -> bool {
        let field = field.trim();
        if let Some(pos) = self.selected_fields.iter().position(|f| f == field) {
            self.selected_fields.remove(pos);
            false
        } else {
            self.add_custom_field(field)
        }
    }

    /// Select a field that need not be in the catalog. Returns `false` when the
    /// value is blank or already selected.
    pub fn add_custom_field(&mut self, field: &str) -> bool {
        let field = field.trim();
        if field.is_empty() || self.selected_fields.iter().any(|f| f == field) {
            return false;
        }
        self.selected_fields.push(field.to_string());
        true
    }

    pub const fn set_creativity(&mut self, creativity: Creativity) {
        self.creativity = creativity;
    }

    /// Set how many ideas the next generation asks for.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::InvalidCount`] when `count` is outside 1–10; the
    /// current count is kept.
    pub fn set_count(&mut self, count: u32) -> Result<(), LabError> {
        if !is_valid_count(count) {
            return Err(LabError::InvalidCount {
                count,
                min: MIN_IDEA_COUNT,
                max: MAX_IDEA_COUNT,
            });
        }
        self.count = count;
        Ok(())
    }
}
