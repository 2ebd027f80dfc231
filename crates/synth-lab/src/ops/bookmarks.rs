//! Bookmark collection: promotion, demotion, and annotation.
//!
//! Annotation methods are scoped to one bookmark by id and return `Ok(false)`
//! without touching the store when nothing changed.

use synth_core::entities::{Bookmark, Resource, ResearchIdea};
use synth_store::KeyValueStore;

use crate::{LabError, Laboratory};

impl<S: KeyValueStore> Laboratory<S> {
    #[must_use]
    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.bookmarks.iter().any(|b| b.id() == id)
    }

    #[must_use]
    pub fn bookmark(&self, id: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.id() == id)
    }

    /// Bookmark `idea`, or remove its bookmark if it has one. Returns whether
    /// the idea is bookmarked afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::Store`] if the collection cannot be persisted.
    pub fn toggle_bookmark(&mut self, idea: &ResearchIdea) -> Result<bool, LabError> {
        if self.remove_bookmark(&idea.id)? {
            return Ok(false);
        }
        self.bookmarks.push(Bookmark::from_idea(idea.clone()));
        self.flush_bookmarks()?;
        tracing::debug!(id = %idea.id, "bookmarked idea");
        Ok(true)
    }

    /// Toggle by id. Ideas are looked up among the displayed ideas; an id
    /// that is only bookmarked is un-bookmarked.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::NotFound`] when the id is neither displayed nor
    /// bookmarked, or [`LabError::Store`] if persisting fails.
    pub fn toggle_bookmark_by_id(&mut self, id: &str) -> Result<bool, LabError> {
        if let Some(idea) = self.ideas.iter().find(|i| i.id == id).cloned() {
            return self.toggle_bookmark(&idea);
        }
        if self.remove_bookmark(id)? {
            return Ok(false);
        }
        Err(LabError::not_found("idea", id))
    }

    /// Remove a bookmark. Returns `false` if there was none.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::Store`] if the collection cannot be persisted.
    pub fn remove_bookmark(&mut self, id: &str) -> Result<bool, LabError> {
        let before = self.bookmarks.len();
        self.bookmarks.retain(|b| b.id() != id);
        if self.bookmarks.len() == before {
            return Ok(false);
        }
        self.flush_bookmarks()?;
        tracing::debug!(id, "removed bookmark");
        Ok(true)
    }

    /// Replace the notes of a bookmark.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::Store`] if the collection cannot be persisted.
    pub fn update_bookmark_notes(&mut self, id: &str, notes: &str) -> Result<bool, LabError> {
        let Some(bookmark) = self.bookmark_mut(id) else {
            return Ok(false);
        };
        notes.clone_into(&mut bookmark.notes);
        self.flush_bookmarks()?;
        Ok(true)
    }

    /// Attach a resource to a bookmark.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::Store`] if the collection cannot be persisted.
    pub fn add_resource(&mut self, id: &str, resource: Resource) -> Result<bool, LabError> {
        let Some(bookmark) = self.bookmark_mut(id) else {
            return Ok(false);
        };
        bookmark.resources.push(resource);
        self.flush_bookmarks()?;
        Ok(true)
    }

    /// Detach a resource from a bookmark. Returns `false` if either id is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`LabError::Store`] if the collection cannot be persisted.
    pub fn remove_resource(&mut self, id: &str, resource_id: &str) -> Result<bool, LabError> {
        let removed = self
            .bookmark_mut(id)
            .is_some_and(|b| b.remove_resource(resource_id));
        if removed {
            self.flush_bookmarks()?;
        }
        Ok(removed)
    }

    fn bookmark_mut(&mut self, id: &str) -> Option<&mut Bookmark> {
        self.bookmarks.iter_mut().find(|b| b.id() == id)
    }

    fn flush_bookmarks(&mut self) -> Result<(), LabError> {
        self.store.save(&self.bookmarks)?;
        Ok(())
    }
}
