//! # synth-lab
//!
//! The application state controller. A [`Laboratory`] owns everything one
//! session sees: the field selection and generation controls, the displayed
//! ideas and error message, and the persisted profile, bookmarks, and
//! frameworks.
//!
//! Operations are grouped by concern in `ops/`, each an `impl Laboratory`
//! block. Every effective mutation of a persisted collection is flushed to the
//! [`Store`] before the method returns.

mod error;
mod ops;

pub use error::LabError;
pub use ops::profile::ProfileUpdate;

use synth_config::GeneralConfig;
use synth_core::entities::{Bookmark, Framework, ResearchIdea, UserProfile};
use synth_core::enums::{Creativity, View};
use synth_gemini::IdeaGenerator;
use synth_store::{KeyValueStore, Store};

/// Initial generation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabDefaults {
    pub count: u32,
    pub creativity: Creativity,
}

impl Default for LabDefaults {
    fn default() -> Self {
        Self {
            count: synth_core::catalog::DEFAULT_IDEA_COUNT,
            creativity: Creativity::default(),
        }
    }
}

impl From<&GeneralConfig> for LabDefaults {
    fn from(config: &GeneralConfig) -> Self {
        Self {
            count: config.default_count,
            creativity: config.default_creativity,
        }
    }
}

/// Session state plus the collaborators that act on it.
pub struct Laboratory<S> {
    store: Store<S>,
    generator: Box<dyn IdeaGenerator>,

    selected_fields: Vec<String>,
    count: u32,
    creativity: Creativity,
    ideas: Vec<ResearchIdea>,
    error: Option<String>,
    generating: bool,
    view: View,

    profile: UserProfile,
    bookmarks: Vec<Bookmark>,
    frameworks: Vec<Framework>,
    authenticated: bool,
}

impl<S: KeyValueStore> Laboratory<S> {
    /// Load persisted state and build a ready laboratory.
    ///
    /// Unreadable records load as their defaults; this never fails.
    pub fn init(store: Store<S>, generator: Box<dyn IdeaGenerator>, defaults: LabDefaults) -> Self {
        let profile = store.load::<UserProfile>();
        let bookmarks = store.load::<Vec<Bookmark>>();
        let frameworks = store.load::<Vec<Framework>>();
        let authenticated = store.is_authenticated();
        tracing::debug!(
            bookmarks = bookmarks.len(),
            frameworks = frameworks.len(),
            authenticated,
            "laboratory initialized"
        );

        Self {
            store,
            generator,
            selected_fields: Vec::new(),
            count: defaults.count,
            creativity: defaults.creativity,
            ideas: Vec::new(),
            error: None,
            generating: false,
            view: View::default(),
            profile,
            bookmarks,
            frameworks,
            authenticated,
        }
    }

    /// End the session. Everything is already persisted, so nothing is flushed.
    pub fn teardown(self) {
        tracing::debug!("laboratory torn down");
    }

    #[must_use]
    pub const fn store(&self) -> &Store<S> {
        &self.store
    }

    #[must_use]
    pub fn selected_fields(&self) -> &[String] {
        &self.selected_fields
    }

    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    #[must_use]
    pub const fn creativity(&self) -> Creativity {
        self.creativity
    }

    /// Ideas from the last successful generation.
    #[must_use]
    pub fn ideas(&self) -> &[ResearchIdea] {
        &self.ideas
    }

    /// User-facing message of the last failed action, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn is_generating(&self) -> bool {
        self.generating
    }

    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    pub const fn set_view(&mut self, view: View) {
        self.view = view;
    }

    #[must_use]
    pub const fn profile(&self) -> &UserProfile {
        &self.profile
    }

    #[must_use]
    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    #[must_use]
    pub fn frameworks(&self) -> &[Framework] {
        &self.frameworks
    }
}
