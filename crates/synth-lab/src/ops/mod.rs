//! Laboratory operations, one module per concern.

pub mod bookmarks;
pub mod frameworks;
pub mod generation;
pub mod profile;
pub mod selection;
pub mod session;
