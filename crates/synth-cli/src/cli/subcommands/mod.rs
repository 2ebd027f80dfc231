mod auth;
mod bookmark;
mod framework;
mod profile;

pub use auth::AuthCommands;
pub use bookmark::{BookmarkCommands, ResourceAddArgs, ResourceCommands};
pub use framework::{FrameworkAddArgs, FrameworkCommands};
pub use profile::{InterestCommands, ProfileCommands, ProfileSetArgs};
