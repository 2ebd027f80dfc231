pub mod auth;
pub mod bookmark;
pub mod dispatch;
pub mod fields;
pub mod framework;
pub mod generate;
pub mod ideas;
pub mod profile;
pub mod schema;
