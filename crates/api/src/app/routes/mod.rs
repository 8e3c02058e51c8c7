pub mod admin;
pub mod auth;
pub mod moderator;
pub mod public;
pub mod user;
