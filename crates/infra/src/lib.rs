//! `authgate-infra` — credential directory implementations.
//!
//! The auth core only knows the [`authgate_auth::CredentialDirectory`] seam;
//! this crate provides the concrete store and the password hashing that
//! backs it.

pub mod directory;
pub mod password;

pub use directory::InMemoryDirectory;
pub use password::{PasswordHashError, hash_password, verify_password};
