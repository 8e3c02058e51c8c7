//! Credential directory contract.
//!
//! The directory is an external collaborator: it maps subjects to an
//! identity plus a stored credential hash, and owns the hash-verification
//! primitive. This crate only defines the seam.

use thiserror::Error;

use authgate_core::{Identity, Subject};

/// What the directory serves for one subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub identity: Identity,
    /// Stored credential hash in whatever format the directory verifies.
    pub secret_hash: String,
}

/// Infrastructure failure talking to the directory.
///
/// Distinct from "subject not found" (which is `Ok(None)`): an unavailable
/// directory must fail the request, never be treated as anonymous.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("credential directory unavailable: {0}")]
    Unavailable(String),
}

pub trait CredentialDirectory: Send + Sync {
    /// Look up a subject. `Ok(None)` means the subject does not exist.
    fn find_by_subject(
        &self,
        subject: &Subject,
    ) -> Result<Option<CredentialRecord>, DirectoryError>;

    /// Compare a plaintext credential against a stored hash.
    fn verify_secret(&self, plain: &str, stored_hash: &str) -> bool;
}
