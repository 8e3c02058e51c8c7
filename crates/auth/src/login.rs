//! Login orchestration: credentials in, signed token out.
//!
//! This is the only path that mints tokens. Every credential problem —
//! unknown subject, wrong password, disabled account — collapses into one
//! `AuthenticationFailed` so responses cannot be used to enumerate
//! accounts. Directory outages stay distinct.

use thiserror::Error;

use authgate_core::Subject;

use crate::directory::{CredentialDirectory, DirectoryError};
use crate::token::{TokenError, TokenService};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// Uniform credential failure; deliberately carries no detail.
    #[error("authentication failed")]
    AuthenticationFailed,

    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// Token issuance failed after successful authentication.
    #[error(transparent)]
    Token(#[from] TokenError),
}

/// Validate `password` for `subject` against the directory and mint a token.
pub fn login(
    directory: &dyn CredentialDirectory,
    tokens: &TokenService,
    subject: &Subject,
    password: &str,
) -> Result<String, LoginError> {
    let Some(record) = directory.find_by_subject(subject)? else {
        tracing::debug!(%subject, "login for unknown subject");
        return Err(LoginError::AuthenticationFailed);
    };

    if !directory.verify_secret(password, &record.secret_hash) {
        tracing::debug!(%subject, "login with wrong credential");
        return Err(LoginError::AuthenticationFailed);
    }

    if !record.identity.enabled {
        tracing::debug!(%subject, "login for disabled subject");
        return Err(LoginError::AuthenticationFailed);
    }

    let token = tokens.issue(&record.identity)?;
    tracing::info!(%subject, "issued token");
    Ok(token)
}
