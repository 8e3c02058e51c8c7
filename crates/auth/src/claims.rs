use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use authgate_core::{Identity, Role, Subject};

use crate::token::TokenError;

/// Token claims (transport-agnostic).
///
/// `iat`/`exp` are Unix seconds on the wire, following the compact
/// signed-claims convention. Roles are carried as a claim so a token is
/// self-describing, but authorization always re-reads roles from the
/// credential directory — the claim is informational after issuance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username) the token was issued to.
    pub sub: Subject,

    /// Roles granted at issuance time.
    pub roles: Vec<Role>,

    /// Issued-at, Unix seconds.
    pub iat: i64,

    /// Expiry, Unix seconds.
    pub exp: i64,
}

impl Claims {
    pub fn for_identity(
        identity: &Identity,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            sub: identity.subject.clone(),
            roles: identity.roles.clone(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }
}

/// Deterministically validate the claim time window.
///
/// Signature verification is intentionally outside this function; callers
/// must have verified the MAC first (see [`crate::TokenService::verify`]).
pub fn validate_claims(claims: &Claims, now: DateTime<Utc>) -> Result<(), TokenError> {
    if claims.exp <= now.timestamp() {
        return Err(TokenError::Expired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn identity() -> Identity {
        Identity::new(Subject::new("alice"), vec![Role::USER])
    }

    #[test]
    fn claims_within_window_are_valid() {
        let now = Utc::now();
        let claims = Claims::for_identity(&identity(), now, now + Duration::minutes(10));
        assert!(validate_claims(&claims, now).is_ok());
    }

    #[test]
    fn claims_at_expiry_are_expired() {
        let now = Utc::now();
        let claims = Claims::for_identity(&identity(), now - Duration::minutes(10), now);
        assert_eq!(validate_claims(&claims, now), Err(TokenError::Expired));
    }

    #[test]
    fn claims_after_expiry_are_expired() {
        let now = Utc::now();
        let claims =
            Claims::for_identity(&identity(), now - Duration::hours(2), now - Duration::hours(1));
        assert_eq!(validate_claims(&claims, now), Err(TokenError::Expired));
    }
}
