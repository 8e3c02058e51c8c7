//! Stateless token service: issue and verify compact signed tokens.
//!
//! Tokens are three dot-separated base64url segments (header, claims,
//! HS256 MAC over the first two). Verification is a pure function of the
//! token string, the shared secret and the clock; nothing is stored
//! server-side and there is no revocation.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind};
use thiserror::Error;

use authgate_core::{Identity, Subject};

use crate::claims::{Claims, validate_claims};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Not a well-formed three-segment token, or the claims do not parse.
    #[error("malformed token")]
    Malformed,

    /// The recomputed MAC does not match the signature segment.
    #[error("invalid token signature")]
    InvalidSignature,

    /// The claim window has closed (`exp <= now`).
    #[error("token has expired")]
    Expired,

    /// Signing failed at issuance. Should not occur with an HS256 secret.
    #[error("failed to sign token: {0}")]
    Signing(String),
}

/// Issues and verifies signed tokens with a single symmetric secret.
///
/// The MAC comparison is delegated to the underlying JWT library, which
/// compares signatures in constant time with respect to the secret.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        // The library's exp check applies leeway; expiry semantics here must
        // be exact, so the time window is validated separately in
        // `validate_claims` against the raw `exp` claim.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims = Default::default();

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
            validation,
        }
    }

    /// Mint a token for a resolved identity.
    ///
    /// `iat = now`, `exp = now + ttl`. Pure apart from reading the clock.
    pub fn issue(&self, identity: &Identity) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims::for_identity(identity, now, now + self.ttl);

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify a token end to end: structure, signature, then expiry.
    ///
    /// Verification has no side effects; verifying the same token twice
    /// yields identical claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })?;

        validate_claims(&data.claims, Utc::now())?;
        Ok(data.claims)
    }

    /// Read the subject out of an **unverified** token.
    ///
    /// Pre-check only (e.g. log correlation before a directory round trip).
    /// Nothing may be decided on this value until [`Self::verify`] has
    /// accepted the token.
    pub fn extract_subject(token: &str) -> Result<Subject, TokenError> {
        let mut segments = token.split('.');
        let (Some(_header), Some(payload), Some(_signature), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(TokenError::Malformed);
        };

        let bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| TokenError::Malformed)?;
        let claims: Claims = serde_json::from_slice(&bytes).map_err(|_| TokenError::Malformed)?;
        Ok(claims.sub)
    }
}
