//! Authentication and authorization middleware.
//!
//! Two layers run in order on every request, exactly once each:
//!
//! 1. [`authenticate`] — resolves the caller to a [`RequestContext`]
//!    (anonymous on any token problem; those reasons are logged, never
//!    surfaced) and aborts with 503 only on directory outage.
//! 2. [`authorize`] — consults the decision engine against the static route
//!    table before the handler runs.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use authgate_auth::{
    AccessDecision, CredentialDirectory, DecisionEngine, DirectoryError, TokenService,
};
use authgate_core::RequestIdentity;

use crate::app::errors;
use crate::context::RequestContext;

#[derive(Clone)]
pub struct AuthState {
    pub tokens: Arc<TokenService>,
    pub directory: Arc<dyn CredentialDirectory>,
    pub engine: Arc<DecisionEngine>,
}

/// Resolve the caller's identity and attach the request context.
pub async fn authenticate(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let identity = match resolve_identity(&state, req.headers()) {
        Ok(identity) => identity,
        Err(DirectoryError::Unavailable(reason)) => {
            tracing::error!(%reason, "credential directory unavailable");
            return errors::json_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "directory_unavailable",
                "credential directory unavailable",
            );
        }
    };

    req.extensions_mut().insert(RequestContext::new(identity));
    next.run(req).await
}

/// Route-level access decision, after `authenticate` has run.
pub async fn authorize(
    State(state): State<AuthState>,
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    // Missing context would mean the authenticate layer did not run;
    // default-deny territory, so treat it as anonymous.
    let anonymous = RequestContext::anonymous();
    let ctx = req.extensions().get::<RequestContext>().unwrap_or(&anonymous);

    let decision = state
        .engine
        .evaluate(req.method().as_str(), req.uri().path(), ctx.identity());

    match decision {
        AccessDecision::Allow => next.run(req).await,
        denied => errors::decision_to_response(denied),
    }
}

fn resolve_identity(
    state: &AuthState,
    headers: &HeaderMap,
) -> Result<RequestIdentity, DirectoryError> {
    let Some(token) = extract_bearer(headers) else {
        return Ok(RequestIdentity::Anonymous);
    };

    let claims = match state.tokens.verify(token) {
        Ok(claims) => claims,
        Err(e) => {
            // All verification failure kinds collapse to anonymous here; the
            // kind is for the logs only.
            tracing::debug!(error = %e, "rejected bearer token");
            return Ok(RequestIdentity::Anonymous);
        }
    };

    match state.directory.find_by_subject(&claims.sub)? {
        Some(record) if record.identity.enabled => {
            Ok(RequestIdentity::Authenticated(record.identity))
        }
        Some(_) => {
            tracing::debug!(subject = %claims.sub, "token for disabled subject");
            Ok(RequestIdentity::Anonymous)
        }
        None => {
            tracing::debug!(subject = %claims.sub, "token for unknown subject");
            Ok(RequestIdentity::Anonymous)
        }
    }
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(axum::http::header::AUTHORIZATION)?;
    let header = header.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::AUTHORIZATION,
            HeaderValue::from_str(value).unwrap(),
        );
        headers
    }

    #[test]
    fn bearer_extraction() {
        assert_eq!(extract_bearer(&HeaderMap::new()), None);
        assert_eq!(extract_bearer(&headers_with("Basic abc")), None);
        assert_eq!(extract_bearer(&headers_with("Bearer ")), None);
        assert_eq!(extract_bearer(&headers_with("Bearer abc.def.ghi")), Some("abc.def.ghi"));
        assert_eq!(extract_bearer(&headers_with("Bearer  abc ")), Some("abc"));
    }
}
