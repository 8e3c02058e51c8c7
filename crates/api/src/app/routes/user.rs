//! Endpoints for any authenticated caller.

use axum::Json;
use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use authgate_core::RequestIdentity;

use crate::app::errors;
use crate::context::RequestContext;

/// Echo the resolved identity from the request context.
pub async fn me(Extension(ctx): Extension<RequestContext>) -> Response {
    match ctx.identity() {
        RequestIdentity::Authenticated(identity) => (
            StatusCode::OK,
            Json(json!({
                "subject": identity.subject,
                "roles": identity.roles,
            })),
        )
            .into_response(),
        // The route table requires authentication here; reaching this arm
        // would mean the pipeline was bypassed.
        RequestIdentity::Anonymous => errors::json_error(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "authentication required",
        ),
    }
}
