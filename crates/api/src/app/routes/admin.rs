//! Admin endpoints.
//!
//! The route table already requires ADMIN for `/api/admin/**`; the delete
//! handler additionally carries a per-operation expression, the
//! fine-grained equivalent of a method-level guard.

use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use authgate_auth::RoleExpr;
use authgate_core::Role;

use crate::authz;
use crate::context::RequestContext;
use crate::middleware::AuthState;

pub async fn list_users(Extension(ctx): Extension<RequestContext>) -> Response {
    let subject = ctx
        .identity()
        .identity()
        .map(|i| i.subject.to_string())
        .unwrap_or_default();

    (
        StatusCode::OK,
        Json(json!({
            "message": "user listing",
            "requested_by": subject,
        })),
    )
        .into_response()
}

pub async fn delete_user(
    State(state): State<AuthState>,
    Extension(ctx): Extension<RequestContext>,
    Path(id): Path<String>,
) -> Response {
    let required = RoleExpr::has(Role::ADMIN);
    if let Err(denied) = authz::require(&state.engine, &ctx, &required) {
        return denied;
    }

    (
        StatusCode::OK,
        Json(json!({
            "message": "user deleted",
            "id": id,
        })),
    )
        .into_response()
}
