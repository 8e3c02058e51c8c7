//! Endpoints gated on the MODERATOR role (ADMIN inherits it).

use axum::Json;
use axum::extract::Extension;
use serde_json::{Value, json};

use crate::context::RequestContext;

pub async fn dashboard(Extension(ctx): Extension<RequestContext>) -> Json<Value> {
    let subject = ctx
        .identity()
        .identity()
        .map(|i| i.subject.to_string())
        .unwrap_or_default();

    Json(json!({
        "message": "moderation dashboard",
        "subject": subject,
    }))
}
