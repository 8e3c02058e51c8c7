//! Canonical JSON error responses.
//!
//! Every failure leaving the gateway has the shape
//! `{status, error, message, timestamp}`. Unauthorized responses carry no
//! token-internal detail and forbidden responses never say which role
//! would have sufficed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use serde_json::json;

use authgate_auth::AccessDecision;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "status": status.as_u16(),
            "error": code,
            "message": message.into(),
            "timestamp": Utc::now().to_rfc3339(),
        })),
    )
        .into_response()
}

/// Map a deny decision onto the only two externally visible outcomes.
pub fn decision_to_response(decision: AccessDecision) -> axum::response::Response {
    match decision {
        AccessDecision::Allow => StatusCode::OK.into_response(),
        AccessDecision::Unauthorized => json_error(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "authentication required",
        ),
        AccessDecision::Forbidden => {
            json_error(StatusCode::FORBIDDEN, "forbidden", "access denied")
        }
    }
}
