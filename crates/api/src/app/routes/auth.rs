//! Login endpoint: the only place tokens are minted.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use authgate_auth::LoginError;
use authgate_core::Subject;

use crate::app::dto::{LoginRequest, LoginResponse};
use crate::app::errors;
use crate::middleware::AuthState;

pub async fn login(State(state): State<AuthState>, Json(body): Json<LoginRequest>) -> Response {
    let subject = Subject::new(body.username);

    match authgate_auth::login(
        state.directory.as_ref(),
        &state.tokens,
        &subject,
        &body.password,
    ) {
        Ok(token) => (StatusCode::OK, Json(LoginResponse::bearer(token))).into_response(),
        // Unknown subject, wrong password and disabled account are
        // indistinguishable on the wire.
        Err(LoginError::AuthenticationFailed) => errors::json_error(
            StatusCode::UNAUTHORIZED,
            "authentication_failed",
            "invalid credentials",
        ),
        Err(LoginError::Directory(e)) => {
            tracing::error!(error = %e, "login failed on directory lookup");
            errors::json_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "directory_unavailable",
                "credential directory unavailable",
            )
        }
        Err(LoginError::Token(e)) => {
            tracing::error!(error = %e, "token issuance failed");
            errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "token_issuance_failed",
                "failed to issue token",
            )
        }
    }
}
