//! Application wiring: configuration, the static route table, and the
//! axum router with its middleware pipeline.
//!
//! Layout:
//! - `routes/`: HTTP handlers (one file per access tier)
//! - `dto.rs`: request/response bodies
//! - `errors.rs`: canonical JSON error responses

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower::ServiceBuilder;

use authgate_auth::{
    CredentialDirectory, DecisionEngine, Requirement, RoleHierarchy, RouteRule, TokenService,
};
use authgate_core::Role;

use crate::middleware::{self, AuthState};

pub mod dto;
pub mod errors;
pub mod routes;

/// Configuration consumed by the gateway core: signing secret, token TTL,
/// bind address. Route rules are code, registered in [`route_rules`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jwt_secret: String,
    pub token_ttl: chrono::Duration,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("AUTHGATE_JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("AUTHGATE_JWT_SECRET not set; using insecure dev default");
            "dev-secret".to_string()
        });

        let ttl_secs = std::env::var("AUTHGATE_TOKEN_TTL_SECS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(3600);

        let bind_addr =
            std::env::var("AUTHGATE_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        Self {
            jwt_secret,
            token_ttl: chrono::Duration::seconds(ttl_secs),
            bind_addr,
        }
    }
}

/// The ordered route table. First match wins, so specific patterns come
/// before catch-alls; anything not listed falls through to the engine's
/// default-deny.
fn route_rules() -> Vec<RouteRule> {
    vec![
        RouteRule::post("/api/auth/login", Requirement::Public),
        RouteRule::get("/", Requirement::Public),
        RouteRule::get("/health", Requirement::Public),
        RouteRule::any("/api/public/**", Requirement::Public),
        RouteRule::any("/api/user/**", Requirement::Authenticated),
        RouteRule::any("/api/moderator/**", Requirement::AnyRole(vec![Role::MODERATOR])),
        RouteRule::any("/api/admin/**", Requirement::AnyRole(vec![Role::ADMIN])),
    ]
}

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(config: &AppConfig, directory: Arc<dyn CredentialDirectory>) -> Router {
    let tokens = Arc::new(TokenService::new(
        config.jwt_secret.as_bytes(),
        config.token_ttl,
    ));
    let engine = Arc::new(DecisionEngine::new(route_rules(), RoleHierarchy::default()));

    let state = AuthState {
        tokens,
        directory,
        engine,
    };

    Router::new()
        .route("/", get(routes::public::home))
        .route("/health", get(routes::public::health))
        .route("/api/public/info", get(routes::public::info))
        .route("/api/auth/login", post(routes::auth::login))
        .route("/api/user/me", get(routes::user::me))
        .route("/api/moderator/dashboard", get(routes::moderator::dashboard))
        .route("/api/admin/users", get(routes::admin::list_users))
        .route("/api/admin/users/:id", delete(routes::admin::delete_user))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    middleware::authenticate,
                ))
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    middleware::authorize,
                )),
        )
        .with_state(state)
}
