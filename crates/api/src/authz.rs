//! Per-operation authorization guard.
//!
//! Route rules gate whole paths in the middleware; handlers that need a
//! finer check call [`require`] with a role expression before doing any
//! work. An expression can only narrow what the route table already
//! allowed, because it is evaluated after that check passed.

use axum::response::Response;

use authgate_auth::{AccessDecision, DecisionEngine, RoleExpr};

use crate::app::errors;
use crate::context::RequestContext;

/// Enforce a per-operation role expression in the current request context.
pub fn require(
    engine: &DecisionEngine,
    ctx: &RequestContext,
    required: &RoleExpr,
) -> Result<(), Response> {
    match engine.check_operation(ctx.identity(), required) {
        AccessDecision::Allow => Ok(()),
        denied => Err(errors::decision_to_response(denied)),
    }
}
