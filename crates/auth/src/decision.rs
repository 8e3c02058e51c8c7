//! Authorization decision engine.
//!
//! One evaluation per request: match the static route table, then check the
//! matched requirement against the caller's (hierarchy-expanded) roles.
//! Outcomes distinguish "nobody is here" from "somebody is here without the
//! right role" so the HTTP layer can answer 401 vs 403.

use std::collections::HashSet;

use authgate_core::{RequestIdentity, Role};

use crate::expr::RoleExpr;
use crate::hierarchy::RoleHierarchy;
use crate::rules::{Requirement, RouteRule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    /// No identity where one was required.
    Unauthorized,
    /// Identity present but the role requirement is not satisfied.
    Forbidden,
}

/// Immutable decision engine, built once at startup and shared read-only
/// across requests.
#[derive(Debug, Clone)]
pub struct DecisionEngine {
    rules: Vec<RouteRule>,
    hierarchy: RoleHierarchy,
}

impl DecisionEngine {
    pub fn new(rules: Vec<RouteRule>, hierarchy: RoleHierarchy) -> Self {
        Self { rules, hierarchy }
    }

    /// Route-level decision for `method path` on behalf of `who`.
    ///
    /// First matching rule wins. A request that matches no rule is
    /// default-denied as if the route required authentication; there is no
    /// implicit allow.
    pub fn evaluate(&self, method: &str, path: &str, who: &RequestIdentity) -> AccessDecision {
        let requirement = self
            .rules
            .iter()
            .find(|rule| rule.matches(method, path))
            .map(RouteRule::requirement)
            .unwrap_or(&Requirement::Authenticated);

        let decision = self.check_requirement(requirement, who);
        if decision != AccessDecision::Allow {
            tracing::debug!(method, path, ?decision, "request denied by route rules");
        }
        decision
    }

    /// Per-operation check, evaluated by a handler after the route-level
    /// decision allowed the request. An expression can only narrow access
    /// further; it is never consulted for routes the table already denied.
    pub fn check_operation(&self, who: &RequestIdentity, required: &RoleExpr) -> AccessDecision {
        let Some(identity) = who.identity() else {
            return AccessDecision::Unauthorized;
        };

        if required.eval(&self.hierarchy.expand(&identity.roles)) {
            AccessDecision::Allow
        } else {
            AccessDecision::Forbidden
        }
    }

    fn check_requirement(&self, requirement: &Requirement, who: &RequestIdentity) -> AccessDecision {
        match requirement {
            Requirement::Public => AccessDecision::Allow,
            Requirement::Authenticated => {
                if who.is_authenticated() {
                    AccessDecision::Allow
                } else {
                    AccessDecision::Unauthorized
                }
            }
            Requirement::AnyRole(roles) => self.check_roles(who, |granted| {
                roles.iter().any(|role| granted.contains(role))
            }),
            Requirement::AllRoles(roles) => self.check_roles(who, |granted| {
                roles.iter().all(|role| granted.contains(role))
            }),
        }
    }

    fn check_roles<F>(&self, who: &RequestIdentity, satisfied: F) -> AccessDecision
    where
        F: FnOnce(&HashSet<Role>) -> bool,
    {
        let Some(identity) = who.identity() else {
            return AccessDecision::Unauthorized;
        };

        if satisfied(&self.hierarchy.expand(&identity.roles)) {
            AccessDecision::Allow
        } else {
            AccessDecision::Forbidden
        }
    }
}
