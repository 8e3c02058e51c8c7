//! Boolean role expressions attached to individual operations.
//!
//! A route rule gates a whole path; an operation can carry a finer
//! expression that further restricts — never widens — what the route
//! already permitted. Expressions are a small interpreted tree, so no
//! reflection or attribute machinery is involved.

use std::collections::HashSet;

use authgate_core::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleExpr {
    /// The expanded role set contains this role.
    Has(Role),
    /// All sub-expressions hold. Empty `And` is true.
    And(Vec<RoleExpr>),
    /// At least one sub-expression holds. Empty `Or` is false.
    Or(Vec<RoleExpr>),
    Not(Box<RoleExpr>),
}

impl RoleExpr {
    pub fn has(role: Role) -> Self {
        RoleExpr::Has(role)
    }

    pub fn any_of(roles: impl IntoIterator<Item = Role>) -> Self {
        RoleExpr::Or(roles.into_iter().map(RoleExpr::Has).collect())
    }

    pub fn all_of(roles: impl IntoIterator<Item = Role>) -> Self {
        RoleExpr::And(roles.into_iter().map(RoleExpr::Has).collect())
    }

    pub fn not(expr: RoleExpr) -> Self {
        RoleExpr::Not(Box::new(expr))
    }

    /// Evaluate against a hierarchy-expanded role set.
    pub fn eval(&self, granted: &HashSet<Role>) -> bool {
        match self {
            RoleExpr::Has(role) => granted.contains(role),
            RoleExpr::And(exprs) => exprs.iter().all(|e| e.eval(granted)),
            RoleExpr::Or(exprs) => exprs.iter().any(|e| e.eval(granted)),
            RoleExpr::Not(expr) => !expr.eval(granted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn granted(roles: &[Role]) -> HashSet<Role> {
        roles.iter().cloned().collect()
    }

    #[test]
    fn has_checks_membership() {
        let expr = RoleExpr::has(Role::ADMIN);
        assert!(expr.eval(&granted(&[Role::ADMIN, Role::USER])));
        assert!(!expr.eval(&granted(&[Role::USER])));
    }

    #[test]
    fn any_of_is_a_disjunction() {
        let expr = RoleExpr::any_of([Role::MODERATOR, Role::ADMIN]);
        assert!(expr.eval(&granted(&[Role::MODERATOR])));
        assert!(!expr.eval(&granted(&[Role::USER])));
    }

    #[test]
    fn all_of_is_a_conjunction() {
        let auditor = Role::new("AUDITOR");
        let expr = RoleExpr::all_of([Role::ADMIN, auditor.clone()]);
        assert!(expr.eval(&granted(&[Role::ADMIN, auditor])));
        assert!(!expr.eval(&granted(&[Role::ADMIN])));
    }

    #[test]
    fn not_inverts() {
        let expr = RoleExpr::And(vec![
            RoleExpr::has(Role::MODERATOR),
            RoleExpr::not(RoleExpr::has(Role::ADMIN)),
        ]);
        assert!(expr.eval(&granted(&[Role::MODERATOR])));
        assert!(!expr.eval(&granted(&[Role::MODERATOR, Role::ADMIN])));
    }

    #[test]
    fn empty_connectives() {
        assert!(RoleExpr::And(vec![]).eval(&granted(&[])));
        assert!(!RoleExpr::Or(vec![]).eval(&granted(&[Role::ADMIN])));
    }
}
