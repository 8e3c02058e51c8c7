//! `authgate-auth` — pure authentication/authorization core.
//!
//! This crate is intentionally decoupled from HTTP and storage: the token
//! service, role hierarchy, route rules and decision engine are in-memory
//! computations, and the only outward contract is [`CredentialDirectory`].

pub mod claims;
pub mod decision;
pub mod directory;
pub mod expr;
pub mod hierarchy;
pub mod login;
pub mod rules;
pub mod token;

pub use claims::Claims;
pub use decision::{AccessDecision, DecisionEngine};
pub use directory::{CredentialDirectory, CredentialRecord, DirectoryError};
pub use expr::RoleExpr;
pub use hierarchy::RoleHierarchy;
pub use login::{LoginError, login};
pub use rules::{Requirement, RouteRule};
pub use token::{TokenError, TokenService};
