//! `authgate-core` — domain foundation for the authentication gateway.
//!
//! This crate contains **pure domain** primitives (no I/O, no framework types).

pub mod identity;
pub mod role;
pub mod subject;

pub use identity::{Identity, RequestIdentity};
pub use role::Role;
pub use subject::Subject;
