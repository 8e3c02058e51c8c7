use serde::{Deserialize, Serialize};

use crate::{Role, Subject};

/// A resolved identity as served by the credential directory.
///
/// Loaded per request, immutable for the remainder of that request, and
/// never persisted by this workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub subject: Subject,
    pub roles: Vec<Role>,
    pub enabled: bool,
}

impl Identity {
    pub fn new(subject: impl Into<Subject>, roles: Vec<Role>) -> Self {
        Self {
            subject: subject.into(),
            roles,
            enabled: true,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// The caller of the current request: either anonymous or a resolved identity.
///
/// Token-verification failures collapse to `Anonymous`; the authorization
/// layer is responsible for turning that into an unauthorized outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestIdentity {
    Anonymous,
    Authenticated(Identity),
}

impl RequestIdentity {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, RequestIdentity::Authenticated(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            RequestIdentity::Authenticated(identity) => Some(identity),
            RequestIdentity::Anonymous => None,
        }
    }
}
