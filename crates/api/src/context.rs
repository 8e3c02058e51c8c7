use authgate_core::RequestIdentity;

/// Per-request identity holder.
///
/// Created once by the authentication middleware, carried as a request
/// extension, and dropped with the request — it never outlives or crosses
/// requests, including on early abort. The resolved identity is private and
/// only readable, so the context is immutable for the rest of request
/// processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    identity: RequestIdentity,
}

impl RequestContext {
    pub fn new(identity: RequestIdentity) -> Self {
        Self { identity }
    }

    pub fn anonymous() -> Self {
        Self::new(RequestIdentity::Anonymous)
    }

    pub fn identity(&self) -> &RequestIdentity {
        &self.identity
    }
}
