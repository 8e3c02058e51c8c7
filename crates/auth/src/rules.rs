//! Static route rules: pattern + method → authorization requirement.
//!
//! Rules are loaded once at startup, immutable afterwards, and matched in
//! registration order (first match wins). Callers register specific
//! patterns before catch-alls.

use authgate_core::Role;

/// Authorization level required by a route rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// Allow unconditionally, identity or not.
    Public,

    /// Allow any non-anonymous identity.
    Authenticated,

    /// Allow if the expanded role set contains at least one of these roles.
    AnyRole(Vec<Role>),

    /// Allow if the expanded role set contains all of these roles.
    AllRoles(Vec<Role>),
}

/// Path pattern segment language: literals, `*` (exactly one segment) and a
/// trailing `**` (any remainder, including none).
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Any,
    Tail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Self {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match s {
                "**" => Segment::Tail,
                "*" => Segment::Any,
                literal => Segment::Literal(literal.to_string()),
            })
            .collect();
        Self { segments }
    }

    pub fn matches(&self, path: &str) -> bool {
        let mut path_segments = path.split('/').filter(|s| !s.is_empty());

        for segment in &self.segments {
            match segment {
                Segment::Tail => return true,
                Segment::Any => {
                    if path_segments.next().is_none() {
                        return false;
                    }
                }
                Segment::Literal(literal) => {
                    if path_segments.next() != Some(literal.as_str()) {
                        return false;
                    }
                }
            }
        }

        path_segments.next().is_none()
    }
}

/// One entry of the static route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRule {
    method: Option<String>,
    pattern: PathPattern,
    requirement: Requirement,
}

impl RouteRule {
    pub fn new(method: Option<&str>, pattern: &str, requirement: Requirement) -> Self {
        Self {
            method: method.map(str::to_ascii_uppercase),
            pattern: PathPattern::parse(pattern),
            requirement,
        }
    }

    /// Rule for any HTTP method.
    pub fn any(pattern: &str, requirement: Requirement) -> Self {
        Self::new(None, pattern, requirement)
    }

    pub fn get(pattern: &str, requirement: Requirement) -> Self {
        Self::new(Some("GET"), pattern, requirement)
    }

    pub fn post(pattern: &str, requirement: Requirement) -> Self {
        Self::new(Some("POST"), pattern, requirement)
    }

    pub fn delete(pattern: &str, requirement: Requirement) -> Self {
        Self::new(Some("DELETE"), pattern, requirement)
    }

    pub fn matches(&self, method: &str, path: &str) -> bool {
        let method_ok = match &self.method {
            Some(m) => m.eq_ignore_ascii_case(method),
            None => true,
        };
        method_ok && self.pattern.matches(path)
    }

    pub fn requirement(&self) -> &Requirement {
        &self.requirement
    }
}
