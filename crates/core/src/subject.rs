use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier of a principal (the token `sub` claim).
///
/// Subjects are opaque usernames at this layer; lookup semantics belong to
/// the credential directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Subject(String);

impl Subject {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Subject {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Subject {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl FromStr for Subject {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_is_trimmed() {
        assert_eq!(Subject::new("  alice "), Subject::new("alice"));
        assert_eq!(Subject::new("alice").as_str(), "alice");
    }

    #[test]
    fn subject_is_case_sensitive() {
        assert_ne!(Subject::new("Alice"), Subject::new("alice"));
    }
}
