use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role tag used for access control decisions.
///
/// Roles are opaque tags compared via a canonical form: trimmed, uppercased,
/// with a legacy `ROLE_` prefix stripped (so `"role_admin"`, `"ROLE_ADMIN"`
/// and `"admin"` all name the same role). Hierarchy semantics live in the
/// policy layer, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct Role(Cow<'static, str>);

impl Role {
    pub const USER: Role = Role(Cow::Borrowed("USER"));
    pub const MODERATOR: Role = Role(Cow::Borrowed("MODERATOR"));
    pub const ADMIN: Role = Role(Cow::Borrowed("ADMIN"));

    pub fn new(name: impl AsRef<str>) -> Self {
        let canonical = name.as_ref().trim().to_ascii_uppercase();
        let canonical = canonical
            .strip_prefix("ROLE_")
            .map(str::to_string)
            .unwrap_or(canonical);
        Self(Cow::Owned(canonical))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        value.0.into_owned()
    }
}
