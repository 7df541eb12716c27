//! Organization types for member listings

use serde::{Deserialize, Serialize};

use super::Username;

/// Organization name wrapper for type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrgName(pub String);

impl OrgName {
    /// Create new organization name
    pub fn new(name: String) -> Self {
        Self(name)
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrgName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OrgName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for OrgName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Organization member as returned by `GET /orgs/{org}/members`
///
/// Pass-through structure, no derived fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgMember {
    pub login: Username,
    pub id: u64,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
    #[serde(default)]
    pub site_admin: bool,
}
