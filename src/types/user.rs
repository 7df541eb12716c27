//! User identification and profile types
//!
//! This module provides the username wrapper used for lookups and history
//! tracking, plus the profile payload returned by the user endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Username wrapper type for GitHub account names
///
/// Comparison is case-sensitive: the search history treats "Octocat" and
/// "octocat" as distinct entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Creates a new Username with the specified account name
    pub fn new(username: String) -> Self {
        Self(username)
    }

    /// Get the username as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Username {
    fn from(s: &str) -> Self {
        Username::new(s.to_string())
    }
}

impl From<String> for Username {
    fn from(s: String) -> Self {
        Username::new(s)
    }
}

impl PartialEq<str> for Username {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Username {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// User profile as returned by `GET /users/{username}`
///
/// Fields the API reports as nullable stay `Option`; unknown fields in the
/// payload are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub login: Username,
    pub id: u64,
    pub avatar_url: String,
    pub html_url: String,
    pub name: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
