//! Repository domain types and readme enrichment state
//!
//! This module contains the repository payload returned by the repository
//! list endpoint, together with the typed readme outcome attached to each
//! repository during enrichment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

use super::Username;

/// Text rendered in place of readme content when none could be retrieved
pub const NO_README_FALLBACK: &str = "No readme found";

/// Repository name wrapper for type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct RepositoryName(pub String);

impl RepositoryName {
    /// Create new repository name
    pub fn new(repo_name: String) -> Self {
        Self(repo_name)
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to String
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RepositoryName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RepositoryName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Owning account of a repository, as embedded in the repository payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryOwner {
    pub login: Username,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
}

/// Outcome of a readme lookup for a single repository
///
/// The fetch layer keeps the failure kind intact: a repository without a
/// readme file is `NotFound`, not an error and not yet a display string.
/// `text()` maps `NotFound` to [`NO_README_FALLBACK`] at the presentation
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Readme {
    /// Decoded readme content
    Content(String),
    /// The repository has no retrievable readme
    #[default]
    NotFound,
}

impl Readme {
    /// Readme text for display, with the fallback for missing readmes
    pub fn text(&self) -> &str {
        match self {
            Self::Content(content) => content,
            Self::NotFound => NO_README_FALLBACK,
        }
    }

    /// Whether readme content was retrieved
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Content(_))
    }
}

impl Serialize for Readme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.text())
    }
}

/// Repository as returned by `GET /users/{username}/repos`
///
/// API fields pass through unchanged. The `readme` field is not part of the
/// payload: it starts as `NotFound` and is filled in by the readme
/// enrichment after the list is fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: RepositoryName,
    pub full_name: String,
    pub owner: RepositoryOwner,
    pub description: Option<String>,
    pub html_url: String,
    pub language: Option<String>,
    pub fork: bool,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pushed_at: Option<DateTime<Utc>>,
    #[serde(skip_deserializing)]
    pub readme: Readme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readme_text_falls_back_when_not_found() {
        assert_eq!(Readme::NotFound.text(), NO_README_FALLBACK);
        assert_eq!(Readme::Content("# hi".to_string()).text(), "# hi");
    }

    #[test]
    fn repository_deserializes_without_readme_field() {
        let payload = serde_json::json!({
            "id": 1,
            "name": "hello-world",
            "full_name": "octocat/hello-world",
            "owner": {"login": "octocat", "avatar_url": null, "html_url": null},
            "description": null,
            "html_url": "https://github.com/octocat/hello-world",
            "language": "Rust",
            "fork": false,
            "stargazers_count": 3,
            "forks_count": 1,
            "created_at": "2020-01-01T00:00:00Z",
            "updated_at": "2020-06-01T00:00:00Z",
            "pushed_at": null
        });

        let repository: Repository = serde_json::from_value(payload).unwrap();
        assert_eq!(repository.name.as_str(), "hello-world");
        assert_eq!(repository.readme, Readme::NotFound);
    }

    #[test]
    fn readme_serializes_as_display_text() {
        let found = serde_json::to_value(Readme::Content("hello".to_string())).unwrap();
        assert_eq!(found, serde_json::json!("hello"));

        let missing = serde_json::to_value(Readme::NotFound).unwrap();
        assert_eq!(missing, serde_json::json!(NO_README_FALLBACK));
    }
}
