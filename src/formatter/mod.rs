pub mod organization;
pub mod repository;
pub mod user;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use organization::*;
pub use repository::*;
pub use user::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownContent(pub String);

impl MarkdownContent {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MarkdownContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Render a timestamp as "5 August 2026"
pub fn format_date(datetime: DateTime<Utc>) -> String {
    datetime.format("%-d %B %Y").to_string()
}
