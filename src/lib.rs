/// Output formatting utilities for Markdown representations
pub mod formatter;

/// GitHub API client implementation for fetching user, repository and
/// organization data
pub mod github;

/// Core services for lookups and search-history tracking
pub mod services;

/// Core type definitions and domain models used throughout the library
pub mod types;
