//! Lookup service combining the REST client with the search history
//!
//! The fetcher owns the history and updates it as a side effect of user
//! lookups. Enrichment callbacks and callers may run on different runtime
//! threads, so the history sits behind a mutex.

use tokio::sync::Mutex;

use crate::github::GitHubClient;
use crate::github::error::ApiError;
use crate::services::history::SearchHistory;
use crate::types::{OrgMember, OrgName, Repository, UserProfile, Username};

/// Issues lookups against the API and tracks searched usernames
pub struct ProfileFetcher {
    client: GitHubClient,
    history: Mutex<SearchHistory>,
}

impl ProfileFetcher {
    /// Creates a new ProfileFetcher with an empty search history
    pub fn new(client: GitHubClient) -> Self {
        Self {
            client,
            history: Mutex::new(SearchHistory::new()),
        }
    }

    /// Look up a user profile, recording the username in the history.
    ///
    /// The username is recorded before the request goes out, so the
    /// history gains the attempted name even when the lookup fails. The
    /// failure itself propagates to the caller.
    pub async fn fetch_user(&self, username: &Username) -> Result<UserProfile, ApiError> {
        self.history.lock().await.record(username.clone());
        self.client.fetch_user(username).await
    }

    /// Look up a user's repositories with readme enrichment
    pub async fn fetch_repositories(&self, username: &Username) -> Result<Vec<Repository>, ApiError> {
        self.client.fetch_repositories(username).await
    }

    /// Look up an organization's member list
    pub async fn fetch_organization_members(
        &self,
        orgname: &OrgName,
    ) -> Result<Vec<OrgMember>, ApiError> {
        self.client.fetch_organization_members(orgname).await
    }

    /// Remove a username from the search history
    pub async fn forget_user(&self, username: &Username) {
        self.history.lock().await.forget(username);
    }

    /// Snapshot of the searched usernames, most-recent first
    pub async fn recent_searches(&self) -> Vec<Username> {
        self.history.lock().await.entries().to_vec()
    }
}
