//! Shared helpers for lookup integration tests
//!
//! All tests run against local mockito servers, so no network access or
//! credentials are required.

use std::time::Duration;

use url::Url;

use gitber::github::GitHubClient;
use gitber::github::client::ClientCredentials;
use gitber::services::ProfileFetcher;

/// Creates a client pointed at a mock server
pub fn test_client(base_url: &str) -> GitHubClient {
    GitHubClient::new(
        Some(Url::parse(base_url).expect("Invalid mock server URL")),
        None,
        Some(Duration::from_secs(5)),
    )
    .expect("Failed to create client for testing")
}

/// Creates a client with query-string credentials configured
#[allow(dead_code)]
pub fn test_client_with_credentials(
    base_url: &str,
    client_id: &str,
    client_secret: &str,
) -> GitHubClient {
    GitHubClient::new(
        Some(Url::parse(base_url).expect("Invalid mock server URL")),
        Some(ClientCredentials::new(
            client_id.to_string(),
            client_secret.to_string(),
        )),
        Some(Duration::from_secs(5)),
    )
    .expect("Failed to create client for testing")
}

/// Creates a fetcher with an empty history pointed at a mock server
#[allow(dead_code)]
pub fn test_fetcher(base_url: &str) -> ProfileFetcher {
    ProfileFetcher::new(test_client(base_url))
}

/// Minimal user profile payload for the given login
#[allow(dead_code)]
pub fn user_profile_body(login: &str) -> String {
    serde_json::json!({
        "login": login,
        "id": 583231,
        "avatar_url": format!("https://avatars.example.com/{}", login),
        "html_url": format!("https://github.com/{}", login),
        "name": "The Octocat",
        "company": "@github",
        "blog": "https://github.blog",
        "location": "San Francisco",
        "email": null,
        "bio": null,
        "public_repos": 8,
        "followers": 10000,
        "following": 9,
        "created_at": "2011-01-25T18:44:36Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
    .to_string()
}

/// Minimal repository payload element for the given owner and name
#[allow(dead_code)]
pub fn repository_body(owner: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": 1296269,
        "name": name,
        "full_name": format!("{}/{}", owner, name),
        "owner": {
            "login": owner,
            "avatar_url": format!("https://avatars.example.com/{}", owner),
            "html_url": format!("https://github.com/{}", owner)
        },
        "description": "This your first repo!",
        "html_url": format!("https://github.com/{}/{}", owner, name),
        "language": "Rust",
        "fork": false,
        "stargazers_count": 80,
        "forks_count": 9,
        "created_at": "2011-01-26T19:01:12Z",
        "updated_at": "2011-01-26T19:14:43Z",
        "pushed_at": "2011-01-26T19:06:43Z"
    })
}
