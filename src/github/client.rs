//! REST client for user, repository and organization lookups
//!
//! The client talks to a configurable API base URL and decorates every
//! request with client-id/secret query credentials when they are
//! configured. Primary fetches surface failures unchanged; the readme
//! enrichment is the only place failures are absorbed.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use futures::stream::{self, StreamExt};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::github::error::ApiError;
use crate::types::{OrgMember, OrgName, Readme, Repository, RepositoryName, UserProfile, Username};

/// Public GitHub REST API endpoint used when no base URL is configured
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Environment variable holding the OAuth client id
pub const CLIENT_ID_ENV: &str = "GITBER_CLIENT_ID";

/// Environment variable holding the OAuth client secret
pub const CLIENT_SECRET_ENV: &str = "GITBER_CLIENT_SECRET";

/// Maximum number of readme requests in flight during enrichment
const README_FETCH_CONCURRENCY: usize = 10;

const CLIENT_USER_AGENT: &str = concat!("gitber/", env!("CARGO_PKG_VERSION"));
const GITHUB_V3_ACCEPT: &str = "application/vnd.github.v3+json";

/// Client-id/secret pair appended to every request as query parameters
///
/// Credentials are configuration, never compiled into source. The usual
/// supply path is the environment ([`CLIENT_ID_ENV`] / [`CLIENT_SECRET_ENV`]).
#[derive(Debug, Clone)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl ClientCredentials {
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self {
            client_id,
            client_secret,
        }
    }

    /// Read credentials from the environment; both variables must be set
    pub fn from_env() -> Option<Self> {
        let client_id = env::var(CLIENT_ID_ENV).ok()?;
        let client_secret = env::var(CLIENT_SECRET_ENV).ok()?;
        Some(Self::new(client_id, client_secret))
    }
}

/// Readme payload of `GET /repos/{owner}/{repo}/readme`
///
/// Only the transport-encoded content matters here; the rest of the
/// payload is ignored.
#[derive(Debug, Deserialize)]
struct ReadmePayload {
    content: String,
}

#[derive(Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Option<ClientCredentials>,
}

impl GitHubClient {
    pub fn new(
        base_url: Option<Url>,
        credentials: Option<ClientCredentials>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_V3_ACCEPT));

        let timeout = timeout.unwrap_or_else(|| Duration::from_secs(10));
        let connect_timeout = std::cmp::min(timeout, Duration::from_secs(10));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let base_url = match base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_API_BASE_URL).context("Failed to parse API base URL")?,
        };

        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    /// Fetches a user profile by username.
    ///
    /// Performs a single `GET /users/{username}`. A failed request
    /// propagates to the caller unchanged; there is no retry.
    pub async fn fetch_user(&self, username: &Username) -> Result<UserProfile, ApiError> {
        let url = self.endpoint(&["users", username.as_str()])?;
        self.get_json(url).await
    }

    /// Fetches the repositories owned by a user, with readme enrichment.
    ///
    /// Performs `GET /users/{username}/repos`, then fetches every
    /// repository's readme concurrently (up to [`README_FETCH_CONCURRENCY`]
    /// at a time). The returned list resolves only once every repository
    /// carries its readme outcome.
    ///
    /// Failure of the list fetch propagates. Failures of individual readme
    /// fetches never do: a missing readme is [`Readme::NotFound`], and any
    /// other readme error is absorbed into the same state with a warning.
    pub async fn fetch_repositories(&self, username: &Username) -> Result<Vec<Repository>, ApiError> {
        let url = self.endpoint(&["users", username.as_str(), "repos"])?;
        let mut repositories: Vec<Repository> = self.get_json(url).await?;

        debug!(
            "Fetched {} repositories for {}, starting readme enrichment",
            repositories.len(),
            username
        );

        let fetches = repositories.iter().enumerate().map(|(index, repository)| {
            let repository_name = repository.name.clone();
            async move {
                let readme = match self.fetch_readme(username, &repository_name).await {
                    Ok(readme) => readme,
                    Err(e) => {
                        warn!(
                            "Failed to fetch readme for {}/{}: {}",
                            username, repository_name, e
                        );
                        Readme::NotFound
                    }
                };
                (index, readme)
            }
        });

        let settled: Vec<(usize, Readme)> = stream::iter(fetches)
            .buffer_unordered(README_FETCH_CONCURRENCY)
            .collect()
            .await;

        for (index, readme) in settled {
            repositories[index].readme = readme;
        }

        Ok(repositories)
    }

    /// Fetches a single repository's readme.
    ///
    /// A 404 response means the repository has no readme file and maps to
    /// `Ok(Readme::NotFound)`. Every other failure, including a payload
    /// that cannot be base64/UTF-8 decoded, is an error; callers decide
    /// whether to absorb it.
    pub async fn fetch_readme(
        &self,
        owner: &Username,
        repository: &RepositoryName,
    ) -> Result<Readme, ApiError> {
        let url = self.endpoint(&["repos", owner.as_str(), repository.as_str(), "readme"])?;
        let payload: ReadmePayload = match self.get_json(url).await {
            Ok(payload) => payload,
            Err(e) if e.is_not_found() => {
                debug!("No readme for {}/{}", owner, repository);
                return Ok(Readme::NotFound);
            }
            Err(e) => return Err(e),
        };

        decode_readme_content(&payload.content).map(Readme::Content)
    }

    /// Fetches the member list of an organization.
    ///
    /// Performs a single `GET /orgs/{orgname}/members` and returns the
    /// decoded payload verbatim. No enrichment, no failure translation.
    pub async fn fetch_organization_members(
        &self,
        orgname: &OrgName,
    ) -> Result<Vec<OrgMember>, ApiError> {
        let url = self.endpoint(&["orgs", orgname.as_str(), "members"])?;
        self.get_json(url).await
    }

    /// Build a request URL from path segments, appending credentials
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ApiError::Decode("API base URL cannot be a base".to_string()))?;
            path.pop_if_empty();
            path.extend(segments);
        }

        if let Some(credentials) = &self.credentials {
            url.query_pairs_mut()
                .append_pair("client_id", &credentials.client_id)
                .append_pair("client_secret", &credentials.client_secret);
        }

        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        // Log and report the path only; the query string carries credentials.
        let path = url.path().to_string();
        debug!("GET {}", path);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, path, message));
        }

        response.json::<T>().await.map_err(ApiError::from_reqwest)
    }
}

/// Decode readme content from its base64 transport encoding into text
///
/// The API line-wraps the base64 payload, so embedded whitespace is
/// stripped before decoding.
fn decode_readme_content(content: &str) -> Result<String, ApiError> {
    let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();

    let bytes = BASE64_STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| ApiError::Decode(format!("Invalid base64 readme content: {}", e)))?;

    String::from_utf8(bytes)
        .map_err(|e| ApiError::Decode(format!("Readme content is not valid UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plain_base64_content() {
        assert_eq!(decode_readme_content("aGVsbG8=").unwrap(), "hello");
    }

    #[test]
    fn decodes_line_wrapped_content() {
        // "# Hello\n\nWorld\n" as the API delivers it, wrapped mid-stream
        let wrapped = "IyBIZWxs\nbwoKV29y\nbGQK\n";
        assert_eq!(decode_readme_content(wrapped).unwrap(), "# Hello\n\nWorld\n");
    }

    #[test]
    fn rejects_invalid_base64() {
        let err = decode_readme_content("not base64!").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn endpoint_appends_credentials_when_configured() {
        let client = GitHubClient::new(
            None,
            Some(ClientCredentials::new(
                "client-id".to_string(),
                "client-secret".to_string(),
            )),
            None,
        )
        .unwrap();

        let url = client.endpoint(&["users", "octocat"]).unwrap();
        assert_eq!(url.path(), "/users/octocat");
        assert_eq!(
            url.query(),
            Some("client_id=client-id&client_secret=client-secret")
        );
    }

    #[test]
    fn endpoint_leaves_query_empty_without_credentials() {
        let client = GitHubClient::new(None, None, None).unwrap();
        let url = client.endpoint(&["orgs", "rust-lang", "members"]).unwrap();
        assert_eq!(url.path(), "/orgs/rust-lang/members");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn endpoint_encodes_unusual_segments() {
        let client = GitHubClient::new(None, None, None).unwrap();
        let url = client.endpoint(&["users", "odd name/x"]).unwrap();
        assert_eq!(url.path(), "/users/odd%20name%2Fx");
    }
}
