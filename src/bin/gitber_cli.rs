use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::env;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use url::Url;

use gitber::formatter::{
    org_member_list_markdown, repository_list_markdown, search_history_markdown,
    user_profile_markdown,
};
use gitber::github::GitHubClient;
use gitber::github::client::{CLIENT_ID_ENV, CLIENT_SECRET_ENV, ClientCredentials};
use gitber::services::ProfileFetcher;
use gitber::types::{OrgName, Username};

/// Environment variable overriding the API base URL
const API_BASE_URL_ENV: &str = "GITBER_API_BASE_URL";

#[derive(Parser)]
#[command(name = "gitber-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Look up GitHub users, their repositories (with readme content) and organization members"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Output format for results - markdown provides formatted display, json for programmatic use
    #[arg(long, global = true, default_value = "markdown")]
    format: OutputFormat,
    /// Base URL of the GitHub REST API (can also be set via GITBER_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,
    /// OAuth client id appended to every request as a query parameter (can also be set via GITBER_CLIENT_ID)
    #[arg(long, global = true)]
    client_id: Option<String>,
    /// OAuth client secret appended to every request as a query parameter (can also be set via GITBER_CLIENT_SECRET)
    #[arg(long, global = true)]
    client_secret: Option<String>,
    /// Request timeout in seconds for API calls (default: 10 seconds)
    #[arg(long, global = true)]
    request_timeout: Option<u64>,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Json,
    Markdown,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a user profile together with their repositories and readmes
    User {
        /// GitHub username to look up
        username: String,
    },
    /// List a user's repositories with readme content
    Repos {
        /// GitHub username owning the repositories
        username: String,
    },
    /// List the members of an organization
    Members {
        /// GitHub organization name
        orgname: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("gitber=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let base_url = cli
        .base_url
        .or_else(|| env::var(API_BASE_URL_ENV).ok())
        .map(|raw| Url::parse(&raw).with_context(|| format!("Invalid API base URL: {}", raw)))
        .transpose()?;

    // Credentials from flags, falling back to the environment
    let client_id = cli
        .client_id
        .or_else(|| env::var(CLIENT_ID_ENV).ok());
    let client_secret = cli
        .client_secret
        .or_else(|| env::var(CLIENT_SECRET_ENV).ok());
    let credentials = match (client_id, client_secret) {
        (Some(client_id), Some(client_secret)) => {
            Some(ClientCredentials::new(client_id, client_secret))
        }
        _ => None,
    };

    let timeout = cli.request_timeout.map(Duration::from_secs);

    let client = GitHubClient::new(base_url, credentials, timeout)?;
    let fetcher = ProfileFetcher::new(client);

    match cli.command {
        Commands::User { username } => {
            let username = Username::from(username);

            // Profile and repository lookups go out together
            let (profile, repositories) = tokio::join!(
                fetcher.fetch_user(&username),
                fetcher.fetch_repositories(&username)
            );
            let profile = profile.with_context(|| format!("Failed to look up user {}", username))?;
            let repositories = repositories
                .with_context(|| format!("Failed to list repositories of {}", username))?;
            let recent = fetcher.recent_searches().await;

            match cli.format {
                OutputFormat::Json => {
                    let output = serde_json::json!({
                        "profile": profile,
                        "repositories": repositories,
                        "recent_searches": recent,
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Markdown => {
                    println!("{}", user_profile_markdown(&profile));
                    println!("{}", repository_list_markdown(&repositories));
                    println!("{}", search_history_markdown(&recent));
                }
            }
        }
        Commands::Repos { username } => {
            let username = Username::from(username);
            let repositories = fetcher
                .fetch_repositories(&username)
                .await
                .with_context(|| format!("Failed to list repositories of {}", username))?;

            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&repositories)?);
                }
                OutputFormat::Markdown => {
                    println!("{}", repository_list_markdown(&repositories));
                }
            }
        }
        Commands::Members { orgname } => {
            let orgname = OrgName::from(orgname);
            let members = fetcher
                .fetch_organization_members(&orgname)
                .await
                .with_context(|| format!("Failed to list members of {}", orgname))?;

            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&members)?);
                }
                OutputFormat::Markdown => {
                    println!("{}", org_member_list_markdown(&orgname, &members));
                }
            }
        }
    }

    Ok(())
}
