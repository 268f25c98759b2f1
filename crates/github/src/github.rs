//! GitHub REST API issue lookups.
//!
//! The client wraps a single endpoint
//! (`GET /repos/{owner}/{repo}/issues/{number}`) and normalizes every
//! expected failure into [`IssueLookup::Missing`] so the validation
//! pipeline can categorize candidate numbers instead of aborting. The
//! request policy favors fast, deterministic feedback: a short timeout and
//! at most one retry, never for 404 or 429 responses.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    errors::Error,
    models::{Issue, IssueLookup, LookupError, LookupErrorKind},
    IssueProvider,
};

#[cfg(test)]
#[path = "github_tests.rs"]
mod tests;

/// REST API base for github.com.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Per-request timeout. Kept short so a slow or unreachable API surfaces
/// as a lookup error within the same interactive command.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(1);

/// User agent sent with every API request.
const USER_AGENT: &str = "issue-warden";

const ACCEPT_HEADER: &str = "application/vnd.github+json";

/// Wire shape of the issues endpoint; only the consumed fields.
#[derive(Debug, Deserialize)]
struct IssueResponse {
    number: u64,
    state: Option<String>,
    title: Option<String>,
    body: Option<String>,
}

/// Issue lookup client for the GitHub REST API v3.
///
/// The client is stateless per lookup; construct it once per invocation
/// with the resolved API base and optional token.
///
/// # Examples
///
/// ```rust,no_run
/// use issue_warden_github::IssueProvider;
/// use issue_warden_github::github::{GitHubIssueClient, DEFAULT_API_BASE};
///
/// # async fn example() -> Result<(), issue_warden_github::errors::Error> {
/// let client = GitHubIssueClient::new(DEFAULT_API_BASE, None)?;
/// let lookup = client.get_issue("octocat", "hello-world", 42).await?;
/// println!("{:?}", lookup);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GitHubIssueClient {
    client: reqwest::Client,
    api_base: String,
    token: Option<String>,
}

impl GitHubIssueClient {
    /// Creates a client against the given API base.
    ///
    /// # Arguments
    ///
    /// * `api_base` - REST API base, e.g. `https://api.github.com` or
    ///   `https://ghe.example.com/api/v3`
    /// * `token` - Bearer token, or `None` for anonymous requests
    pub fn new(api_base: impl Into<String>, token: Option<String>) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::ApiError(format!("Failed to build the HTTP client: {}", e)))?;

        let api_base = api_base.into().trim_end_matches('/').to_string();

        Ok(Self {
            client,
            api_base,
            token,
        })
    }

    fn issue_url(&self, owner: &str, repo: &str, number: u64) -> String {
        format!(
            "{}/repos/{}/{}/issues/{}",
            self.api_base, owner, repo, number
        )
    }

    async fn send_once(&self, url: &str) -> Result<reqwest::Response, reqwest::Error> {
        let mut request = self.client.get(url).header(header::ACCEPT, ACCEPT_HEADER);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        request.send().await
    }

    /// Sends the request with at most one retry.
    ///
    /// Only transport failures and server errors are retried; client
    /// errors (404 and 429 included) are returned as-is.
    async fn send_with_retry(&self, url: &str) -> Result<reqwest::Response, reqwest::Error> {
        match self.send_once(url).await {
            Ok(response) if response.status().is_server_error() => {
                debug!(
                    status = response.status().as_u16(),
                    "Retrying issue lookup after server error"
                );
                self.send_once(url).await
            }
            Ok(response) => Ok(response),
            Err(error) => {
                debug!(
                    error = error.to_string(),
                    "Retrying issue lookup after transport error"
                );
                self.send_once(url).await
            }
        }
    }
}

#[async_trait]
impl IssueProvider for GitHubIssueClient {
    #[instrument(skip(self))]
    async fn get_issue(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<IssueLookup, Error> {
        let url = self.issue_url(owner, repo, number);

        let response = match self.send_with_retry(&url).await {
            Ok(response) => response,
            Err(error) => {
                return Ok(IssueLookup::Missing(LookupError::new(
                    LookupErrorKind::NetworkError,
                    error.to_string(),
                )));
            }
        };

        match response.status() {
            StatusCode::NOT_FOUND => Ok(IssueLookup::Missing(LookupError::new(
                LookupErrorKind::NotFound,
                format!("Issue #{} not found", number),
            ))),
            StatusCode::UNAUTHORIZED => Ok(IssueLookup::Missing(LookupError::new(
                LookupErrorKind::Unauthorized,
                "Unauthorized access to GitHub API",
            ))),
            status if status.is_success() => match response.json::<IssueResponse>().await {
                Ok(data) => {
                    // Missing state is read as open, matching the API's
                    // default for issues that predate state reporting.
                    let state = data
                        .state
                        .unwrap_or_else(|| "open".to_string())
                        .to_lowercase();

                    Ok(IssueLookup::Found(Issue {
                        number: data.number,
                        state,
                        title: data.title,
                        body: data.body,
                    }))
                }
                Err(error) => Ok(IssueLookup::Missing(LookupError::new(
                    LookupErrorKind::ApiError,
                    format!("Invalid response format: {}", error),
                ))),
            },
            status => Ok(IssueLookup::Missing(LookupError::new(
                LookupErrorKind::ApiError,
                format!("GitHub API returned {} for issue #{}", status, number),
            ))),
        }
    }
}
