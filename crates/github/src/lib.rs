//! # Issue Warden Platform Collaborators
//!
//! APIs for the external systems issue-warden consults while validating
//! text: the GitHub REST API (issue lookups), the local git checkout
//! (repository and branch resolution) and the ambient credential sources
//! (tokens, Enterprise hosts).
//!
//! The core crate depends on the [`IssueProvider`] and
//! [`remote::RepositoryResolver`] traits only; the concrete
//! [`github::GitHubIssueClient`] and [`remote::GitRemoteResolver`]
//! implementations are wired in by the front-ends.

use async_trait::async_trait;

pub mod auth;

pub mod errors;

pub mod github;

pub mod models;

pub mod remote;

use errors::Error;
use models::IssueLookup;

/// Trait for platforms that can look up a single issue by number.
///
/// Implementations normalize every expected failure (missing issue, auth
/// rejection, API or network trouble) into [`IssueLookup::Missing`];
/// returning `Err` is reserved for conditions the validation pipeline
/// cannot categorize, and the caller treats those as terminal.
///
/// # Example Implementation
///
/// ```rust,no_run
/// use async_trait::async_trait;
/// use issue_warden_github::{IssueProvider, errors::Error, models::IssueLookup};
///
/// #[derive(Debug)]
/// struct FixtureProvider;
///
/// #[async_trait]
/// impl IssueProvider for FixtureProvider {
///     async fn get_issue(
///         &self,
///         owner: &str,
///         repo: &str,
///         number: u64,
///     ) -> Result<IssueLookup, Error> {
///         // Implementation to fetch the issue from the platform
///         # unimplemented!()
///     }
/// }
/// ```
#[async_trait]
pub trait IssueProvider: Send + Sync {
    /// Looks up one issue in `owner/repo`.
    ///
    /// # Arguments
    ///
    /// * `owner` - The owner of the repository
    /// * `repo` - The name of the repository
    /// * `number` - The issue number to look up
    ///
    /// # Returns
    ///
    /// A `Result` containing the normalized lookup outcome
    async fn get_issue(&self, owner: &str, repo: &str, number: u64)
        -> Result<IssueLookup, Error>;
}
