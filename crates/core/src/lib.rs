//! # Issue Warden Core
//!
//! Core business logic for validating that a piece of text — a branch
//! name, a commit message, a pull-request title or body — references a
//! valid GitHub issue.
//!
//! The pipeline turns raw text into a categorized result:
//! - Skip markers bypass validation entirely
//! - Exclusion globs pass protected branches and automated commits
//! - Mode-specific extraction finds the candidate issue numbers
//! - Each candidate is looked up in the repository and checked against
//!   the caller's status filter
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use issue_warden_core::{CheckRequest, IssueWarden};
//! use issue_warden_github::github::{GitHubIssueClient, DEFAULT_API_BASE};
//! use issue_warden_github::remote::GitRemoteResolver;
//!
//! # async fn example() -> Result<(), issue_warden_github::errors::Error> {
//! let client = GitHubIssueClient::new(DEFAULT_API_BASE, None)?;
//! let warden = IssueWarden::new(client, GitRemoteResolver::default());
//!
//! let result = warden
//!     .check_message(CheckRequest::new("Fix login flow #123"))
//!     .await;
//!
//! if result.success {
//!     println!("{}", result.message);
//! } else {
//!     eprintln!("{}", result.message);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! `check_message` never returns an error and never panics: every failure
//! path, from a malformed request to a provider bug, ends in a structured
//! `error`-reason result.

use tracing::{debug, info, instrument, warn};

pub mod checks;

pub mod config;

pub mod errors;

pub mod request;

pub mod result;

pub use errors::CheckError;
pub use request::{CheckMode, CheckRequest, IssueStatusFilter};
pub use result::{
    CheckMessageResult, ErrorInfo, InputConfig, IssueInfo, ValidationReason,
};

use issue_warden_github::models::{IssueLookup, LookupErrorKind, Repository};
use issue_warden_github::remote::RepositoryResolver;
use issue_warden_github::IssueProvider;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Main entry point for validating text against repository issues.
///
/// `IssueWarden` owns its two collaborators: an [`IssueProvider`] that
/// looks up issue numbers on the platform, and a [`RepositoryResolver`]
/// that turns an explicit `owner/repo` argument or the local checkout
/// into a repository. Both are injected so tests and embedders can
/// substitute them.
pub struct IssueWarden<P, R> {
    provider: P,
    resolver: R,
}

impl<P: IssueProvider, R: RepositoryResolver> IssueWarden<P, R> {
    /// Creates a warden over the given collaborators.
    pub fn new(provider: P, resolver: R) -> Self {
        Self { provider, resolver }
    }

    /// Validates `request.text` and produces a categorized result.
    ///
    /// The pipeline short-circuits in order: request validation, skip
    /// marker, exclusion pattern, repository resolution, extraction,
    /// per-issue lookup. The skip and exclusion exits count as success;
    /// `no-issues` and `invalid-issues` do not. Failures along the way
    /// become `error`-reason results instead of propagating.
    ///
    /// # Arguments
    ///
    /// * `request` - The validation request; see [`CheckRequest`]
    ///
    /// # Returns
    ///
    /// A [`CheckMessageResult`]; this method is infallible by contract.
    #[instrument(skip(self))]
    pub async fn check_message(&self, request: CheckRequest) -> CheckMessageResult {
        if let Err(error) = request.validate() {
            debug!(error = error.to_string(), "Request validation failed");
            return CheckMessageResult::error(&error, InputConfig::unresolved(&request));
        }

        if checks::skip::has_skip_marker(&request.text) {
            info!("Skip marker found, bypassing validation");
            return CheckMessageResult::skipped(InputConfig::unresolved(&request));
        }

        let exclusion = match checks::exclusion::should_exclude(
            &request.text,
            request.check_mode,
            request.exclude_pattern.as_deref(),
        ) {
            Ok(exclusion) => exclusion,
            Err(error) => {
                return CheckMessageResult::error(&error, InputConfig::unresolved(&request));
            }
        };
        if exclusion.excluded {
            info!(
                pattern = exclusion.pattern.as_deref().unwrap_or_default(),
                "Text matched an exclusion pattern"
            );
            return CheckMessageResult::excluded(InputConfig::unresolved(&request));
        }

        let repository = match self.resolver.resolve(request.repository.as_deref()) {
            Ok(repository) => repository,
            Err(error) => {
                return CheckMessageResult::error(
                    &CheckError::from(error),
                    InputConfig::unresolved(&request),
                );
            }
        };
        let input = InputConfig::resolved(&request, repository.full_name());

        let found = match checks::extraction::find_issue_numbers(
            &request.text,
            request.check_mode,
            request.extract_pattern.as_deref(),
        ) {
            Ok(found) => found,
            Err(error) => return CheckMessageResult::error(&error, input),
        };
        if found.is_empty() {
            debug!("No issue numbers found in text");
            return CheckMessageResult::no_issues(input);
        }

        let issues = match self
            .lookup_issues(&repository, &found, request.issue_status)
            .await
        {
            Ok(issues) => issues,
            Err(error) => return CheckMessageResult::error(&error, input),
        };

        if !issues.valid.is_empty()
            && issues.not_found.is_empty()
            && issues.wrong_state.is_empty()
        {
            CheckMessageResult::valid(issues, input)
        } else {
            CheckMessageResult::invalid(issues, input)
        }
    }

    /// Looks up every found number and categorizes it.
    ///
    /// The output arrays preserve the source order of `found`. An
    /// unconfirmed issue — missing, unauthorized, API or network failure —
    /// lands in `not_found`: an issue that cannot be confirmed does not
    /// validate the text. The error kind stays visible in the logs.
    async fn lookup_issues(
        &self,
        repository: &Repository,
        found: &[u64],
        filter: IssueStatusFilter,
    ) -> Result<IssueInfo, CheckError> {
        let mut issues = IssueInfo {
            found: found.to_vec(),
            ..IssueInfo::default()
        };

        for &number in found {
            let lookup = self
                .provider
                .get_issue(&repository.owner, &repository.name, number)
                .await
                .map_err(|e| CheckError::Lookup {
                    number,
                    message: e.to_string(),
                })?;

            match lookup {
                IssueLookup::Found(issue) => {
                    if checks::status::is_state_allowed(&issue.state, filter) {
                        issues.valid.push(number);
                    } else {
                        debug!(
                            issue = number,
                            state = issue.state.as_str(),
                            "Issue exists but fails the status filter"
                        );
                        issues.wrong_state.push(number);
                    }
                }
                IssueLookup::Missing(error) => {
                    if error.kind == LookupErrorKind::Unauthorized {
                        warn!(
                            issue = number,
                            message = error.message.as_str(),
                            "Issue lookup was unauthorized; treating the issue as invalid"
                        );
                    } else if error.kind != LookupErrorKind::NotFound {
                        warn!(
                            issue = number,
                            kind = %error.kind,
                            message = error.message.as_str(),
                            "Issue lookup failed; treating the issue as invalid"
                        );
                    }
                    issues.not_found.push(number);
                }
            }
        }

        Ok(issues)
    }
}
