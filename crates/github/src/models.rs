//! # Models
//!
//! Data models shared between the issue-warden core and the platform
//! collaborators: GitHub issues, repositories and the normalized outcome of
//! a single issue lookup.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// A GitHub issue as consumed by the validation pipeline.
///
/// Only the fields the pipeline reads are modeled. The `state` field is
/// lower-cased when the issue is read from the API, so comparisons against
/// a status filter never need to normalize again.
///
/// # Examples
///
/// ```
/// use issue_warden_github::models::Issue;
///
/// let issue = Issue {
///     number: 123,
///     state: "open".to_string(),
///     title: Some("Fix the login flow".to_string()),
///     body: None,
/// };
/// assert_eq!(issue.state, "open");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// The issue number
    pub number: u64,

    /// The issue state, lower-cased (`open` or `closed`)
    pub state: String,

    /// The issue title, if the API returned one
    pub title: Option<String>,

    /// The issue body, if the API returned one
    pub body: Option<String>,
}

/// A repository identified by owner and name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// The repository owner (user or organization)
    pub owner: String,

    /// The repository name
    pub name: String,
}

impl Repository {
    /// Returns the `owner/name` form used in messages and result metadata.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// Classification of a failed issue lookup.
///
/// A lookup that does not produce an issue always carries one of these
/// kinds so callers can distinguish a missing issue from an auth or
/// transport problem without matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LookupErrorKind {
    /// The issue does not exist in the repository (HTTP 404)
    NotFound,

    /// The request was rejected as unauthenticated or unauthorized (HTTP 401)
    Unauthorized,

    /// Any other HTTP-level failure, rate limits included
    ApiError,

    /// The request never produced an HTTP response (connect failure, timeout)
    NetworkError,
}

impl std::fmt::Display for LookupErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupErrorKind::NotFound => write!(f, "not-found"),
            LookupErrorKind::Unauthorized => write!(f, "unauthorized"),
            LookupErrorKind::ApiError => write!(f, "api-error"),
            LookupErrorKind::NetworkError => write!(f, "network-error"),
        }
    }
}

/// Why a lookup failed to produce an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupError {
    /// The failure classification
    pub kind: LookupErrorKind,

    /// Human-readable detail for logs and diagnostics
    pub message: String,
}

impl LookupError {
    /// Creates a lookup error with the given kind and message.
    pub fn new(kind: LookupErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Outcome of a single issue lookup.
///
/// Expected failures (missing issue, auth rejection, API or network
/// trouble) are data, not `Err`: the lookup client normalizes them into
/// [`IssueLookup::Missing`] so the caller can categorize the issue number
/// instead of aborting the whole validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueLookup {
    /// The issue exists; its state has been lower-cased on read
    Found(Issue),

    /// The issue could not be confirmed
    Missing(LookupError),
}

impl IssueLookup {
    /// Returns the contained issue when the lookup succeeded.
    pub fn issue(&self) -> Option<&Issue> {
        match self {
            IssueLookup::Found(issue) => Some(issue),
            IssueLookup::Missing(_) => None,
        }
    }

    /// Returns the lookup error when the issue could not be confirmed.
    pub fn error(&self) -> Option<&LookupError> {
        match self {
            IssueLookup::Found(_) => None,
            IssueLookup::Missing(error) => Some(error),
        }
    }
}
