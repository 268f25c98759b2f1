//! Validation requests.
//!
//! A [`CheckRequest`] is a plain data structure with typed fields plus a
//! short imperative [`CheckRequest::validate`] routine; there is no
//! runtime schema object. Front-ends build a request from their own input
//! surface (flags, Action inputs, library arguments) and hand it to the
//! use case.

use serde::{Deserialize, Serialize};

use crate::config::REPOSITORY_FORMAT_REGEX;
use crate::errors::CheckError;

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;

/// Selects the default extraction and exclusion behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckMode {
    /// Free-form text: `#123` references only, no default exclusion
    #[default]
    Default,

    /// Branch names: bare digit runs count, protected and bot branches
    /// are excluded by default
    Branch,

    /// Commit messages: `#123` references, automated messages are
    /// excluded by default
    Commit,
}

impl std::fmt::Display for CheckMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckMode::Default => write!(f, "default"),
            CheckMode::Branch => write!(f, "branch"),
            CheckMode::Commit => write!(f, "commit"),
        }
    }
}

impl std::str::FromStr for CheckMode {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(CheckMode::Default),
            "branch" => Ok(CheckMode::Branch),
            "commit" => Ok(CheckMode::Commit),
            other => Err(CheckError::Validation(format!(
                "Invalid check mode '{}'. Expected one of: default, branch, commit",
                other
            ))),
        }
    }
}

/// Constrains which issue states count as valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueStatusFilter {
    /// Any state is acceptable
    #[default]
    All,

    /// Only open issues are acceptable
    Open,

    /// Only closed issues are acceptable
    Closed,
}

impl std::fmt::Display for IssueStatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueStatusFilter::All => write!(f, "all"),
            IssueStatusFilter::Open => write!(f, "open"),
            IssueStatusFilter::Closed => write!(f, "closed"),
        }
    }
}

impl std::str::FromStr for IssueStatusFilter {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(IssueStatusFilter::All),
            "open" => Ok(IssueStatusFilter::Open),
            "closed" => Ok(IssueStatusFilter::Closed),
            other => Err(CheckError::Validation(format!(
                "Invalid issue status '{}'. Expected one of: all, open, closed",
                other
            ))),
        }
    }
}

/// A validation request.
///
/// The auth token and Enterprise hostname are deliberately not part of
/// the request; they configure the issue provider the front-end
/// constructs, so a serialized request or result can never leak them.
///
/// # Examples
///
/// ```
/// use issue_warden_core::{CheckMode, CheckRequest, IssueStatusFilter};
///
/// let request = CheckRequest {
///     text: "feature/123-login".to_string(),
///     check_mode: CheckMode::Branch,
///     issue_status: IssueStatusFilter::Open,
///     repository: Some("octocat/hello-world".to_string()),
///     ..CheckRequest::default()
/// };
///
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckRequest {
    /// The text to validate
    pub text: String,

    /// Which mode's defaults apply
    pub check_mode: CheckMode,

    /// Extraction regex overriding the mode default; the issue number must
    /// be in capture group 1
    pub extract_pattern: Option<String>,

    /// Exclusion glob overriding the mode default; an empty string
    /// disables the default exclusion
    pub exclude_pattern: Option<String>,

    /// Which issue states count as valid
    pub issue_status: IssueStatusFilter,

    /// Repository as `owner/repo`; resolved from the local git checkout
    /// when absent
    pub repository: Option<String>,
}

impl CheckRequest {
    /// Creates a request for `text` with every other field defaulted.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Checks the request invariants, reporting the first violation.
    pub fn validate(&self) -> Result<(), CheckError> {
        if self.text.is_empty() {
            return Err(CheckError::Validation("Text is required".to_string()));
        }

        if let Some(repository) = &self.repository {
            if !REPOSITORY_FORMAT_REGEX.is_match(repository) {
                return Err(CheckError::Validation(format!(
                    "Invalid repository format. Expected 'owner/repo', got '{}'",
                    repository
                )));
            }
        }

        Ok(())
    }
}
