//! # Validation Results
//!
//! The result model returned by the `check_message` use case, plus the
//! factory constructors that keep message formatting consistent across
//! the canonical result shapes.
//!
//! Results serialize to the documented JSON wire shape (camelCase keys,
//! kebab-case reasons) consumed by the `--json` flag and Action callers.

use serde::Serialize;

use crate::errors::CheckError;
use crate::request::{CheckMode, CheckRequest, IssueStatusFilter};

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;

/// Why a result came out the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationReason {
    /// The text matched an exclusion pattern
    Excluded,

    /// The text carried a skip marker
    Skipped,

    /// No issue numbers were found in the text
    NoIssues,

    /// Every found issue exists and passes the status filter
    Valid,

    /// At least one found issue is missing or in the wrong state
    InvalidIssues,

    /// Validation could not complete
    Error,
}

/// Echo of the resolved request a result was produced for.
///
/// Never includes the auth token; the token is not part of the request at
/// all (see [`CheckRequest`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputConfig {
    /// The validated text
    pub text: String,

    /// The mode the defaults were taken from
    pub check_mode: CheckMode,

    /// The custom exclusion glob, when one was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    /// The status filter that was applied
    pub issue_status: IssueStatusFilter,

    /// The resolved `owner/repo`; empty on exit paths reached before
    /// repository resolution
    pub repo: String,
}

impl InputConfig {
    /// Echo of a request before repository resolution.
    pub fn unresolved(request: &CheckRequest) -> Self {
        Self::resolved(request, String::new())
    }

    /// Echo of a request with the resolved repository.
    pub fn resolved(request: &CheckRequest, repo: String) -> Self {
        Self {
            text: request.text.clone(),
            check_mode: request.check_mode,
            exclude: request.exclude_pattern.clone(),
            issue_status: request.issue_status,
            repo,
        }
    }
}

/// The four-way categorization of the extracted issue numbers.
///
/// `found` is the disjoint union of `valid`, `not_found` and
/// `wrong_state`; all four preserve first-seen source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueInfo {
    /// Every unique issue number extracted from the text
    pub found: Vec<u64>,

    /// Numbers that exist in the repository and pass the status filter
    pub valid: Vec<u64>,

    /// Numbers that could not be confirmed to exist
    pub not_found: Vec<u64>,

    /// Numbers that exist but fail the status filter
    pub wrong_state: Vec<u64>,
}

/// Error details attached to an `error`-reason result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorInfo {
    /// Stable error type name, e.g. `ValidationError`
    #[serde(rename = "type")]
    pub kind: String,

    /// The error's display message
    pub message: String,
}

/// Result of one `check_message` invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckMessageResult {
    /// Whether validation passed
    pub success: bool,

    /// Quick categorization of the outcome
    pub reason: ValidationReason,

    /// Human-readable summary
    pub message: String,

    /// Echo of the resolved request
    pub input: InputConfig,

    /// Categorized issue numbers; present only when extraction ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<IssueInfo>,

    /// Error details; present only on `reason = error`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl CheckMessageResult {
    /// The text matched an exclusion pattern; validation passes.
    pub fn excluded(input: InputConfig) -> Self {
        Self {
            success: true,
            reason: ValidationReason::Excluded,
            message: "Text was excluded from validation".to_string(),
            input,
            issues: None,
            error: None,
        }
    }

    /// The text carried a skip marker; validation passes.
    pub fn skipped(input: InputConfig) -> Self {
        Self {
            success: true,
            reason: ValidationReason::Skipped,
            message: "Validation skipped by skip marker".to_string(),
            input,
            issues: None,
            error: None,
        }
    }

    /// No issue numbers were found; validation fails.
    pub fn no_issues(input: InputConfig) -> Self {
        Self {
            success: false,
            reason: ValidationReason::NoIssues,
            message: "No issue number found in text".to_string(),
            input,
            issues: None,
            error: None,
        }
    }

    /// Every found issue is valid.
    pub fn valid(issues: IssueInfo, input: InputConfig) -> Self {
        let message = format!(
            "Valid issue(s) found: {} in {}",
            join_numbers(&issues.valid),
            input.repo
        );

        Self {
            success: true,
            reason: ValidationReason::Valid,
            message,
            input,
            issues: Some(issues),
            error: None,
        }
    }

    /// At least one found issue is missing or in the wrong state.
    ///
    /// The message carries only the non-empty segments, so a result with
    /// nothing in `wrong_state` reads `Issues not found: #1 in owner/repo`.
    pub fn invalid(issues: IssueInfo, input: InputConfig) -> Self {
        let mut parts = Vec::new();
        if !issues.not_found.is_empty() {
            parts.push(format!(
                "Issues not found: {}",
                join_numbers(&issues.not_found)
            ));
        }
        if !issues.wrong_state.is_empty() {
            parts.push(format!(
                "Wrong state: {}",
                join_numbers(&issues.wrong_state)
            ));
        }

        let message = format!("{} in {}", parts.join("; "), input.repo);

        Self {
            success: false,
            reason: ValidationReason::InvalidIssues,
            message,
            input,
            issues: Some(issues),
            error: None,
        }
    }

    /// Validation could not complete.
    pub fn error(error: &CheckError, input: InputConfig) -> Self {
        Self {
            success: false,
            reason: ValidationReason::Error,
            message: error.to_string(),
            input,
            issues: None,
            error: Some(ErrorInfo {
                kind: error.kind().to_string(),
                message: error.to_string(),
            }),
        }
    }
}

/// Formats numbers as `#1, #2, #3`.
fn join_numbers(numbers: &[u64]) -> String {
    numbers
        .iter()
        .map(|n| format!("#{}", n))
        .collect::<Vec<_>>()
        .join(", ")
}
