//! # Status Filtering
//!
//! Decides whether a fetched issue's state satisfies the caller's filter.

use crate::request::IssueStatusFilter;

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;

/// Checks whether an issue state passes the status filter.
///
/// `All` accepts every state; `Open` and `Closed` require an exact match
/// against the lower-cased state.
///
/// # Examples
///
/// ```
/// use issue_warden_core::checks::status::is_state_allowed;
/// use issue_warden_core::IssueStatusFilter;
///
/// assert!(is_state_allowed("closed", IssueStatusFilter::All));
/// assert!(is_state_allowed("OPEN", IssueStatusFilter::Open));
/// assert!(!is_state_allowed("closed", IssueStatusFilter::Open));
/// ```
pub fn is_state_allowed(state: &str, filter: IssueStatusFilter) -> bool {
    match filter {
        IssueStatusFilter::All => true,
        IssueStatusFilter::Open => state.eq_ignore_ascii_case("open"),
        IssueStatusFilter::Closed => state.eq_ignore_ascii_case("closed"),
    }
}
