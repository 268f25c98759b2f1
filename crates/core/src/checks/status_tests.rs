use crate::checks::status::is_state_allowed;
use crate::request::IssueStatusFilter;

#[test]
fn test_all_accepts_every_state() {
    assert!(is_state_allowed("open", IssueStatusFilter::All));
    assert!(is_state_allowed("closed", IssueStatusFilter::All));
    assert!(is_state_allowed("anything", IssueStatusFilter::All));
}

#[test]
fn test_open_and_closed_require_an_exact_match() {
    assert!(is_state_allowed("open", IssueStatusFilter::Open));
    assert!(!is_state_allowed("closed", IssueStatusFilter::Open));

    assert!(is_state_allowed("closed", IssueStatusFilter::Closed));
    assert!(!is_state_allowed("open", IssueStatusFilter::Closed));
}

#[test]
fn test_state_comparison_ignores_case() {
    assert!(is_state_allowed("OPEN", IssueStatusFilter::Open));
    assert!(is_state_allowed("Closed", IssueStatusFilter::Closed));
}
