use std::str::FromStr;

use crate::errors::CheckError;
use crate::request::{CheckMode, CheckRequest, IssueStatusFilter};

#[test]
fn test_new_defaults_everything_but_the_text() {
    let request = CheckRequest::new("Fix bug #123");

    assert_eq!(request.text, "Fix bug #123");
    assert_eq!(request.check_mode, CheckMode::Default);
    assert_eq!(request.issue_status, IssueStatusFilter::All);
    assert!(request.extract_pattern.is_none());
    assert!(request.exclude_pattern.is_none());
    assert!(request.repository.is_none());
}

#[test]
fn test_empty_text_is_rejected() {
    let request = CheckRequest::new("");

    let error = request.validate().unwrap_err();
    assert!(matches!(error, CheckError::Validation(_)));
    assert_eq!(error.to_string(), "Text is required");
}

#[test]
fn test_repository_format_is_validated() {
    let mut request = CheckRequest::new("#1");
    request.repository = Some("octocat/hello-world".to_string());
    assert!(request.validate().is_ok());

    for malformed in ["octocat", "a/b/c", "/repo", "owner/", ""] {
        request.repository = Some(malformed.to_string());
        let error = request.validate().unwrap_err();
        assert!(
            error.to_string().contains("Invalid repository format"),
            "'{}' should be rejected, got: {}",
            malformed,
            error
        );
    }
}

#[test]
fn test_check_mode_parses_its_display_names() {
    for mode in [CheckMode::Default, CheckMode::Branch, CheckMode::Commit] {
        assert_eq!(CheckMode::from_str(&mode.to_string()).unwrap(), mode);
    }

    let error = CheckMode::from_str("pull-request").unwrap_err();
    assert!(error.to_string().contains("Invalid check mode"));
}

#[test]
fn test_issue_status_parses_its_display_names() {
    for filter in [
        IssueStatusFilter::All,
        IssueStatusFilter::Open,
        IssueStatusFilter::Closed,
    ] {
        assert_eq!(
            IssueStatusFilter::from_str(&filter.to_string()).unwrap(),
            filter
        );
    }

    let error = IssueStatusFilter::from_str("merged").unwrap_err();
    assert!(error.to_string().contains("Invalid issue status"));
}

#[test]
fn test_enums_serialize_lowercase() {
    assert_eq!(serde_json::to_string(&CheckMode::Branch).unwrap(), "\"branch\"");
    assert_eq!(
        serde_json::to_string(&IssueStatusFilter::Closed).unwrap(),
        "\"closed\""
    );
}
