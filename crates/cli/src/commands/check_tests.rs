use clap::Parser;

use issue_warden_core::{
    CheckMessageResult, CheckRequest, InputConfig, IssueInfo, CheckError,
};

use super::{format_numbers, outcome, CheckArgs};
use crate::errors::CliError;

/// Wrapper so the flattened args can be parsed standalone in tests.
#[derive(Parser)]
struct TestCli {
    #[command(flatten)]
    check: CheckArgs,
}

fn parse(argv: &[&str]) -> CheckArgs {
    TestCli::try_parse_from(argv).unwrap().check
}

fn input_for(text: &str, repo: &str) -> InputConfig {
    InputConfig::resolved(&CheckRequest::new(text), repo.to_string())
}

#[test]
fn test_defaults_match_the_documented_surface() {
    let args = parse(&["issue-warden", "--text", "#123"]);

    assert_eq!(args.text.as_deref(), Some("#123"));
    assert_eq!(args.mode, "default");
    assert_eq!(args.issue_status, "all");
    assert!(args.extract.is_none());
    assert!(args.exclude.is_none());
    assert!(args.repo.is_none());
    assert!(args.github_token.is_none());
    assert!(args.hostname.is_none());
    assert!(!args.json);
}

#[test]
fn test_all_flags_parse() {
    let args = parse(&[
        "issue-warden",
        "--text",
        "feature/123",
        "--mode",
        "branch",
        "--extract",
        r"ISSUE-(\d+)",
        "--exclude",
        "wip/*",
        "--issue-status",
        "open",
        "--repo",
        "octocat/hello-world",
        "--github-token",
        "ghp_secret",
        "--hostname",
        "github.example.com",
        "--json",
    ]);

    assert_eq!(args.mode, "branch");
    assert_eq!(args.issue_status, "open");
    assert_eq!(args.exclude.as_deref(), Some("wip/*"));
    assert_eq!(args.repo.as_deref(), Some("octocat/hello-world"));
    assert_eq!(args.hostname.as_deref(), Some("github.example.com"));
    assert!(args.json);
}

#[test]
fn test_unknown_mode_is_rejected_at_parse_time() {
    let result = TestCli::try_parse_from(["issue-warden", "--text", "x", "--mode", "pr"]);

    assert!(result.is_err());
}

#[test]
fn test_successful_results_exit_zero() {
    let valid = CheckMessageResult::valid(
        IssueInfo {
            found: vec![123],
            valid: vec![123],
            ..IssueInfo::default()
        },
        input_for("#123", "octocat/hello-world"),
    );
    assert!(outcome(&valid).is_ok());

    let excluded = CheckMessageResult::excluded(input_for("main", ""));
    assert!(outcome(&excluded).is_ok());

    let skipped = CheckMessageResult::skipped(input_for("[skip issue-warden]", ""));
    assert!(outcome(&skipped).is_ok());
}

#[test]
fn test_failed_validation_exits_one() {
    let no_issues = CheckMessageResult::no_issues(input_for("chore: deps", "o/r"));
    assert!(matches!(
        outcome(&no_issues),
        Err(CliError::ValidationFailed(_))
    ));

    let invalid = CheckMessageResult::invalid(
        IssueInfo {
            found: vec![999],
            not_found: vec![999],
            ..IssueInfo::default()
        },
        input_for("#999", "o/r"),
    );
    assert!(matches!(
        outcome(&invalid),
        Err(CliError::ValidationFailed(_))
    ));
}

#[test]
fn test_error_results_exit_two() {
    let error = CheckMessageResult::error(
        &CheckError::Validation("Text is required".to_string()),
        input_for("x", ""),
    );

    assert!(matches!(outcome(&error), Err(CliError::Unexpected(_))));
}

#[test]
fn test_format_numbers_matches_the_message_style() {
    assert_eq!(format_numbers(&[1]), "#1");
    assert_eq!(format_numbers(&[1, 2, 3]), "#1, #2, #3");
    assert_eq!(format_numbers(&[]), "");
}
