use crate::config::{
    default_exclude_pattern, BRANCH_EXCLUDE_MATCHER, BRANCH_EXCLUDE_PATTERN,
    COMMIT_EXCLUDE_MATCHER, COMMIT_EXCLUDE_PATTERN, HASH_NUMBER_REGEX,
    REPOSITORY_FORMAT_REGEX, SKIP_MARKERS, MAX_ISSUE_NUMBER,
};
use crate::request::CheckMode;

#[test]
fn test_default_mode_has_no_exclude_pattern() {
    assert_eq!(default_exclude_pattern(CheckMode::Default), None);
    assert_eq!(
        default_exclude_pattern(CheckMode::Branch),
        Some(BRANCH_EXCLUDE_PATTERN)
    );
    assert_eq!(
        default_exclude_pattern(CheckMode::Commit),
        Some(COMMIT_EXCLUDE_PATTERN)
    );
}

#[test]
fn test_exclusion_matchers_compile_and_match_their_tables() {
    // Touching the lazy statics forces glob compilation.
    assert!(BRANCH_EXCLUDE_MATCHER.is_match("main"));
    assert!(COMMIT_EXCLUDE_MATCHER.is_match("Initial commit"));
}

#[test]
fn test_hash_number_regex_captures_the_digits() {
    let captures = HASH_NUMBER_REGEX.captures("see #42 for details").unwrap();
    assert_eq!(&captures[1], "42");
}

#[test]
fn test_repository_format_requires_exactly_two_segments() {
    assert!(REPOSITORY_FORMAT_REGEX.is_match("octocat/hello-world"));
    assert!(!REPOSITORY_FORMAT_REGEX.is_match("octocat"));
    assert!(!REPOSITORY_FORMAT_REGEX.is_match("a/b/c"));
    assert!(!REPOSITORY_FORMAT_REGEX.is_match("/repo"));
    assert!(!REPOSITORY_FORMAT_REGEX.is_match("owner/"));
}

#[test]
fn test_skip_markers_cover_space_and_hyphen_forms() {
    assert_eq!(SKIP_MARKERS.len(), 4);
    assert!(SKIP_MARKERS.iter().any(|m| m.is_match("[skip issue-warden]")));
    assert!(SKIP_MARKERS.iter().any(|m| m.is_match("[issue-warden-skip]")));
}

#[test]
fn test_issue_number_cap() {
    assert_eq!(MAX_ISSUE_NUMBER, 9_999_999);
}
