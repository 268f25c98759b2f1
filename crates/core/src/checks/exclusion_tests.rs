use crate::checks::exclusion::should_exclude;
use crate::config::{BRANCH_EXCLUDE_PATTERN, COMMIT_EXCLUDE_PATTERN};
use crate::errors::CheckError;
use crate::request::CheckMode;

#[test]
fn test_protected_and_bot_branches_are_excluded_by_default() {
    let excluded = vec![
        "main",
        "master",
        "develop",
        "release/2.0",
        "release/v1/hotfix",
        "renovate/pin-dependencies",
        "dependabot/cargo/serde-1.0",
        "release-please--branches--main",
        "snyk/fix-vuln",
        "imgbot/optimize",
        "all-contributors/add-octocat",
    ];

    for branch in excluded {
        let result = should_exclude(branch, CheckMode::Branch, None).unwrap();
        assert!(result.excluded, "'{}' should be excluded", branch);
        assert_eq!(result.pattern.as_deref(), Some(BRANCH_EXCLUDE_PATTERN));
    }
}

#[test]
fn test_feature_branches_are_not_excluded_by_default() {
    let kept = vec![
        "feature/123-x",
        "fix/456-bug",
        "maintenance",   // prefix of nothing in the table
        "my-main",
        "123-login",
    ];

    for branch in kept {
        let result = should_exclude(branch, CheckMode::Branch, None).unwrap();
        assert!(!result.excluded, "'{}' should not be excluded", branch);
        assert!(result.pattern.is_none());
    }
}

#[test]
fn test_automated_commit_messages_are_excluded_by_default() {
    let excluded = vec![
        "Merge branch 'main' into develop",
        "Merge pull request #42",
        "Rebase onto main",
        "Revert \"feat: add login\"",
        "fixup! feat: add login",
        "squash! feat: add login",
        "Applied suggestions from code review",
        "Apply automatic changes",
        "Automated Change - formatting",
        "Update branch 'main'",
        "Auto-merge main into feature",
        "(cherry picked from commit abc123)",
        "Initial commit",
        "Update README.md",
        "Update CHANGELOG.md",
        "Updated content",
    ];

    for message in excluded {
        let result = should_exclude(message, CheckMode::Commit, None).unwrap();
        assert!(result.excluded, "'{}' should be excluded", message);
        assert_eq!(result.pattern.as_deref(), Some(COMMIT_EXCLUDE_PATTERN));
    }
}

#[test]
fn test_ordinary_commit_messages_are_not_excluded() {
    let kept = vec![
        "chore: update deps",
        "feat: add login flow #123",
        "fix typo in README", // Update prefix missing
        "merge accounting fix", // case-sensitive: lowercase merge
    ];

    for message in kept {
        let result = should_exclude(message, CheckMode::Commit, None).unwrap();
        assert!(!result.excluded, "'{}' should not be excluded", message);
    }
}

#[test]
fn test_default_mode_has_no_exclusion_table() {
    for text in ["main", "Merge branch 'main'", "anything"] {
        let result = should_exclude(text, CheckMode::Default, None).unwrap();
        assert!(!result.excluded, "'{}' should not be excluded", text);
    }
}

#[test]
fn test_custom_pattern_replaces_the_default() {
    // The custom glob does not match main, and the default table no
    // longer applies.
    let result = should_exclude("main", CheckMode::Branch, Some("hotfix/*")).unwrap();
    assert!(!result.excluded);

    let result = should_exclude("hotfix/urgent", CheckMode::Branch, Some("hotfix/*")).unwrap();
    assert!(result.excluded);
    assert_eq!(result.pattern.as_deref(), Some("hotfix/*"));
}

#[test]
fn test_empty_custom_pattern_disables_exclusion() {
    let result = should_exclude("main", CheckMode::Branch, Some("")).unwrap();
    assert!(!result.excluded);

    let result = should_exclude("Merge branch 'x'", CheckMode::Commit, Some("")).unwrap();
    assert!(!result.excluded);
}

#[test]
fn test_uncompilable_custom_pattern_is_an_error() {
    let result = should_exclude("main", CheckMode::Branch, Some("{unclosed"));

    assert!(matches!(
        result,
        Err(CheckError::InvalidPattern { .. })
    ));
}

#[test]
fn test_matching_is_case_sensitive() {
    let result = should_exclude("MAIN", CheckMode::Branch, None).unwrap();
    assert!(!result.excluded);

    let result = should_exclude("update README.md", CheckMode::Commit, None).unwrap();
    assert!(!result.excluded);
}
