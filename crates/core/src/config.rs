//! Configuration settings for the issue-warden core functionality.
//!
//! This module centralizes the static pattern tables used throughout the
//! crate: exclusion globs, extraction patterns and skip markers, plus the
//! pre-compiled forms the checks run against.

use globset::{Glob, GlobMatcher};
use lazy_static::lazy_static;
use regex::Regex;

use crate::request::CheckMode;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Largest accepted issue number; larger candidates are discarded.
pub const MAX_ISSUE_NUMBER: u64 = 9_999_999;

/// Default exclusion glob for branch mode: protected and bot-managed
/// branches never need an issue reference.
pub const BRANCH_EXCLUDE_PATTERN: &str = "{main,master,develop,release/**,renovate/**,dependabot/**,release-please*,snyk/**,imgbot/**,all-contributors/**}";

/// Default exclusion glob for commit mode: automated or tooling-generated
/// commit messages.
pub const COMMIT_EXCLUDE_PATTERN: &str = "{Rebase*,Merge*,Revert*,fixup!*,squash!*,Applied suggestion*,Apply automatic changes,Automated Change*,Update branch*,Auto-merge*,(cherry picked from commit*,Initial commit,Update README.md,Update *.md,Updated content}";

/// Returns the default exclusion glob for a mode, if the mode has one.
///
/// Default mode has no exclusion table; text passed to it is always
/// validated.
pub fn default_exclude_pattern(mode: CheckMode) -> Option<&'static str> {
    match mode {
        CheckMode::Default => None,
        CheckMode::Branch => Some(BRANCH_EXCLUDE_PATTERN),
        CheckMode::Commit => Some(COMMIT_EXCLUDE_PATTERN),
    }
}

lazy_static! {
    /// Pre-compiled `#123` extraction regex used by default and commit modes
    pub static ref HASH_NUMBER_REGEX: Regex =
        Regex::new(r"#(\d+)").expect("Failed to compile issue number regex");

    /// Pre-compiled digit-run scanner used by branch mode extraction
    pub static ref DIGIT_RUN_REGEX: Regex =
        Regex::new(r"\d+").expect("Failed to compile digit run regex");

    /// Pre-compiled repository format check (`owner/repo`)
    pub static ref REPOSITORY_FORMAT_REGEX: Regex =
        Regex::new(r"^[^/]+/[^/]+$").expect("Failed to compile repository format regex");

    /// Skip markers that bypass validation entirely, case-insensitive
    pub static ref SKIP_MARKERS: [Regex; 4] = [
        Regex::new(r"(?i)\[skip issue-warden\]").expect("Failed to compile skip marker regex"),
        Regex::new(r"(?i)\[issue-warden skip\]").expect("Failed to compile skip marker regex"),
        Regex::new(r"(?i)\[skip-issue-warden\]").expect("Failed to compile skip marker regex"),
        Regex::new(r"(?i)\[issue-warden-skip\]").expect("Failed to compile skip marker regex"),
    ];

    /// Pre-compiled matcher for the branch exclusion table
    pub static ref BRANCH_EXCLUDE_MATCHER: GlobMatcher = Glob::new(BRANCH_EXCLUDE_PATTERN)
        .expect("Failed to compile branch exclusion glob")
        .compile_matcher();

    /// Pre-compiled matcher for the commit exclusion table
    pub static ref COMMIT_EXCLUDE_MATCHER: GlobMatcher = Glob::new(COMMIT_EXCLUDE_PATTERN)
        .expect("Failed to compile commit exclusion glob")
        .compile_matcher();
}
