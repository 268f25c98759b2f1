//! # Issue Number Extraction
//!
//! Finds the candidate issue numbers in a piece of text. Default and
//! commit modes only recognize the explicit `#123` form; branch mode also
//! accepts bare digit runs, because branch names like `feature/123-login`
//! rarely carry a `#`.

use regex::Regex;

use crate::config::{DIGIT_RUN_REGEX, HASH_NUMBER_REGEX, MAX_ISSUE_NUMBER};
use crate::errors::CheckError;
use crate::request::CheckMode;

#[cfg(test)]
#[path = "extraction_tests.rs"]
mod tests;

/// Longest digit run branch mode accepts as an issue number.
const MAX_BRANCH_DIGITS: usize = 7;

/// Finds the unique issue numbers in `text`, in first-seen order.
///
/// With a custom pattern, the pattern is compiled as a regex and capture
/// group 1 of every match is taken as the candidate number; a pattern
/// that does not compile is an [`CheckError::InvalidPattern`]. Without
/// one, the mode defaults apply: `#<digits>` for default and commit
/// modes, and for branch mode every run of one to seven digits that is
/// not adjacent to a `.` or another digit (so version strings like
/// `v2.0` contribute nothing).
///
/// Candidates outside `1..=9_999_999` are discarded. An empty result is
/// not an error.
///
/// # Examples
///
/// ```
/// use issue_warden_core::checks::extraction::find_issue_numbers;
/// use issue_warden_core::CheckMode;
///
/// let numbers = find_issue_numbers("Fix bug #123 and #45", CheckMode::Default, None).unwrap();
/// assert_eq!(numbers, vec![123, 45]);
///
/// let numbers = find_issue_numbers("feat/123-and-456", CheckMode::Branch, None).unwrap();
/// assert_eq!(numbers, vec![123, 456]);
///
/// let numbers = find_issue_numbers("release-v2.0", CheckMode::Branch, None).unwrap();
/// assert!(numbers.is_empty());
/// ```
pub fn find_issue_numbers(
    text: &str,
    mode: CheckMode,
    custom: Option<&str>,
) -> Result<Vec<u64>, CheckError> {
    if let Some(pattern) = custom {
        let regex = Regex::new(pattern).map_err(|e| CheckError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        let mut numbers = Vec::new();
        for captures in regex.captures_iter(text) {
            if let Some(group) = captures.get(1) {
                push_candidate(&mut numbers, group.as_str());
            }
        }
        return Ok(numbers);
    }

    Ok(match mode {
        CheckMode::Default | CheckMode::Commit => hash_numbers(text),
        CheckMode::Branch => branch_numbers(text),
    })
}

/// Extracts `#123`-form references.
fn hash_numbers(text: &str) -> Vec<u64> {
    let mut numbers = Vec::new();
    for captures in HASH_NUMBER_REGEX.captures_iter(text) {
        if let Some(group) = captures.get(1) {
            push_candidate(&mut numbers, group.as_str());
        }
    }
    numbers
}

/// Extracts bare digit runs from a branch name.
///
/// Scans maximal digit runs and keeps a run when it is one to seven
/// digits long and neither neighbour is a `.`. A maximal run is never
/// adjacent to another digit, so an eight-digit run is rejected outright
/// rather than truncated.
fn branch_numbers(text: &str) -> Vec<u64> {
    let mut numbers = Vec::new();
    for run in DIGIT_RUN_REGEX.find_iter(text) {
        if run.as_str().len() > MAX_BRANCH_DIGITS {
            continue;
        }

        let preceded_by_dot = text[..run.start()].ends_with('.');
        let followed_by_dot = text[run.end()..].starts_with('.');
        if preceded_by_dot || followed_by_dot {
            continue;
        }

        push_candidate(&mut numbers, run.as_str());
    }
    numbers
}

/// Parses a candidate, applying the range cap and first-seen dedup.
fn push_candidate(numbers: &mut Vec<u64>, digits: &str) {
    let Ok(number) = digits.parse::<u64>() else {
        return;
    };

    if number == 0 || number > MAX_ISSUE_NUMBER {
        return;
    }

    if !numbers.contains(&number) {
        numbers.push(number);
    }
}
