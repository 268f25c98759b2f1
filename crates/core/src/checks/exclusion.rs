//! # Exclusion Matching
//!
//! Some text never needs an issue reference: protected branches, bot
//! branches, automated commit messages. This module glob-matches the
//! whole input text against a mode's exclusion table, or against a
//! caller-supplied override.

use globset::Glob;

use crate::config::{
    default_exclude_pattern, BRANCH_EXCLUDE_MATCHER, COMMIT_EXCLUDE_MATCHER,
};
use crate::errors::CheckError;
use crate::request::CheckMode;

#[cfg(test)]
#[path = "exclusion_tests.rs"]
mod tests;

/// Outcome of the exclusion check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclusion {
    /// Whether the text is excluded from validation
    pub excluded: bool,

    /// The pattern that matched, when one did
    pub pattern: Option<String>,
}

impl Exclusion {
    fn not_excluded() -> Self {
        Self {
            excluded: false,
            pattern: None,
        }
    }

    fn matched(pattern: &str) -> Self {
        Self {
            excluded: true,
            pattern: Some(pattern.to_string()),
        }
    }
}

/// Checks whether the text is excluded from validation.
///
/// A caller-supplied glob replaces the mode default entirely; it is never
/// merged with it. Supplying an empty string therefore disables the mode
/// default, because the empty glob matches nothing. Matching is
/// case-sensitive and uses brace/wildcard syntax (`{a,b}`, `*`, `**`).
///
/// # Arguments
///
/// * `text` - The text to check
/// * `mode` - The mode whose default table applies
/// * `custom` - Optional glob overriding the mode default
///
/// # Returns
///
/// A `Result` with the exclusion outcome; an uncompilable custom glob is
/// an [`CheckError::InvalidPattern`].
///
/// # Examples
///
/// ```
/// use issue_warden_core::checks::exclusion::should_exclude;
/// use issue_warden_core::CheckMode;
///
/// let result = should_exclude("main", CheckMode::Branch, None).unwrap();
/// assert!(result.excluded);
///
/// let result = should_exclude("feature/123-login", CheckMode::Branch, None).unwrap();
/// assert!(!result.excluded);
///
/// // An empty custom glob disables the default table.
/// let result = should_exclude("main", CheckMode::Branch, Some("")).unwrap();
/// assert!(!result.excluded);
/// ```
pub fn should_exclude(
    text: &str,
    mode: CheckMode,
    custom: Option<&str>,
) -> Result<Exclusion, CheckError> {
    if let Some(pattern) = custom {
        if pattern.is_empty() {
            return Ok(Exclusion::not_excluded());
        }

        let matcher = Glob::new(pattern)
            .map_err(|e| CheckError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?
            .compile_matcher();

        return Ok(if matcher.is_match(text) {
            Exclusion::matched(pattern)
        } else {
            Exclusion::not_excluded()
        });
    }

    let (matcher, pattern) = match mode {
        CheckMode::Default => return Ok(Exclusion::not_excluded()),
        CheckMode::Branch => (&*BRANCH_EXCLUDE_MATCHER, default_exclude_pattern(mode)),
        CheckMode::Commit => (&*COMMIT_EXCLUDE_MATCHER, default_exclude_pattern(mode)),
    };

    Ok(match (matcher.is_match(text), pattern) {
        (true, Some(pattern)) => Exclusion::matched(pattern),
        _ => Exclusion::not_excluded(),
    })
}
