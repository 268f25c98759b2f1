//! # Skip Marker Detection
//!
//! A literal bracketed token anywhere in the text bypasses validation
//! entirely, the same way `[skip ci]` bypasses CI pipelines. The marker
//! set is a configuration constant, not derived from the input.

use crate::config::SKIP_MARKERS;

#[cfg(test)]
#[path = "skip_tests.rs"]
mod tests;

/// Checks whether the text contains a skip marker.
///
/// Markers are matched case-insensitively anywhere in the text. The
/// recognized forms are `[skip issue-warden]`, `[issue-warden skip]`,
/// `[skip-issue-warden]` and `[issue-warden-skip]`.
///
/// # Examples
///
/// ```
/// use issue_warden_core::checks::skip::has_skip_marker;
///
/// assert!(has_skip_marker("hotfix: patch prod [skip issue-warden]"));
/// assert!(has_skip_marker("[ISSUE-WARDEN SKIP] emergency"));
/// assert!(!has_skip_marker("feature/123-login"));
/// ```
pub fn has_skip_marker(text: &str) -> bool {
    SKIP_MARKERS.iter().any(|marker| marker.is_match(text))
}
