//! # Validation Checks
//!
//! This module contains the pure checks the validation pipeline applies
//! to the input text.
//!
//! The checks are organized into submodules:
//! - `skip`: Detects skip markers that bypass validation entirely
//! - `exclusion`: Glob-matches text against the mode's exclusion table
//! - `extraction`: Finds candidate issue numbers in the text
//! - `status`: Decides whether an issue state satisfies the status filter
//!
//! These checks are used by the `IssueWarden` to turn raw text into a
//! categorized validation result.

pub mod exclusion;
pub mod extraction;
pub mod skip;
pub mod status;
