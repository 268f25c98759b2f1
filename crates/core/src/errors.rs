use thiserror::Error;

/// Failures the validation pipeline can produce.
///
/// None of these escape [`crate::IssueWarden::check_message`]; the use
/// case converts every failure into an `error`-reason result at its
/// boundary, so callers never see an `Err` or a panic.
#[derive(Error, Debug)]
pub enum CheckError {
    /// A request invariant was violated (empty text, malformed repository).
    #[error("{0}")]
    Validation(String),

    /// A caller-supplied extraction regex or exclusion glob did not compile.
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The pattern as supplied by the caller
        pattern: String,
        /// The compile error reported by the engine
        message: String,
    },

    /// The repository could not be resolved from the argument or checkout.
    #[error(transparent)]
    Repository(#[from] issue_warden_github::errors::Error),

    /// An issue lookup failed in a way the pipeline cannot categorize.
    #[error("Issue lookup failed for #{number}: {message}")]
    Lookup {
        /// The issue number whose lookup failed
        number: u64,
        /// The underlying failure
        message: String,
    },
}

impl CheckError {
    /// Stable name surfaced as `error.type` in an `error`-reason result.
    pub fn kind(&self) -> &'static str {
        match self {
            CheckError::Validation(_) => "ValidationError",
            CheckError::InvalidPattern { .. } => "InvalidPatternError",
            CheckError::Repository(_) => "RepositoryError",
            CheckError::Lookup { .. } => "LookupError",
        }
    }
}
