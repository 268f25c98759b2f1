#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Error types for platform operations.
///
/// These cover the collaborators this crate provides: resolving a
/// repository from an explicit string or the local git checkout, and
/// talking to the GitHub REST API. Lookup-level failures that are part of
/// the normal validation flow (a 404 for a candidate issue number, an auth
/// rejection) are NOT errors; they are reported through
/// [`crate::models::IssueLookup::Missing`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP client could not be constructed or an API call failed in a
    /// way that is not part of the normalized lookup contract.
    #[error("API request failed: {0}")]
    ApiError(String),

    /// An explicit repository string did not have the `owner/repo` form.
    #[error("Invalid repository format. Expected 'owner/repo', got '{0}'")]
    InvalidRepository(String),

    /// The local git checkout could not provide an `origin` remote.
    ///
    /// Raised when the working directory is not inside a git repository,
    /// when no `origin` remote is configured, or when the remote has no
    /// fetch URL.
    #[error("Failed to read the git remote: {0}")]
    GitRemote(String),

    /// The `origin` remote URL did not match any supported form.
    #[error(
        "Unable to parse owner and repository from remote URL: {0}. \
         Supported formats: https://github.com/owner/repo[.git], \
         git@github.com:owner/repo[.git], ssh://git@github.com/owner/repo[.git]"
    )]
    UnsupportedRemoteUrl(String),
}
