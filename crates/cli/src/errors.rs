use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// The text failed validation (no issues found, or invalid issues)
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// Invalid arguments
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Validation could not complete
    #[error("Error: {0}")]
    Unexpected(String),
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Unexpected(err.to_string())
    }
}

impl std::process::Termination for CliError {
    fn report(self) -> std::process::ExitCode {
        match self {
            CliError::ValidationFailed(_) => std::process::ExitCode::from(1),
            CliError::InvalidArguments(_) => std::process::ExitCode::from(2),
            CliError::Unexpected(_) => std::process::ExitCode::from(2),
        }
    }
}
