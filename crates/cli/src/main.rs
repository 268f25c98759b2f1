//! # Issue Warden CLI
//!
//! Command-line interface for validating that a branch name, commit
//! message or pull-request text references a valid GitHub issue.
//!
//! # Examples
//!
//! ```bash
//! # Check a commit message
//! issue-warden --text "fix: resolve login bug #123" --mode commit
//!
//! # Check the current branch against open issues only
//! issue-warden --mode branch --issue-status open
//!
//! # Full JSON result for scripting and CI
//! issue-warden --text "#123" --repo octocat/hello-world --json
//! ```
//!
//! Exit codes: 0 when validation passes (including skip and exclusion
//! exits), 1 when the text fails validation, 2 for usage problems and
//! unexpected errors.

#![deny(missing_docs)]

use std::process::{ExitCode, Termination};

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Command implementations for the CLI.
mod commands;

/// Error types specific to the CLI.
mod errors;

use commands::check::CheckArgs;

/// Command-line interface structure for issue-warden.
///
/// A single check command: every flag belongs to the one validation run.
#[derive(Parser)]
#[command(author, version, about = "Validate that text references a valid GitHub issue", long_about = None)]
struct Cli {
    /// The validation flags
    #[command(flatten)]
    check: CheckArgs,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Main entry point for the issue-warden CLI.
///
/// Initializes logging, parses the command line and runs the check
/// command, translating its outcome into the documented exit codes.
#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().pretty())
        .with(EnvFilter::from_env("ISSUE_WARDEN_LOG"))
        .init();

    // Parse command line arguments
    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match commands::check::execute(cli.check).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error validating text: {}", e);
            e.report()
        }
    }
}
