//! The check command.
//!
//! Gathers a [`CheckRequest`] from the command line, wires up the GitHub
//! client and repository resolver, runs the validation pipeline and
//! renders the result as human-readable text or JSON.

use std::str::FromStr;

use clap::Args;
use tracing::{debug, instrument};

use issue_warden_core::{
    CheckMessageResult, CheckMode, CheckRequest, IssueStatusFilter, IssueWarden,
    ValidationReason,
};
use issue_warden_github::auth::{CredentialSource, EnvCredentials};
use issue_warden_github::github::GitHubIssueClient;
use issue_warden_github::remote::GitRemoteResolver;

use crate::errors::CliError;

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Text to validate; defaults to the current branch name in branch mode
    #[arg(short, long)]
    pub text: Option<String>,

    /// Check mode selecting the default extraction and exclusion behavior
    #[arg(long, default_value = "default", value_parser = ["default", "branch", "commit"])]
    pub mode: String,

    /// Extraction regex overriding the mode default; the issue number must
    /// be in capture group 1
    #[arg(long)]
    pub extract: Option<String>,

    /// Exclusion glob overriding the mode default; pass an empty string to
    /// disable the default exclusion
    #[arg(long)]
    pub exclude: Option<String>,

    /// Issue status filter
    #[arg(long, default_value = "all", value_parser = ["all", "open", "closed"])]
    pub issue_status: String,

    /// Repository as owner/repo; defaults to the origin remote
    #[arg(short, long)]
    pub repo: Option<String>,

    /// GitHub token; defaults to GITHUB_TOKEN/GH_TOKEN, the git credential
    /// helper, then the GitHub CLI
    #[arg(long)]
    pub github_token: Option<String>,

    /// GitHub Enterprise hostname; defaults to GH_HOST or github.com
    #[arg(long)]
    pub hostname: Option<String>,

    /// Output the full result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Executes the check command.
///
/// # Arguments
///
/// * `args` - The parsed command-line arguments
///
/// # Returns
///
/// `Ok(())` when validation passed; an error carrying the documented exit
/// code otherwise (1 for a failed validation, 2 for usage problems and
/// unexpected errors).
#[instrument(skip(args), fields(mode = %args.mode))]
pub async fn execute(args: CheckArgs) -> Result<(), CliError> {
    let mode = CheckMode::from_str(&args.mode)
        .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
    let issue_status = IssueStatusFilter::from_str(&args.issue_status)
        .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

    let resolver = GitRemoteResolver::default();

    let text = match args.text {
        Some(text) => text,
        None if mode == CheckMode::Branch => resolver.current_branch().map_err(|e| {
            CliError::Unexpected(format!("Failed to determine the current branch: {}", e))
        })?,
        None => {
            return Err(CliError::InvalidArguments(
                "--text is required outside branch mode".to_string(),
            ));
        }
    };

    let credentials = EnvCredentials;
    let token = args.github_token.or_else(|| credentials.token());
    let api_base = credentials.api_base(args.hostname.as_deref());
    debug!(api_base = api_base.as_str(), "Resolved API base");

    let client = GitHubIssueClient::new(api_base, token)
        .map_err(|e| CliError::Unexpected(e.to_string()))?;
    let warden = IssueWarden::new(client, resolver);

    let request = CheckRequest {
        text,
        check_mode: mode,
        extract_pattern: args.extract,
        exclude_pattern: args.exclude,
        issue_status,
        repository: args.repo,
    };

    let result = warden.check_message(request).await;

    if args.json {
        let serialized = serde_json::to_string_pretty(&result)
            .map_err(|e| CliError::Unexpected(e.to_string()))?;
        println!("{}", serialized);
    } else {
        render_human(&result);
    }

    outcome(&result)
}

/// Maps a result onto the CLI's exit convention.
fn outcome(result: &CheckMessageResult) -> Result<(), CliError> {
    match result.reason {
        ValidationReason::Error => Err(CliError::Unexpected(result.message.clone())),
        _ if result.success => Ok(()),
        _ => Err(CliError::ValidationFailed(result.message.clone())),
    }
}

/// Prints the result the way the original front-end renders it: a lead
/// line with the summary, then indented detail lines.
fn render_human(result: &CheckMessageResult) {
    if result.success {
        println!("✅ {}", result.message);
        if let Some(issues) = &result.issues {
            if !issues.valid.is_empty() {
                println!("   Valid issues: {}", format_numbers(&issues.valid));
            }
        }
        println!("   Mode: {}", result.input.check_mode);
        if !result.input.repo.is_empty() {
            println!("   Repository: {}", result.input.repo);
        }
    } else {
        eprintln!("❌ {}", result.message);
        if let Some(issues) = &result.issues {
            if !issues.found.is_empty() {
                eprintln!("   Found issues: {}", format_numbers(&issues.found));
            }
            if !issues.valid.is_empty() {
                eprintln!("   Valid: {}", format_numbers(&issues.valid));
            }
            let invalid: Vec<u64> = issues
                .not_found
                .iter()
                .chain(issues.wrong_state.iter())
                .copied()
                .collect();
            if !invalid.is_empty() {
                eprintln!("   Invalid: {}", format_numbers(&invalid));
            }
        }
        eprintln!("   Mode: {}", result.input.check_mode);
        if !result.input.repo.is_empty() {
            eprintln!("   Repository: {}", result.input.repo);
        }
    }
}

/// Formats numbers as `#1, #2, #3`.
fn format_numbers(numbers: &[u64]) -> String {
    numbers
        .iter()
        .map(|n| format!("#{}", n))
        .collect::<Vec<_>>()
        .join(", ")
}
