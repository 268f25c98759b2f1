//! Credential and host resolution.
//!
//! Tokens and Enterprise hosts are ambient configuration; callers that
//! have neither on hand go through a [`CredentialSource`] so the lookup
//! chain stays an explicit, substitutable dependency instead of a hidden
//! read of the process environment.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::github::DEFAULT_API_BASE;

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;

/// Ambient configuration consulted when the caller does not supply a
/// token or hostname explicitly.
pub trait CredentialSource {
    /// Resolves an API token, or `None` when no source has one.
    fn token(&self) -> Option<String>;

    /// Resolves the REST API base URL, honoring an explicit hostname
    /// before any ambient configuration.
    fn api_base(&self, hostname: Option<&str>) -> String;
}

/// Credential source backed by the process environment, the git
/// credential helper and the GitHub CLI.
///
/// Token priority: `GITHUB_TOKEN`, `GH_TOKEN`, `git credential fill`,
/// `gh auth token`. Host priority: explicit hostname, `GH_HOST`,
/// `GITHUB_SERVER_URL`, github.com.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvCredentials;

impl CredentialSource for EnvCredentials {
    fn token(&self) -> Option<String> {
        for var in ["GITHUB_TOKEN", "GH_TOKEN"] {
            if let Ok(token) = std::env::var(var) {
                if !token.is_empty() {
                    debug!(source = var, "Resolved GitHub token");
                    return Some(token);
                }
            }
        }

        token_from_git_credentials().or_else(token_from_gh_cli)
    }

    fn api_base(&self, hostname: Option<&str>) -> String {
        if let Some(hostname) = hostname {
            return api_base_for_host(hostname);
        }

        if let Ok(host) = std::env::var("GH_HOST") {
            if !host.is_empty() {
                return api_base_for_host(&host);
            }
        }

        // GitHub Actions exports the server URL; Enterprise Server serves
        // the REST API under /api/v3.
        if let Ok(server_url) = std::env::var("GITHUB_SERVER_URL") {
            if !server_url.is_empty() {
                return format!("{}/api/v3", server_url.trim_end_matches('/'));
            }
        }

        DEFAULT_API_BASE.to_string()
    }
}

/// Maps a hostname to its REST API base.
///
/// github.com uses the dedicated API domain; GitHub Enterprise Server
/// exposes the API under `/api/v3` on the instance host. Schemes and
/// trailing slashes in the hostname are tolerated.
pub fn api_base_for_host(hostname: &str) -> String {
    let hostname = hostname
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');

    if hostname == "github.com" {
        DEFAULT_API_BASE.to_string()
    } else {
        format!("https://{}/api/v3", hostname)
    }
}

/// Asks the configured git credential helper for a github.com token.
fn token_from_git_credentials() -> Option<String> {
    let mut child = Command::new("git")
        .args(["credential", "fill"])
        .env("GIT_TERMINAL_PROMPT", "0")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .ok()?;

    child
        .stdin
        .take()?
        .write_all(b"url=https://github.com\n\n")
        .ok()?;

    let output = child.wait_with_output().ok()?;
    if !output.status.success() {
        return None;
    }

    let token = credential_fill_password(&String::from_utf8_lossy(&output.stdout));
    if token.is_some() {
        debug!(source = "git-credential", "Resolved GitHub token");
    }
    token
}

/// Extracts the `password=` line from `git credential fill` output.
fn credential_fill_password(output: &str) -> Option<String> {
    output
        .lines()
        .find_map(|line| line.strip_prefix("password="))
        .map(str::to_string)
        .filter(|token| !token.is_empty())
}

/// Falls back to the GitHub CLI's stored token.
fn token_from_gh_cli() -> Option<String> {
    let output = Command::new("gh")
        .args(["auth", "token"])
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if looks_like_cli_token(&token) {
        debug!(source = "gh-cli", "Resolved GitHub token");
        Some(token)
    } else {
        None
    }
}

/// Only trust `gh` output that carries a known token prefix.
fn looks_like_cli_token(token: &str) -> bool {
    token.starts_with("gho_") || token.starts_with("ghp_")
}
