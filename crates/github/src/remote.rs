//! Repository resolution.
//!
//! A validation run needs to know which repository to query. Callers can
//! pass an explicit `owner/repo` string; otherwise the repository is
//! derived from the `origin` remote of the enclosing git checkout.

use std::path::PathBuf;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::errors::Error;
use crate::models::Repository;

#[cfg(test)]
#[path = "remote_tests.rs"]
mod tests;

lazy_static! {
    /// `https://host/owner/repo[.git]`
    static ref HTTPS_REMOTE: Regex =
        Regex::new(r"(?i)^https?://[^/]+/([^/]+)/([^/.]+)(?:\.git)?$")
            .expect("Failed to compile https remote regex");

    /// `git@host:owner/repo[.git]`
    static ref SCP_REMOTE: Regex =
        Regex::new(r"(?i)^git@[^:]+:([^/]+)/([^/.]+)(?:\.git)?$")
            .expect("Failed to compile scp remote regex");

    /// `ssh://git@host/owner/repo[.git]`
    static ref SSH_REMOTE: Regex =
        Regex::new(r"(?i)^ssh://git@[^/]+/([^/]+)/([^/.]+)(?:\.git)?$")
            .expect("Failed to compile ssh remote regex");
}

/// Resolves the repository a validation run should query.
pub trait RepositoryResolver: Send + Sync {
    /// Resolves an explicit `owner/repo` argument, or derives the
    /// repository from the environment when none was given.
    fn resolve(&self, explicit: Option<&str>) -> Result<Repository, Error>;
}

/// Splits an explicit `owner/repo` argument.
///
/// Exactly two non-empty `/`-separated segments are accepted; anything
/// else is an [`Error::InvalidRepository`].
pub fn parse_repository(value: &str) -> Result<Repository, Error> {
    let mut segments = value.split('/');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
            Ok(Repository {
                owner: owner.to_string(),
                name: name.to_string(),
            })
        }
        _ => Err(Error::InvalidRepository(value.to_string())),
    }
}

/// Parses a git remote URL into a repository.
///
/// Supports the https, scp-style ssh and ssh-protocol forms, with an
/// optional `.git` suffix; any other shape is an
/// [`Error::UnsupportedRemoteUrl`].
pub fn parse_remote_url(url: &str) -> Result<Repository, Error> {
    for pattern in [&*HTTPS_REMOTE, &*SCP_REMOTE, &*SSH_REMOTE] {
        if let Some(captures) = pattern.captures(url) {
            return Ok(Repository {
                owner: captures[1].to_string(),
                name: captures[2].to_string(),
            });
        }
    }

    Err(Error::UnsupportedRemoteUrl(url.to_string()))
}

/// Resolver backed by the local git checkout.
///
/// Discovery starts at the configured path (the working directory by
/// default) and walks upward, so the resolver works from any subdirectory
/// of a checkout.
#[derive(Debug, Clone)]
pub struct GitRemoteResolver {
    path: PathBuf,
}

impl Default for GitRemoteResolver {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
        }
    }
}

impl GitRemoteResolver {
    /// Creates a resolver that discovers the repository from `path`.
    pub fn discover_from(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open(&self) -> Result<git2::Repository, Error> {
        git2::Repository::discover(&self.path)
            .map_err(|_| Error::GitRemote("Not in a git repository".to_string()))
    }

    /// Reads the fetch URL of the `origin` remote.
    pub fn remote_url(&self) -> Result<String, Error> {
        let repo = self.open()?;
        let remote = repo
            .find_remote("origin")
            .map_err(|_| Error::GitRemote("No origin remote found".to_string()))?;
        let url = remote
            .url()
            .ok_or_else(|| Error::GitRemote("No origin remote found".to_string()))?;

        Ok(url.to_string())
    }

    /// Reads the name of the currently checked-out branch.
    ///
    /// Front-end convenience for branch mode; not consulted by the
    /// validation pipeline itself.
    pub fn current_branch(&self) -> Result<String, Error> {
        let repo = self.open()?;
        let head = repo
            .head()
            .map_err(|e| Error::GitRemote(format!("Failed to read HEAD: {}", e.message())))?;

        head.shorthand()
            .map(str::to_string)
            .ok_or_else(|| Error::GitRemote("HEAD is not pointing at a branch".to_string()))
    }
}

impl RepositoryResolver for GitRemoteResolver {
    fn resolve(&self, explicit: Option<&str>) -> Result<Repository, Error> {
        match explicit {
            Some(value) => parse_repository(value),
            None => {
                let url = self.remote_url()?;
                debug!(url = url.as_str(), "Resolved repository from origin remote");
                parse_remote_url(&url)
            }
        }
    }
}
