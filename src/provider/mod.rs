//! Release providers.
//!
//! A provider knows how to reach a hosting platform's release endpoints and
//! converts its wire format into the crate's [`Release`] model.

mod github;

use anyhow::Result;
use async_trait::async_trait;
use std::fmt;

pub use github::GitHubProvider;

/// Default GitHub API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Owner of the repository whose releases are published on the site.
pub const REPO_OWNER: &str = "IORoot";

/// Name of the repository whose releases are published on the site.
pub const REPO_NAME: &str = "reframer_gui";

/// Repository identifier (owner/repo format).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl Default for RepoId {
    fn default() -> Self {
        Self::new(REPO_OWNER, REPO_NAME)
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// A downloadable file attached to a release.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReleaseAsset {
    /// File name (e.g., "Reframer-1.0.0.dmg")
    pub name: String,
    /// Direct download URL
    pub download_url: String,
}

/// A tagged, dated publication with free-text notes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Release {
    /// Version tag (e.g., "v1.0.0")
    pub tag: String,
    /// Publication date (ISO 8601)
    pub published_at: Option<String>,
    /// Release notes body
    pub body: Option<String>,
    /// Downloadable assets, in upstream order
    pub assets: Vec<ReleaseAsset>,
}

/// Source of release data for a repository.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Provider: Send + Sync {
    /// Get the API base URL.
    fn api_url(&self) -> &str;

    /// Fetch the release list, newest first as returned upstream.
    async fn get_releases(&self, repo: &RepoId) -> Result<Vec<Release>>;

    /// Fetch the release upstream designates as latest.
    async fn get_latest_release(&self, repo: &RepoId) -> Result<Release>;
}
