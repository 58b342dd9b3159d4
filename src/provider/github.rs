//! GitHub provider implementation.

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
#[cfg(test)]
use reqwest::Client;

use crate::http::HttpClient;

use super::{Provider, Release, ReleaseAsset, RepoId};

/// GitHub API response types (internal).
mod api {
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    pub struct Release {
        pub tag_name: String,
        #[serde(default)]
        pub published_at: Option<String>,
        #[serde(default)]
        pub body: Option<String>,
        #[serde(default)]
        pub assets: Vec<Asset>,
    }

    #[derive(Deserialize, Debug)]
    pub struct Asset {
        pub name: String,
        pub browser_download_url: String,
    }
}

/// GitHub provider implementation.
pub struct GitHubProvider {
    http_client: HttpClient,
    api_url: String,
}

impl GitHubProvider {
    /// Create a new GitHub provider with default API URL.
    #[cfg(test)]
    pub fn new(client: Client) -> Self {
        Self::with_api_url(client, super::DEFAULT_API_URL)
    }

    /// Create a new GitHub provider with custom API URL.
    #[cfg(test)]
    pub fn with_api_url(client: Client, api_url: &str) -> Self {
        Self::from_http_client(HttpClient::new(client), api_url)
    }

    /// Create from an existing HttpClient.
    pub fn from_http_client(http_client: HttpClient, api_url: &str) -> Self {
        Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    fn releases_url(&self, repo: &RepoId) -> String {
        format!("{}/repos/{}/{}/releases", self.api_url, repo.owner, repo.repo)
    }
}

#[async_trait]
impl Provider for GitHubProvider {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn get_releases(&self, repo: &RepoId) -> Result<Vec<Release>> {
        let url = self.releases_url(repo);
        debug!("Fetching releases from {}...", url);
        let releases: Vec<api::Release> = self.http_client.get_json(&url).await?;
        Ok(releases.into_iter().map(Release::from).collect())
    }

    async fn get_latest_release(&self, repo: &RepoId) -> Result<Release> {
        let url = format!("{}/latest", self.releases_url(repo));
        debug!("Fetching latest release from {}...", url);
        let release: api::Release = self.http_client.get_json(&url).await?;
        Ok(release.into())
    }
}

impl From<api::Release> for Release {
    fn from(r: api::Release) -> Self {
        Release {
            tag: r.tag_name,
            published_at: r.published_at,
            body: r.body,
            assets: r.assets.into_iter().map(|a| a.into()).collect(),
        }
    }
}

impl From<api::Asset> for ReleaseAsset {
    fn from(a: api::Asset) -> Self {
        ReleaseAsset {
            name: a.name,
            download_url: a.browser_download_url,
        }
    }
}
