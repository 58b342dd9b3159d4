use anyhow::Result;
use log::debug;
use reqwest::Client;

use crate::{
    feed::ReleaseFeed,
    http::HttpClient,
    provider::{DEFAULT_API_URL, GitHubProvider, Provider, RepoId},
};

/// User agent sent with every API request; GitHub rejects requests without one.
pub const USER_AGENT: &str = "relfeed-cli";

pub struct Config<P: Provider> {
    pub provider: P,
    pub repo: RepoId,
}

impl Config<GitHubProvider> {
    pub fn new(api_url: Option<String>) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        debug!("Using API URL: {}", api_url);

        let provider = GitHubProvider::from_http_client(HttpClient::new(client), &api_url);

        Ok(Self {
            provider,
            repo: RepoId::default(),
        })
    }
}

impl<P: Provider> Config<P> {
    pub fn into_feed(self) -> ReleaseFeed<P> {
        ReleaseFeed::new(self.provider, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[test]
    fn test_config_defaults() {
        let config = Config::new(None).unwrap();
        assert_eq!(config.provider.api_url(), "https://api.github.com");
        assert_eq!(config.repo, RepoId::new("IORoot", "reframer_gui"));
    }

    #[tokio::test]
    async fn test_config_sends_user_agent() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/IORoot/reframer_gui/releases")
            .match_header("user-agent", Matcher::Exact(USER_AGENT.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let feed = Config::new(Some(server.url())).unwrap().into_feed();
        let snapshot = feed.fetch_releases().await;

        mock.assert_async().await;
        assert!(!snapshot.used_fallback());
        assert!(snapshot.releases().is_empty());
    }
}
