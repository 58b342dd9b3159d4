//! Thin JSON-over-HTTP client.
//!
//! Requests are issued exactly once. Callers decide what a failure means:
//! the release feed substitutes fallback data, the latest-release lookup
//! reports absence.

use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for JSON endpoints.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs a GET request and deserializes the JSON response.
    ///
    /// Non-2xx statuses, transport failures and undecodable bodies all
    /// surface as errors.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET JSON from {}...", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send request")?;

        let response = response
            .error_for_status()
            .context("Server returned an error status")?;

        response
            .json::<T>()
            .await
            .context("Failed to parse JSON response")
    }
}
