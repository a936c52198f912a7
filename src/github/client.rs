// HTTP client for the GitHub REST API

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

use super::retry::{retry_request, transient_http};
use super::types::Gist;

const GITHUB_API_URL: &str = "https://api.github.com";
const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const USER_AGENT: &str = concat!("kiss/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 30;
const PAGE_SIZE: usize = 100;

pub struct GithubClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(token: Option<String>) -> Result<Self> {
        Self::with_base_url(GITHUB_API_URL.to_string(), token)
    }

    /// Point the client at a different API root. Tests use this to target
    /// a local mock server.
    pub fn with_base_url(base_url: String, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// List all gists for a user, following pagination. Transient
    /// failures are retried with backoff; a 404 for an unknown user is
    /// surfaced immediately.
    pub async fn list_gists(&self, user: &str) -> Result<Vec<Gist>> {
        let mut gists = Vec::new();
        let mut page = 1;

        loop {
            let batch = retry_request(|| self.fetch_gist_page(user, page), transient_http)
                .await
                .with_context(|| format!("Failed to list gists for user '{}'", user))?;
            let short_page = batch.len() < PAGE_SIZE;
            gists.extend(batch);

            if short_page {
                break;
            }
            page += 1;
        }

        tracing::debug!("Fetched {} gists for user {}", gists.len(), user);
        Ok(gists)
    }

    async fn fetch_gist_page(
        &self,
        user: &str,
        page: usize,
    ) -> Result<Vec<Gist>, reqwest::Error> {
        let url = format!("{}/users/{}/gists", self.base_url, user);
        tracing::debug!("GET {} (page {})", url, page);

        let mut request = self
            .client
            .get(&url)
            .header("Accept", GITHUB_ACCEPT)
            .query(&[("per_page", PAGE_SIZE.to_string()), ("page", page.to_string())]);

        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?.error_for_status()?;
        response.json().await
    }

    /// Fetch the raw text of a gist file (e.g. a README) by its raw URL.
    pub async fn fetch_raw(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Fetching {} failed with status {}", url, status);
        }

        response.text().await.context("Failed to read response body")
    }
}
