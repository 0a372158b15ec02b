//! GitHub gist API access
//!
//! The migration only needs two calls: listing a page of a user's gists and
//! downloading the raw text of a single file. Both sit behind [`GistApi`] so
//! the conversion logic can run against any backend.

pub mod gist;
pub mod pages;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use tracing::debug;

pub use gist::{Gist, GistFile, GistFiles};
pub use pages::{PER_PAGE, gist_pages};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[async_trait]
pub trait GistApi: Send + Sync {
    /// Fetches one page (1-indexed) of the user's gists.
    /// Entries stay undecoded so one malformed gist can't sink the page.
    async fn list_gists(&self, username: &str, page: u32, per_page: u32) -> Result<Vec<Value>>;

    /// Downloads the raw content of a gist file
    async fn fetch_raw(&self, url: &str) -> Result<String>;
}

/// HTTP client for the GitHub REST API
#[derive(Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    api_url: String,
    token: String,
}

impl GithubClient {
    pub fn new(api_url: &str, token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("gistport/", env!("CARGO_PKG_VERSION"))),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    fn auth_header(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!("token {}", self.token))
            .context("GitHub token contains invalid header characters")?;
        value.set_sensitive(true);
        Ok(value)
    }
}

#[async_trait]
impl GistApi for GithubClient {
    async fn list_gists(&self, username: &str, page: u32, per_page: u32) -> Result<Vec<Value>> {
        let url = format!("{}/users/{}/gists", self.api_url, username);
        debug!("GET {} page={}", url, page);

        let response = self
            .http
            .get(&url)
            .query(&[("per_page", per_page), ("page", page)])
            .header(ACCEPT, "application/vnd.github+json")
            .header(AUTHORIZATION, self.auth_header()?)
            .send()
            .await
            .with_context(|| format!("Failed to request gists page {page}"))?
            .error_for_status()
            .with_context(|| format!("GitHub rejected gists page {page}"))?;

        response
            .json::<Vec<Value>>()
            .await
            .with_context(|| format!("Failed to decode gists page {page}"))
    }

    async fn fetch_raw(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);

        self.http
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to request {url}"))?
            .error_for_status()
            .with_context(|| format!("Failed to download {url}"))?
            .text()
            .await
            .with_context(|| format!("Failed to read body of {url}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash_from_api_url() {
        let client = GithubClient::new("https://github.example.com/api/v3/", "t").unwrap();
        assert_eq!(client.api_url, "https://github.example.com/api/v3");
    }

    #[test]
    fn auth_header_is_token_scheme() {
        let client = GithubClient::new(DEFAULT_API_URL, "abc").unwrap();
        let header = client.auth_header().unwrap();
        assert!(header.is_sensitive());
        assert_eq!(header.to_str().unwrap(), "token abc");
    }

    #[test]
    fn rejects_token_with_newline() {
        let client = GithubClient::new(DEFAULT_API_URL, "abc\n").unwrap();
        assert!(client.auth_header().is_err());
    }
}
