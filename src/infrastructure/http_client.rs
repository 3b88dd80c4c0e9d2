//! HTTP client for title-page fetches
//!
//! Thin wrapper around `reqwest` with a fixed timeout and browser
//! user agent. One attempt per fetch: a timeout or non-2xx status is an
//! error for the caller to absorb, never retried here.

use std::time::Duration;

use anyhow::{Result, anyhow};
use reqwest::{Client, ClientBuilder};
use scraper::Html;
use tracing::{debug, error};

use crate::infrastructure::config::CrawlerConfig;

/// Configuration for HTTP client behavior
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
    /// Whether to follow redirects
    pub follow_redirects: bool,
}

impl HttpClientConfig {
    /// Create HttpClientConfig from the crawler section of the app config
    pub fn from_crawler_config(crawler: &CrawlerConfig) -> Self {
        Self {
            timeout_seconds: crawler.request_timeout_seconds,
            user_agent: crawler.user_agent.clone(),
            follow_redirects: true,
        }
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self::from_crawler_config(&CrawlerConfig::default())
    }
}

/// HTTP client with fixed timeout and user agent
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .cookie_store(true)
            .gzip(true)
            .redirect(if config.follow_redirects {
                reqwest::redirect::Policy::limited(10)
            } else {
                reqwest::redirect::Policy::none()
            })
            .build()
            .map_err(|e| anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self { client, config })
    }

    /// Fetch HTML content as a string (Send-compatible).
    ///
    /// Single attempt: network errors, timeouts, and non-success statuses
    /// all surface as errors.
    pub async fn fetch_html_string(&self, url: &str) -> Result<String> {
        debug!("HTTP GET: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| anyhow!("HTTP request failed: {}", e))?;

        if !response.status().is_success() {
            error!("HTTP error {}: {}", response.status(), url);
            return Err(anyhow!("HTTP error {}: {}", response.status(), url));
        }

        let html_content = response
            .text()
            .await
            .map_err(|e| anyhow!("Failed to read response body: {}", e))?;

        if html_content.is_empty() {
            return Err(anyhow!("Empty response from {}", url));
        }

        Ok(html_content)
    }

    /// Parse HTML from string (non-async, can be called after fetch)
    pub fn parse_html(&self, html_content: &str) -> Html {
        Html::parse_document(html_content)
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_with_defaults() {
        let client = HttpClient::with_config(HttpClientConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = HttpClientConfig {
            timeout_seconds: 1,
            user_agent: "Test Agent".to_string(),
            follow_redirects: false,
        };
        let client = HttpClient::with_config(config).unwrap();
        assert_eq!(client.config().timeout_seconds, 1);
    }
}
