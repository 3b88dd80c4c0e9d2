//! Configuration infrastructure
//!
//! Contains configuration loading and management for the title-page
//! crawler. `AppConfig::default()` is the complete working configuration;
//! an optional JSON file overrides individual sections.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::infrastructure::parsing::TitleSelectors;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Crawler behavior settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// CSS selectors for title pages
    #[serde(default)]
    pub selectors: TitleSelectors,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            crawler: CrawlerConfig::default(),
            selectors: TitleSelectors::default(),
        }
    }
}

/// Crawler behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// Base URL for title pages; the title identifier is appended
    pub base_url: String,

    /// User agent string for HTTP requests
    pub user_agent: String,

    /// Per-request timeout in seconds
    pub request_timeout_seconds: u64,

    /// Maximum concurrent in-flight fetches
    pub max_concurrent_requests: usize,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            base_url: imdb::TITLE_PAGE_BASE.to_string(),
            user_agent: defaults::USER_AGENT.to_string(),
            request_timeout_seconds: defaults::REQUEST_TIMEOUT_SECONDS,
            max_concurrent_requests: defaults::MAX_CONCURRENT_REQUESTS,
        }
    }
}

/// Manages loading the application configuration from a JSON file
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// Load configuration, falling back to defaults when no file exists.
    pub async fn load_config(&self) -> Result<AppConfig> {
        if !self.config_path.exists() {
            info!(
                "No config file at {}, using defaults",
                self.config_path.display()
            );
            return Ok(AppConfig::default());
        }

        let content = tokio::fs::read_to_string(&self.config_path)
            .await
            .with_context(|| {
                format!("Failed to read config file: {}", self.config_path.display())
            })?;

        let config: AppConfig = serde_json::from_str(&content).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })?;

        info!("Loaded configuration from {}", self.config_path.display());
        Ok(config)
    }
}

/// Site constants for the movie database
pub mod imdb {
    /// Title pages live at `{TITLE_PAGE_BASE}/{title_id}`
    pub const TITLE_PAGE_BASE: &str = "https://www.imdb.com/title";
}

/// Default values for crawler settings
pub mod defaults {
    pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
    pub const REQUEST_TIMEOUT_SECONDS: u64 = 10;
    pub const MAX_CONCURRENT_REQUESTS: usize = 10;
}
