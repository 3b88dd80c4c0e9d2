//! Title-page metadata extractor
//!
//! Combines the HTTP client and the title parser into the
//! [`MetadataExtractor`] service: one fetch, one parse, never an error.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::services::MetadataExtractor;
use crate::domain::title::TitleMetadata;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::http_client::{HttpClient, HttpClientConfig};
use crate::infrastructure::parsing::{PageParser, TitleParser};

/// Fetches a title page and parses its metadata fields.
pub struct PageExtractor {
    http: HttpClient,
    parser: TitleParser,
    base_url: String,
}

impl PageExtractor {
    /// Build an extractor from the application configuration.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let http = HttpClient::with_config(HttpClientConfig::from_crawler_config(&config.crawler))?;
        let parser = TitleParser::with_selectors(&config.selectors)?;
        Ok(Self::with_parts(http, parser, config.crawler.base_url.clone()))
    }

    /// Assemble an extractor from already-built parts.
    pub fn with_parts(http: HttpClient, parser: TitleParser, base_url: impl Into<String>) -> Self {
        Self {
            http,
            parser,
            base_url: base_url.into(),
        }
    }

    /// Canonical page URL for a title identifier.
    fn title_url(&self, title_id: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), title_id)
    }
}

#[async_trait]
impl MetadataExtractor for PageExtractor {
    async fn extract(&self, title_id: &str) -> TitleMetadata {
        let url = self.title_url(title_id);

        // The document must not be held across an await: scraper's Html is
        // not Send, so fetch the body first and parse after the last
        // suspension point.
        let body = match self.http.fetch_html_string(&url).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Fetch failed for {}: {}", title_id, e);
                return TitleMetadata::failure(title_id);
            }
        };

        let html = self.http.parse_html(&body);
        let metadata = self.parser.parse(&html, title_id);
        debug!(
            "Extracted {}: genre={} votes={} cast={} director={} poster={}",
            title_id,
            metadata.genre.is_present(),
            metadata.votes.is_present(),
            metadata.top_cast.is_present(),
            metadata.director.is_present(),
            metadata.poster_url.is_present(),
        );
        metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::AppConfig;

    #[test]
    fn title_url_joins_base_and_identifier() {
        let config = AppConfig {
            crawler: crate::infrastructure::config::CrawlerConfig {
                base_url: "http://localhost:9/title/".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let extractor = PageExtractor::from_config(&config).unwrap();
        assert_eq!(
            extractor.title_url("tt0111161"),
            "http://localhost:9/title/tt0111161"
        );
    }
}
