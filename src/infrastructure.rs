//! Infrastructure layer for HTTP, parsing, storage, and external integrations
//!
//! This module provides the HTTP client, HTML parsing, CSV catalog storage,
//! configuration, and logging used by the batch coordinator.

pub mod config; // Configuration constants and helpers
pub mod csv_store; // CSV catalog load/save
pub mod extractor; // Title-page metadata extractor
pub mod http_client; // HTTP client for page fetches
pub mod logging; // Logging infrastructure
pub mod parsing; // HTML parsing architecture

// Re-export commonly used items
pub use config::{AppConfig, ConfigManager, CrawlerConfig};
pub use csv_store::CsvCatalogStore;
pub use extractor::PageExtractor;
pub use http_client::{HttpClient, HttpClientConfig};
pub use logging::init_logging;
pub use parsing::{ParsingError, ParsingResult, TitleParser, TitleSelectors};
