//! Movie Crawler - batch metadata enrichment for CSV movie catalogs
//!
//! This crate fetches per-title metadata (genre, vote count, top cast,
//! director, poster URL) from movie database title pages and merges the
//! results back into a CSV catalog keyed by title identifier.

// Module declarations
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export the crate surface for binaries and integration tests
pub use application::{BatchCoordinator, BatchParams, BatchReport};
pub use domain::{Catalog, CatalogError, FieldValue, MetadataExtractor, TitleMetadata};
pub use infrastructure::{
    AppConfig, ConfigManager, CrawlerConfig, CsvCatalogStore, HttpClient, HttpClientConfig,
    PageExtractor, ParsingError, TitleParser, TitleSelectors, init_logging,
};
