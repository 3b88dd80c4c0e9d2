//! HTML parsing infrastructure for title pages
//!
//! Trait-based parsing architecture with per-field fault isolation and
//! configurable selector strategies.

pub mod config;
pub mod error;
pub mod title_parser;

// Re-export public types
pub use config::TitleSelectors;
pub use error::{ParsingError, ParsingResult};
pub use title_parser::TitleParser;

use scraper::Html;

/// Parser for one page shape, yielding a domain record.
///
/// Parsing itself is infallible: individual field failures are recorded
/// inside the output rather than aborting the parse.
pub trait PageParser {
    type Output;

    /// Parse an already-fetched document for the given identifier.
    fn parse(&self, html: &Html, title_id: &str) -> Self::Output;
}
