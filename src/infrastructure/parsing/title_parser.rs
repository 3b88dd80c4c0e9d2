//! Title page parser
//!
//! Extracts the five metadata fields (genre, votes, top cast, director,
//! poster URL) from a fetched title page. Each field extraction is guarded
//! independently: a missing element empties only that field, and an
//! unparsable value marks only that field as failed.

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use super::PageParser;
use super::config::TitleSelectors;
use super::error::{ParsingError, ParsingResult};
use crate::domain::title::{FieldValue, TitleMetadata};

/// Performer names kept from the top-cast section, in document order.
const TOP_CAST_LIMIT: usize = 5;

/// Parser for extracting title metadata from title detail pages
pub struct TitleParser {
    poster_selectors: Vec<Selector>,
    genre_selectors: Vec<Selector>,
    cast_selectors: Vec<Selector>,
    principal_credit_selectors: Vec<Selector>,
    vote_count_selectors: Vec<Selector>,

    /// Link elements inside a principal-credit item
    credit_link_selector: Selector,
}

impl TitleParser {
    /// Create a new title parser with the default selector configuration
    pub fn new() -> ParsingResult<Self> {
        Self::with_selectors(&TitleSelectors::default())
    }

    /// Create a parser with custom selector configuration
    pub fn with_selectors(selectors: &TitleSelectors) -> ParsingResult<Self> {
        Ok(Self {
            poster_selectors: Self::compile_selectors("poster", &selectors.poster)?,
            genre_selectors: Self::compile_selectors("genre", &selectors.genre)?,
            cast_selectors: Self::compile_selectors("cast", &selectors.cast)?,
            principal_credit_selectors: Self::compile_selectors(
                "principal_credit",
                &selectors.principal_credit,
            )?,
            vote_count_selectors: Self::compile_selectors("vote_count", &selectors.vote_count)?,
            credit_link_selector: Selector::parse("a")
                .map_err(|e| ParsingError::invalid_selector("a", e))?,
        })
    }

    /// Compile selector strings into Selector objects.
    ///
    /// A malformed selector is skipped with a warning; a field whose whole
    /// list fails to compile is a configuration error.
    fn compile_selectors(field: &str, selector_strings: &[String]) -> ParsingResult<Vec<Selector>> {
        let mut selectors = Vec::new();

        for selector_str in selector_strings {
            match Selector::parse(selector_str) {
                Ok(selector) => selectors.push(selector),
                Err(e) => {
                    warn!("Failed to compile selector '{}': {}", selector_str, e);
                }
            }
        }

        if selectors.is_empty() {
            return Err(ParsingError::no_usable_selectors(field, selector_strings));
        }

        Ok(selectors)
    }

    /// First element matched by any selector in the list, tried in order.
    fn select_first<'a>(html: &'a Html, selectors: &[Selector]) -> Option<ElementRef<'a>> {
        selectors.iter().find_map(|s| html.select(s).next())
    }

    /// All elements matched by the first selector in the list that matches
    /// anything, in document order.
    fn select_all<'a>(html: &'a Html, selectors: &[Selector]) -> Vec<ElementRef<'a>> {
        for selector in selectors {
            let matches: Vec<ElementRef<'a>> = html.select(selector).collect();
            if !matches.is_empty() {
                return matches;
            }
        }
        Vec::new()
    }

    fn element_text(element: ElementRef<'_>) -> String {
        element.text().collect::<String>().trim().to_string()
    }

    fn extract_poster(&self, html: &Html) -> FieldValue {
        match Self::select_first(html, &self.poster_selectors) {
            Some(img) => match img.value().attr("src") {
                Some(src) => FieldValue::Present(src.to_string()),
                None => FieldValue::Absent,
            },
            None => FieldValue::Absent,
        }
    }

    fn extract_genres(&self, html: &Html) -> FieldValue {
        let labels: Vec<String> = Self::select_all(html, &self.genre_selectors)
            .into_iter()
            .map(Self::element_text)
            .collect();

        if labels.is_empty() {
            FieldValue::Absent
        } else {
            FieldValue::Present(labels.join(", "))
        }
    }

    fn extract_top_cast(&self, html: &Html) -> FieldValue {
        let mut names: Vec<String> = Self::select_all(html, &self.cast_selectors)
            .into_iter()
            .map(Self::element_text)
            .collect();

        if names.is_empty() {
            return FieldValue::Absent;
        }
        names.truncate(TOP_CAST_LIMIT);
        FieldValue::Present(names.join(", "))
    }

    fn extract_directors(&self, html: &Html) -> FieldValue {
        let Some(credit_item) = Self::select_first(html, &self.principal_credit_selectors) else {
            return FieldValue::Absent;
        };

        let names: Vec<String> = credit_item
            .select(&self.credit_link_selector)
            .map(Self::element_text)
            .collect();

        if names.is_empty() {
            FieldValue::Absent
        } else {
            FieldValue::Present(names.join(", "))
        }
    }

    fn extract_votes(&self, html: &Html) -> FieldValue {
        match Self::select_first(html, &self.vote_count_selectors) {
            Some(element) => {
                let raw = Self::element_text(element);
                match parse_vote_count(&raw) {
                    Some(count) => FieldValue::Present(count),
                    None => {
                        warn!("Unparsable vote count text: '{}'", raw);
                        FieldValue::Failed
                    }
                }
            }
            None => FieldValue::Absent,
        }
    }
}

impl PageParser for TitleParser {
    type Output = TitleMetadata;

    fn parse(&self, html: &Html, title_id: &str) -> TitleMetadata {
        TitleMetadata {
            title_id: title_id.to_string(),
            genre: self.extract_genres(html),
            votes: self.extract_votes(html),
            top_cast: self.extract_top_cast(html),
            director: self.extract_directors(html),
            poster_url: self.extract_poster(html),
        }
    }
}

/// Normalize a vote-count display string to a plain integer string.
///
/// Thousands separators are stripped. A trailing `K` scales the numeric
/// prefix by 1,000 and a trailing `M` by 1,000,000, truncating to an
/// integer ("12.3K" -> "12300", "1.5M" -> "1500000"). Any other text
/// passes through separator-stripped. Returns `None` when a suffixed
/// prefix does not parse as a number.
pub fn parse_vote_count(raw: &str) -> Option<String> {
    let cleaned = raw.trim().replace(',', "");
    if let Some(prefix) = cleaned.strip_suffix('K') {
        scale_suffixed(prefix, 1_000.0)
    } else if let Some(prefix) = cleaned.strip_suffix('M') {
        scale_suffixed(prefix, 1_000_000.0)
    } else {
        Some(cleaned)
    }
}

fn scale_suffixed(prefix: &str, factor: f64) -> Option<String> {
    let value: f64 = prefix.trim().parse().ok()?;
    Some(((value * factor) as i64).to_string())
}
