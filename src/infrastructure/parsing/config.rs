//! Parsing configuration for HTML extraction
//!
//! Centralized configuration for the CSS selectors used on title pages.
//! Each field carries a primary selector matching the live site plus
//! best-effort fallbacks; selectors are tried in order and the first one
//! that matches anything wins.

use serde::{Deserialize, Serialize};

/// CSS selectors for title pages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleSelectors {
    /// Hero poster image element
    pub poster: Vec<String>,

    /// Genre chip labels below the poster/trailer
    pub genre: Vec<String>,

    /// Actor links in the top-cast section, in document order
    pub cast: Vec<String>,

    /// Principal-credit list items; the first holds the director links
    pub principal_credit: Vec<String>,

    /// Vote-count element below the rating
    pub vote_count: Vec<String>,
}

impl Default for TitleSelectors {
    fn default() -> Self {
        Self {
            poster: vec![
                r#"div[data-testid="hero-media__poster"] img"#.to_string(),
                ".ipc-poster img".to_string(),
            ],
            genre: vec![
                "div.ipc-chip-list--baseAlt span.ipc-chip__text".to_string(),
                ".ipc-chip-list span.ipc-chip__text".to_string(),
            ],
            cast: vec![
                r#"a[data-testid="title-cast-item__actor"]"#.to_string(),
                ".title-cast-item__actor".to_string(),
            ],
            principal_credit: vec![
                r#"li[data-testid="title-pc-principal-credit"]"#.to_string(),
                ".ipc-metadata-list-item--principal-credit".to_string(),
            ],
            vote_count: vec![
                r#"span[data-testid="rating-histogram-vote-count"]"#.to_string(),
                r#"div[data-testid="hero-rating-bar__aggregate-rating"] .ipc-rating-star--voteCount"#
                    .to_string(),
            ],
        }
    }
}
