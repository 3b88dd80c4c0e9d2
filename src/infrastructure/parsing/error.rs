//! Parsing error types
//!
//! Parser construction is the only fallible parsing step: selector
//! strings come from configuration and may be malformed. Field-level
//! extraction failures never surface here; they degrade to empty fields
//! inside the parsed record.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ParsingError {
    #[error("Invalid CSS selector: {selector} - {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("No usable selectors for field '{field}' (attempted: {attempted:?})")]
    NoUsableSelectors {
        field: String,
        attempted: Vec<String>,
    },
}

impl ParsingError {
    pub fn invalid_selector(selector: &str, reason: impl ToString) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn no_usable_selectors(field: &str, attempted: &[String]) -> Self {
        Self::NoUsableSelectors {
            field: field.to_string(),
            attempted: attempted.to_vec(),
        }
    }
}

pub type ParsingResult<T> = Result<T, ParsingError>;
