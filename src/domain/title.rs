//! Title metadata extracted from a movie database title page.

use serde::{Deserialize, Serialize};

/// Column name of the stable external identifier in the catalog.
pub const ID_COLUMN: &str = "title_id";

/// Metadata columns written back into the catalog, in on-disk order.
pub const METADATA_COLUMNS: [&str; 5] = ["genre", "votes", "top_cast", "director", "poster_url"];

/// Outcome of extracting a single field from a title page.
///
/// The persisted catalog collapses `Absent` and `Failed` to an empty cell;
/// the distinction exists so logs and callers can tell "the page genuinely
/// has no such element" apart from "extraction broke".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Element found, text extracted.
    Present(String),
    /// Element missing where that is an expected page shape.
    Absent,
    /// A fetch or parse error prevented extraction.
    Failed,
}

impl FieldValue {
    /// Cell text as persisted in the catalog.
    pub fn as_cell(&self) -> &str {
        match self {
            Self::Present(text) => text,
            Self::Absent | Self::Failed => "",
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}

/// The five-field extraction result for one title, tagged with the
/// identifier used to look it up.
///
/// Ephemeral: produced by the extractor, consumed once by the coordinator
/// to update the matching catalog row, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleMetadata {
    pub title_id: String,
    pub genre: FieldValue,
    pub votes: FieldValue,
    pub top_cast: FieldValue,
    pub director: FieldValue,
    pub poster_url: FieldValue,
}

impl TitleMetadata {
    /// All-failed record for a title whose fetch or parse broke entirely.
    ///
    /// Carries the identifier so the coordinator can still locate and clear
    /// the matching row.
    pub fn failure(title_id: impl Into<String>) -> Self {
        Self {
            title_id: title_id.into(),
            genre: FieldValue::Failed,
            votes: FieldValue::Failed,
            top_cast: FieldValue::Failed,
            director: FieldValue::Failed,
            poster_url: FieldValue::Failed,
        }
    }

    /// Field values in `METADATA_COLUMNS` order.
    pub fn cells(&self) -> [&FieldValue; 5] {
        [
            &self.genre,
            &self.votes,
            &self.top_cast,
            &self.director,
            &self.poster_url,
        ]
    }

    /// True when no field extracted successfully.
    pub fn is_total_failure(&self) -> bool {
        self.cells().iter().all(|field| !field.is_present())
    }
}
