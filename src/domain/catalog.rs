//! In-memory catalog table keyed by title identifier.
//!
//! The catalog is a header row plus string cells, loaded once per run,
//! mutated in place only for rows inside the requested window, and
//! persisted once at the end. Columns outside the metadata set pass
//! through untouched.

use std::collections::HashMap;
use std::ops::Range;

use thiserror::Error;

use crate::domain::title::{ID_COLUMN, METADATA_COLUMNS, TitleMetadata};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog is missing the required '{column}' column")]
    MissingIdColumn { column: String },

    #[error(
        "duplicate identifier '{title_id}' at rows {first_row} and {second_row} in the requested window"
    )]
    DuplicateIdentifier {
        title_id: String,
        first_row: usize,
        second_row: usize,
    },
}

/// Tabular dataset with one row per catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    id_column: usize,
}

impl Catalog {
    /// Build a catalog from a header row and data rows.
    ///
    /// Rows shorter than the header are padded with empty cells so that
    /// every cell position named by a header exists.
    pub fn new(headers: Vec<String>, mut rows: Vec<Vec<String>>) -> Result<Self, CatalogError> {
        let id_column = headers
            .iter()
            .position(|name| name == ID_COLUMN)
            .ok_or_else(|| CatalogError::MissingIdColumn {
                column: ID_COLUMN.to_string(),
            })?;

        for row in &mut rows {
            if row.len() < headers.len() {
                row.resize(headers.len(), String::new());
            }
        }

        Ok(Self {
            headers,
            rows,
            id_column,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Identifier of the given row.
    pub fn identifier(&self, row: usize) -> &str {
        &self.rows[row][self.id_column]
    }

    /// Cell text by row position and column name.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.column_index(column)?;
        self.rows.get(row).map(|cells| cells[index].as_str())
    }

    fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|name| name == column)
    }

    /// Add any missing metadata columns with empty cells.
    ///
    /// Idempotent; never disturbs existing values. New columns are appended
    /// after all pre-existing ones, in `METADATA_COLUMNS` order.
    pub fn ensure_metadata_columns(&mut self) {
        for column in METADATA_COLUMNS {
            if self.column_index(column).is_none() {
                self.headers.push(column.to_string());
                for row in &mut self.rows {
                    row.push(String::new());
                }
            }
        }
    }

    /// Contiguous row window `[start, start + count)`, clipped to the
    /// table's actual length. A window starting past the end is empty.
    pub fn window(&self, start: usize, count: usize) -> Range<usize> {
        let start = start.min(self.rows.len());
        let end = start.saturating_add(count).min(self.rows.len());
        start..end
    }

    /// Identifier-to-row-position lookup over the windowed rows.
    ///
    /// A duplicate identifier inside the window is an input-validation
    /// error: results are correlated back to rows by identifier, so a
    /// repeat would silently misassign them.
    pub fn identifier_lookup(
        &self,
        window: Range<usize>,
    ) -> Result<HashMap<String, usize>, CatalogError> {
        let mut lookup = HashMap::with_capacity(window.len());
        for row in window {
            let title_id = self.identifier(row).to_string();
            if let Some(first_row) = lookup.insert(title_id.clone(), row) {
                return Err(CatalogError::DuplicateIdentifier {
                    title_id,
                    first_row,
                    second_row: row,
                });
            }
        }
        Ok(lookup)
    }

    /// Overwrite the metadata cells of one row with an extraction result.
    ///
    /// The identifier cell is never touched. Metadata columns must already
    /// exist (see [`Self::ensure_metadata_columns`]); any still missing are
    /// skipped.
    pub fn apply(&mut self, row: usize, metadata: &TitleMetadata) {
        for (column, value) in METADATA_COLUMNS.into_iter().zip(metadata.cells()) {
            if let Some(index) = self.column_index(column) {
                self.rows[row][index] = value.as_cell().to_string();
            }
        }
    }
}
