//! CSV catalog storage
//!
//! Loads the whole catalog into memory at the start of a run and rewrites
//! it wholesale at the end. The rewrite goes through a temp file in the
//! destination directory followed by a rename, so a crash mid-write leaves
//! the previous file intact.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::domain::catalog::Catalog;

pub struct CsvCatalogStore;

impl CsvCatalogStore {
    /// Load the full catalog from a CSV file.
    ///
    /// Fatal on a missing or malformed file, or when the identifier column
    /// is absent; nothing has been fetched or written at that point.
    pub fn load(path: &Path) -> Result<Catalog> {
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("Failed to open catalog: {}", path.display()))?;

        let headers: Vec<String> = reader
            .headers()
            .with_context(|| format!("Failed to read catalog header: {}", path.display()))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record
                .with_context(|| format!("Malformed catalog row in {}", path.display()))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        let catalog = Catalog::new(headers, rows)?;
        info!("Loaded catalog: {} rows from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Persist the entire catalog, replacing the file's previous contents.
    pub fn save(path: &Path, catalog: &Catalog) -> Result<()> {
        let tmp_path = path.with_extension("csv.tmp");

        {
            let mut writer = csv::Writer::from_path(&tmp_path)
                .with_context(|| format!("Failed to create temp catalog: {}", tmp_path.display()))?;

            writer
                .write_record(catalog.headers())
                .context("Failed to write catalog header")?;
            for row in catalog.rows() {
                writer.write_record(row).context("Failed to write catalog row")?;
            }
            writer.flush().context("Failed to flush catalog")?;
        }

        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to move catalog into place: {} -> {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        info!("Saved catalog: {} rows to {}", catalog.len(), path.display());
        Ok(())
    }
}
