//! Batch crawl coordinator
//!
//! Drives one crawl invocation: selects the requested row window, fans
//! one extraction task per row out through a semaphore-bounded worker
//! pool, and applies results to the catalog as they complete. The catalog
//! is mutated only on the fan-in side, on the coordinating task, so row
//! updates are never concurrent.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::domain::catalog::{Catalog, CatalogError};
use crate::domain::services::MetadataExtractor;
use crate::domain::title::TitleMetadata;

/// Window parameters for one crawl invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchParams {
    /// Zero-based row offset where the window starts
    pub start_index: usize,
    /// Number of rows to process
    pub count: usize,
}

impl BatchParams {
    pub fn new(start_index: usize, count: usize) -> Self {
        Self { start_index, count }
    }
}

/// Summary of a completed crawl invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Rows selected by the clipped window
    pub windowed: usize,
    /// Results applied back onto catalog rows
    pub applied: usize,
    /// Rows whose extraction failed entirely (cells cleared)
    pub failed: usize,
}

/// Coordinates windowed batch extraction over a catalog.
pub struct BatchCoordinator<E> {
    extractor: Arc<E>,
    max_concurrent: usize,
}

impl<E> BatchCoordinator<E>
where
    E: MetadataExtractor + 'static,
{
    /// Create a coordinator with the given worker-pool width.
    pub fn new(extractor: Arc<E>, max_concurrent: usize) -> Self {
        Self {
            extractor,
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Run one crawl invocation over `catalog`.
    ///
    /// Ensures the metadata columns exist, validates the windowed
    /// identifiers, then fetches and applies. Rows outside the window are
    /// never touched; a fully failed row degrades to empty metadata cells
    /// without aborting the batch. Persistence is the caller's concern.
    pub async fn run(
        &self,
        catalog: &mut Catalog,
        params: &BatchParams,
    ) -> Result<BatchReport, CatalogError> {
        catalog.ensure_metadata_columns();

        let window = catalog.window(params.start_index, params.count);
        let mut report = BatchReport {
            windowed: window.len(),
            ..BatchReport::default()
        };

        if window.is_empty() {
            info!(
                "Window (start={}, count={}) selects no rows, nothing to crawl",
                params.start_index, params.count
            );
            return Ok(report);
        }

        // Duplicate identifiers would silently misassign results, so they
        // abort the run before any network activity.
        let lookup = catalog.identifier_lookup(window.clone())?;

        info!(
            "🚀 Crawling {} titles (rows {}..{}) with {} workers",
            window.len(),
            window.start,
            window.end,
            self.max_concurrent
        );

        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));
        let mut tasks: JoinSet<TitleMetadata> = JoinSet::new();

        for row in window {
            let title_id = catalog.identifier(row).to_string();
            let extractor = Arc::clone(&self.extractor);
            let semaphore = Arc::clone(&semaphore);

            tasks.spawn(async move {
                let Ok(_permit) = semaphore.acquire_owned().await else {
                    // The semaphore is never closed while tasks run; treat a
                    // closed pool like any other total failure for this row.
                    return TitleMetadata::failure(&title_id);
                };
                extractor.extract(&title_id).await
            });
        }

        // Fan-in: apply results in completion order. Each result updates a
        // disjoint row, so ordering does not matter.
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(metadata) => {
                    let Some(&row) = lookup.get(&metadata.title_id) else {
                        debug!(
                            "Dropping result for unknown identifier '{}'",
                            metadata.title_id
                        );
                        continue;
                    };
                    if metadata.is_total_failure() {
                        report.failed += 1;
                    }
                    catalog.apply(row, &metadata);
                    report.applied += 1;
                }
                Err(e) => {
                    // An extraction task never panics by contract; if one
                    // does, its row keeps whatever cells it had.
                    warn!("Extraction task aborted: {}", e);
                }
            }
        }

        info!(
            "✅ Batch complete: {} windowed, {} applied, {} failed",
            report.windowed, report.applied, report.failed
        );
        Ok(report)
    }
}
