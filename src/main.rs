//! movie-crawler binary
//!
//! Crawls a window of catalog rows and writes the enriched catalog back
//! in place. The window is supplied on the command line rather than
//! interactively so the run can be driven by scripts and tests.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use movie_crawler::{
    AppConfig, BatchCoordinator, BatchParams, ConfigManager, CsvCatalogStore, PageExtractor,
    init_logging,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the CSV catalog to enrich in place
    #[arg(long, value_name = "FILE")]
    catalog: PathBuf,

    /// Zero-based row offset where the window starts
    #[arg(long)]
    start_index: usize,

    /// Number of rows to process in this invocation
    #[arg(long)]
    count: usize,

    /// Override the configured worker-pool width
    #[arg(long)]
    concurrency: Option<usize>,

    /// Optional JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ConfigManager::new(path).load_config().await?,
        None => AppConfig::default(),
    };
    let max_concurrent = cli
        .concurrency
        .unwrap_or(config.crawler.max_concurrent_requests);

    // Load before any network activity; a bad catalog aborts untouched.
    let mut catalog = CsvCatalogStore::load(&cli.catalog)?;

    let extractor = Arc::new(PageExtractor::from_config(&config)?);
    let coordinator = BatchCoordinator::new(extractor, max_concurrent);
    let params = BatchParams::new(cli.start_index, cli.count);

    let report = coordinator.run(&mut catalog, &params).await?;

    // The whole table is rewritten, windowed or not, so untouched rows and
    // pre-existing columns survive verbatim.
    CsvCatalogStore::save(&cli.catalog, &catalog)?;

    info!(
        "Done: {} rows windowed, {} updated, {} failed",
        report.windowed, report.applied, report.failed
    );
    Ok(())
}
