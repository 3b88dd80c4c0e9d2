//! Application layer - use cases and orchestration
//!
//! Coordinates the domain services into the batch-crawl use case.

pub mod batch_coordinator;

pub use batch_coordinator::{BatchCoordinator, BatchParams, BatchReport};
