//! Domain services
//!
//! Service traits for metadata collection, kept separate from their
//! infrastructure implementations so the batch coordinator can be driven
//! by stubs in tests.

use async_trait::async_trait;

use crate::domain::title::TitleMetadata;

/// Collects the metadata record for one title identifier.
///
/// Implementations never return an error: any network, parsing, or
/// missing-element condition is converted into a record whose fields
/// report failure, tagged with the identifier so the caller can still
/// locate the matching catalog row. Calls are independent and safe to
/// run concurrently.
#[async_trait]
pub trait MetadataExtractor: Send + Sync {
    async fn extract(&self, title_id: &str) -> TitleMetadata;
}
