use crate::models::PropertyRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for all listing sources
/// This allows easy addition of new sources (feed imports, scrapers, etc)
/// without touching the catalog
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch the full ordered record set from the source
    async fn fetch(&self) -> Result<Vec<PropertyRecord>>;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}
