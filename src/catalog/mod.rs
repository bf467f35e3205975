pub mod json;
pub mod mock;
pub mod traits;

pub use json::JsonFileSource;
pub use traits::RecordSource;

use crate::models::PropertyRecord;
use anyhow::Result;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("property {0} not found")]
    NotFound(i64),
}

/// In-memory listing catalog
///
/// Loaded once from a [`RecordSource`] and read-only for the rest of the
/// process. Collection order is the source order and every query preserves
/// it.
pub struct RecordStore {
    records: Vec<PropertyRecord>,
}

impl RecordStore {
    /// Fetch all records from the source and seal them into a store
    pub async fn load(source: &dyn RecordSource) -> Result<Self> {
        let records = source.fetch().await?;
        info!(
            source = source.source_name(),
            count = records.len(),
            "loaded listing catalog"
        );
        Ok(Self { records })
    }

    /// Build a store directly from records already in hand
    pub fn from_records(records: Vec<PropertyRecord>) -> Self {
        Self { records }
    }

    /// All listings, in collection order
    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fetch one listing by id.
    ///
    /// Unlike the relatedness matcher, a direct lookup for an absent id is
    /// an error the caller has to handle.
    pub fn get(&self, id: i64) -> Result<&PropertyRecord, CatalogError> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or(CatalogError::NotFound(id))
    }
}
