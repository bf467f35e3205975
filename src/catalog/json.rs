use crate::catalog::traits::RecordSource;
use crate::models::PropertyRecord;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// Listing source backed by a JSON dataset file
///
/// The file holds one array of records in the upstream field naming
/// (`Id`, `squareFeet`, `listingDate`, ...).
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordSource for JsonFileSource {
    async fn fetch(&self) -> Result<Vec<PropertyRecord>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("reading dataset {}", self.path.display()))?;

        debug!(bytes = raw.len(), path = %self.path.display(), "read dataset file");

        serde_json::from_str(&raw)
            .with_context(|| format!("parsing dataset {}", self.path.display()))
    }

    fn source_name(&self) -> &'static str {
        "json-file"
    }
}
