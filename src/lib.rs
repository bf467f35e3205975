pub mod browse;
pub mod catalog;
pub mod format;
pub mod geo;
pub mod models;
pub mod query;
pub mod saved;

pub use browse::{BrowseController, FilterField};
pub use catalog::{CatalogError, JsonFileSource, RecordSource, RecordStore};
pub use models::{PropertyRecord, SavedEntry, ViewMode};
pub use query::{related, search, FilterCriteria, DEFAULT_RELATED_LIMIT};
pub use saved::{JsonFileStore, KeyValueStore, MemoryStore, SavedProperties};
