pub mod store;

pub use store::{JsonFileStore, KeyValueStore, MemoryStore};

use crate::catalog::RecordStore;
use crate::models::{PropertyRecord, SavedEntry};
use anyhow::{Context, Result};
use chrono::Utc;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, warn};

/// Storage key the saved collection lives under
pub const SAVED_PROPERTIES_KEY: &str = "savedProperties";

/// A user's saved-listing collection over an injected persistent store
///
/// The persisted value is the whole collection serialized as one JSON
/// array; every mutation rewrites it. An in-memory mirror under a mutex
/// serializes read-modify-write cycles so rapid toggles from concurrent
/// callers cannot lose updates, and the mirror is committed only after the
/// store write succeeds.
///
/// Record ids are normalized to strings here, so membership checks always
/// compare the representation that was persisted.
pub struct SavedProperties {
    store: Arc<dyn KeyValueStore>,
    entries: Mutex<Vec<SavedEntry>>,
}

impl SavedProperties {
    /// Open the collection, reading whatever the store already holds.
    ///
    /// A store read fault is surfaced to the caller rather than treated as
    /// an empty collection; swallowing it would drop the user's saved set
    /// on the next write.
    pub fn open(store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let entries = match store
            .get(SAVED_PROPERTIES_KEY)
            .context("reading saved properties")?
        {
            Some(raw) => {
                serde_json::from_str(&raw).context("parsing saved properties collection")?
            }
            None => Vec::new(),
        };
        debug!(count = entries.len(), "opened saved-properties collection");
        Ok(Self {
            store,
            entries: Mutex::new(entries),
        })
    }

    /// True iff the listing is currently saved
    pub fn is_saved(&self, id: i64) -> bool {
        let key = id.to_string();
        self.lock().iter().any(|e| e.property_id == key)
    }

    /// Save a listing; returns false when it was already saved
    pub fn save(&self, id: i64) -> Result<bool> {
        let mut entries = self.lock();
        self.insert_locked(&mut entries, id)
    }

    /// Remove a listing from the collection; absent ids are a no-op
    pub fn unsave(&self, id: i64) -> Result<()> {
        let mut entries = self.lock();
        self.remove_locked(&mut entries, id)?;
        Ok(())
    }

    /// Flip the saved state and return the new one
    pub fn toggle(&self, id: i64) -> Result<bool> {
        let mut entries = self.lock();
        let key = id.to_string();
        if entries.iter().any(|e| e.property_id == key) {
            self.remove_locked(&mut entries, id)?;
            Ok(false)
        } else {
            self.insert_locked(&mut entries, id)?;
            Ok(true)
        }
    }

    /// Snapshot of the collection in insertion order
    pub fn entries(&self) -> Vec<SavedEntry> {
        self.lock().clone()
    }

    /// Catalog records for the saved set, in catalog order
    pub fn saved_records(&self, catalog: &RecordStore) -> Vec<PropertyRecord> {
        let entries = self.lock();
        catalog
            .records()
            .iter()
            .filter(|record| {
                let key = record.id.to_string();
                entries.iter().any(|e| e.property_id == key)
            })
            .cloned()
            .collect()
    }

    fn insert_locked(&self, entries: &mut Vec<SavedEntry>, id: i64) -> Result<bool> {
        let key = id.to_string();
        if entries.iter().any(|e| e.property_id == key) {
            return Ok(false);
        }
        let mut next = entries.clone();
        next.push(SavedEntry {
            property_id: key,
            saved_date: Utc::now(),
        });
        self.persist(&next)?;
        *entries = next;
        Ok(true)
    }

    fn remove_locked(&self, entries: &mut Vec<SavedEntry>, id: i64) -> Result<()> {
        let key = id.to_string();
        if !entries.iter().any(|e| e.property_id == key) {
            return Ok(());
        }
        let next: Vec<SavedEntry> = entries
            .iter()
            .filter(|e| e.property_id != key)
            .cloned()
            .collect();
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn persist(&self, entries: &[SavedEntry]) -> Result<()> {
        let raw =
            serde_json::to_string_pretty(entries).context("serializing saved properties")?;
        self.store
            .set(SAVED_PROPERTIES_KEY, &raw)
            .context("writing saved properties")
    }

    fn lock(&self) -> MutexGuard<'_, Vec<SavedEntry>> {
        self.entries.lock().unwrap_or_else(|poisoned| {
            warn!("saved-properties lock poisoned, continuing with inner state");
            poisoned.into_inner()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock::mock_listings;

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            anyhow::bail!("backing store unavailable")
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            anyhow::bail!("backing store unavailable")
        }
    }

    fn open_memory() -> SavedProperties {
        SavedProperties::open(Arc::new(MemoryStore::new())).unwrap()
    }

    #[test]
    fn test_save_then_unsave() {
        let saved = open_memory();
        assert!(!saved.is_saved(3));

        assert!(saved.save(3).unwrap());
        assert!(saved.is_saved(3));
        // second save is a no-op
        assert!(!saved.save(3).unwrap());
        assert_eq!(saved.entries().len(), 1);

        saved.unsave(3).unwrap();
        assert!(!saved.is_saved(3));
        // unsaving an absent id stays quiet
        saved.unsave(3).unwrap();
    }

    #[test]
    fn test_toggle_twice() {
        let saved = open_memory();
        assert!(saved.toggle(5).unwrap());
        assert!(saved.is_saved(5));
        assert!(!saved.toggle(5).unwrap());
        assert!(!saved.is_saved(5));
    }

    #[test]
    fn test_collection_survives_reopen() {
        let store = Arc::new(MemoryStore::new());
        {
            let saved = SavedProperties::open(store.clone()).unwrap();
            saved.save(1).unwrap();
            saved.save(4).unwrap();
        }
        let reopened = SavedProperties::open(store).unwrap();
        assert!(reopened.is_saved(1));
        assert!(reopened.is_saved(4));
        assert!(!reopened.is_saved(2));
    }

    #[test]
    fn test_read_fault_propagates_instead_of_emptying() {
        assert!(SavedProperties::open(Arc::new(FailingStore)).is_err());
    }

    #[test]
    fn test_persisted_format_matches_upstream_shape() {
        let store = Arc::new(MemoryStore::new());
        let saved = SavedProperties::open(store.clone()).unwrap();
        saved.save(42).unwrap();

        let raw = store.get(SAVED_PROPERTIES_KEY).unwrap().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed[0]["propertyId"], "42");
        assert!(parsed[0]["savedDate"].is_string());
    }

    #[test]
    fn test_saved_records_come_back_in_catalog_order() {
        let catalog = RecordStore::from_records(mock_listings());
        let saved = open_memory();
        saved.save(5).unwrap();
        saved.save(2).unwrap();

        let ids: Vec<i64> = saved.saved_records(&catalog).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 5]);
    }
}
