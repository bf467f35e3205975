use estate_scout::{
    BrowseController, FilterCriteria, JsonFileSource, JsonFileStore, RecordStore, SavedProperties,
};
use std::sync::Arc;

const DATASET: &str = r#"[
    {
        "Id": 1,
        "price": 500000,
        "type": "house",
        "bedrooms": 3,
        "bathrooms": 2,
        "squareFeet": 1700,
        "title": "Bungalow with Citrus Trees",
        "address": "812 E Olive Ave",
        "city": "Fresno",
        "state": "CA",
        "description": "Corner lot with mature orange trees.",
        "listingDate": "2024-02-01T00:00:00Z",
        "features": ["Corner lot"],
        "images": []
    },
    {
        "Id": 2,
        "price": 520000,
        "type": "house",
        "bedrooms": 4,
        "bathrooms": 2,
        "squareFeet": 2000,
        "title": "Ranch House off McCarthy Ranch",
        "address": "45 Sierra Ct",
        "city": "Reno",
        "state": "NV",
        "description": "Single story with a workshop out back.",
        "listingDate": "2024-02-12T00:00:00Z",
        "features": ["Workshop"],
        "images": []
    },
    {
        "Id": 3,
        "price": 900000,
        "type": "condo",
        "bedrooms": 2,
        "bathrooms": 2,
        "squareFeet": 1200,
        "title": "Downtown Highrise Residence",
        "address": "2331 Fresno St #1801",
        "city": "Fresno",
        "state": "CA",
        "description": "Eighteenth-floor corner unit with valley views.",
        "listingDate": "2024-03-03T00:00:00Z",
        "features": ["Concierge"],
        "images": []
    }
]"#;

async fn load_catalog(dir: &tempfile::TempDir) -> Arc<RecordStore> {
    let path = dir.path().join("listings.json");
    tokio::fs::write(&path, DATASET).await.unwrap();
    Arc::new(RecordStore::load(&JsonFileSource::new(path)).await.unwrap())
}

#[tokio::test]
async fn browse_filter_relate_and_save() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = load_catalog(&dir).await;

    // Filter: the price floor keeps only the condo
    let mut browse = BrowseController::new(catalog.clone());
    browse.set_filters(FilterCriteria {
        price_min: Some(600_000),
        ..Default::default()
    });
    let ids: Vec<i64> = browse.results().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3]);

    // Relate: listing 2 sits inside listing 1's ±30% band and shares the
    // type; listing 3 is 400k away and drops out
    let related = estate_scout::related(catalog.records(), 1, 3);
    assert_eq!(related.len(), 1);
    assert_eq!(related[0].id, 2);

    // Search composes with the active criteria
    browse.clear_all_filters();
    browse.set_search_term("fresno");
    let ids: Vec<i64> = browse.results().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);

    // Saved set persists across reopen through the same backing directory
    let saved = SavedProperties::open(Arc::new(JsonFileStore::new(dir.path()))).unwrap();
    assert!(saved.toggle(3).unwrap());
    assert!(saved.is_saved(3));

    let reopened = SavedProperties::open(Arc::new(JsonFileStore::new(dir.path()))).unwrap();
    assert!(reopened.is_saved(3));
    let records = reopened.saved_records(&catalog);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 3);

    assert!(!reopened.toggle(3).unwrap());
    assert!(!reopened.is_saved(3));
}

#[tokio::test]
async fn direct_lookup_fails_where_related_degrades() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = load_catalog(&dir).await;

    assert!(catalog.get(1).is_ok());
    assert!(catalog.get(99).is_err());
    assert!(estate_scout::related(catalog.records(), 99, 3).is_empty());
}
