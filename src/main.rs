use estate_scout::catalog::mock::MockSource;
use estate_scout::format::{format_address, format_beds_baths, format_price, format_square_feet};
use estate_scout::{
    BrowseController, FilterCriteria, JsonFileSource, JsonFileStore, RecordStore, SavedProperties,
    DEFAULT_RELATED_LIMIT,
};
use estate_scout::{geo, query};
use std::sync::Arc;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 Estate Scout - Property Browser");
    info!("===================================");
    info!("");

    // Load the catalog: dataset file if given, built-in listings otherwise
    let store = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading listings from {path}...");
            Arc::new(RecordStore::load(&JsonFileSource::new(path)).await?)
        }
        None => Arc::new(RecordStore::load(&MockSource).await?),
    };

    let mut browse = BrowseController::new(store.clone());
    browse.subscribe(|results| {
        info!("🔎 {} matching listings", results.len());
    });

    // Sample browse session: everything under $600K with 3+ bedrooms
    browse.set_filters(FilterCriteria {
        price_max: Some(600_000),
        bedrooms_min: Some(3),
        ..Default::default()
    });

    info!("");
    for (i, listing) in browse.results().iter().enumerate() {
        println!("{}. {} ({})", i + 1, listing.title, format_price(listing.price));
        println!(
            "   {}",
            format_address(&listing.address, &listing.city, &listing.state)
        );
        println!(
            "   {}, {} sqft",
            format_beds_baths(listing.bedrooms, listing.bathrooms),
            format_square_feet(listing.square_feet)
        );
        let (lat, lng) = geo::city_coordinates(&listing.city);
        println!("   Map pin: {lat:.4}, {lng:.4}");
        println!();
    }

    // Related listings for the first match
    if let Some(subject) = browse.results().first() {
        let related = query::related(store.records(), subject.id, DEFAULT_RELATED_LIMIT);
        info!(
            "Related to \"{}\": {}",
            subject.title,
            related
                .iter()
                .map(|r| r.title.as_str())
                .collect::<Vec<_>>()
                .join(" | ")
        );
    }

    // Share link for the current search
    browse.set_search_term("fresno");
    if let Some(query_string) = browse.search_query_string() {
        info!("Shareable search: /browse?{query_string}");
    }

    // Saved collection persisted next to the binary
    let saved = SavedProperties::open(Arc::new(JsonFileStore::new("saved_data")))?;
    if let Some(first) = browse.results().first() {
        let now_saved = saved.toggle(first.id)?;
        info!(
            "{} \"{}\" ({} saved total)",
            if now_saved { "💾 Saved" } else { "Unsaved" },
            first.title,
            saved.entries().len()
        );
    }

    Ok(())
}
