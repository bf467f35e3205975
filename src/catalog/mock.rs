use crate::catalog::traits::RecordSource;
use crate::models::PropertyRecord;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tracing::info;

/// Built-in listing source used when no dataset file is supplied
pub struct MockSource;

#[async_trait]
impl RecordSource for MockSource {
    async fn fetch(&self) -> Result<Vec<PropertyRecord>> {
        Ok(mock_listings())
    }

    fn source_name(&self) -> &'static str {
        "mock"
    }
}

fn listed(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid listing date")
}

/// Get mock California listings for demos and tests
pub fn mock_listings() -> Vec<PropertyRecord> {
    info!("📋 Generating mock listings based on typical California inventory");

    vec![
        PropertyRecord {
            id: 1,
            price: 2_850_000,
            property_type: "house".to_string(),
            bedrooms: 4,
            bathrooms: 3,
            square_feet: Some(3200),
            title: "Ocean View Retreat on Point Dume".to_string(),
            address: "29210 Cliffside Dr".to_string(),
            city: "Malibu".to_string(),
            state: "CA".to_string(),
            description: "Single-level home above Westward Beach with panoramic ocean views, \
                          a chef's kitchen and a saltwater pool."
                .to_string(),
            listing_date: listed(2024, 2, 14),
            features: vec![
                "Ocean view".to_string(),
                "Pool".to_string(),
                "Fireplace".to_string(),
            ],
            images: vec!["https://images.example.com/listings/1/main.jpg".to_string()],
        },
        PropertyRecord {
            id: 2,
            price: 485_000,
            property_type: "house".to_string(),
            bedrooms: 3,
            bathrooms: 2,
            square_feet: Some(1850),
            title: "Restored Craftsman near Tower District".to_string(),
            address: "1214 N Van Ness Ave".to_string(),
            city: "Fresno".to_string(),
            state: "CA".to_string(),
            description: "Original built-ins, wrap-around porch and a detached studio over the \
                          garage."
                .to_string(),
            listing_date: listed(2024, 3, 8),
            features: vec!["Hardwood floors".to_string(), "Detached studio".to_string()],
            images: vec!["https://images.example.com/listings/2/main.jpg".to_string()],
        },
        PropertyRecord {
            id: 3,
            price: 310_000,
            property_type: "condo".to_string(),
            bedrooms: 2,
            bathrooms: 2,
            square_feet: Some(1100),
            title: "Top-Floor Condo with Sierra Views".to_string(),
            address: "7850 N First St #304".to_string(),
            city: "Fresno".to_string(),
            state: "CA".to_string(),
            description: "Corner unit with vaulted ceilings, in-unit laundry and two parking \
                          spaces."
                .to_string(),
            listing_date: listed(2024, 1, 29),
            features: vec!["Balcony".to_string(), "Elevator".to_string()],
            images: vec![],
        },
        PropertyRecord {
            id: 4,
            price: 1_250_000,
            property_type: "condo".to_string(),
            bedrooms: 2,
            bathrooms: 2,
            square_feet: Some(1050),
            title: "South Beach Loft Steps from the Ballpark".to_string(),
            address: "188 King St #502".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            description: "Floor-to-ceiling windows over the bay, doorman building with gym and \
                          roof deck."
                .to_string(),
            listing_date: listed(2024, 2, 2),
            features: vec!["Doorman".to_string(), "Roof deck".to_string()],
            images: vec!["https://images.example.com/listings/4/main.jpg".to_string()],
        },
        PropertyRecord {
            id: 5,
            price: 520_000,
            property_type: "townhouse".to_string(),
            bedrooms: 3,
            bathrooms: 2,
            square_feet: Some(1600),
            title: "Corner Townhouse in Midtown".to_string(),
            address: "2110 P St".to_string(),
            city: "Sacramento".to_string(),
            state: "CA".to_string(),
            description: "Two-story end unit with a private patio, walkable to the R Street \
                          corridor."
                .to_string(),
            listing_date: listed(2024, 3, 21),
            features: vec!["Private patio".to_string(), "Attached garage".to_string()],
            images: vec![],
        },
        PropertyRecord {
            id: 6,
            price: 690_000,
            property_type: "apartment".to_string(),
            bedrooms: 1,
            bathrooms: 1,
            square_feet: Some(720),
            title: "Little Italy Pied-à-Terre".to_string(),
            address: "1601 Kettner Blvd #28".to_string(),
            city: "San Diego".to_string(),
            state: "CA".to_string(),
            description: "Quiet courtyard unit a block from the harbor, recently renovated \
                          kitchen and bath."
                .to_string(),
            listing_date: listed(2024, 2, 26),
            features: vec!["Courtyard".to_string()],
            images: vec!["https://images.example.com/listings/6/main.jpg".to_string()],
        },
        PropertyRecord {
            id: 7,
            price: 515_000,
            property_type: "house".to_string(),
            bedrooms: 4,
            bathrooms: 2,
            square_feet: Some(2100),
            title: "Family Home near Woodward Park".to_string(),
            address: "9455 N Archie Ave".to_string(),
            city: "Fresno".to_string(),
            state: "CA".to_string(),
            description: "Cul-de-sac lot with mature shade trees, owned solar and a three-car \
                          garage."
                .to_string(),
            listing_date: listed(2024, 3, 2),
            features: vec!["Solar".to_string(), "Three-car garage".to_string()],
            images: vec![],
        },
        PropertyRecord {
            id: 8,
            price: 1_100_000,
            property_type: "land".to_string(),
            bedrooms: 0,
            bathrooms: 0,
            square_feet: None,
            title: "Two Acres above Zuma Beach".to_string(),
            address: "0 Busch Dr".to_string(),
            city: "Malibu".to_string(),
            state: "CA".to_string(),
            description: "Gently sloped parcel with approved plans and utilities at the street."
                .to_string(),
            listing_date: listed(2024, 1, 12),
            features: vec!["Approved plans".to_string()],
            images: vec![],
        },
    ]
}
