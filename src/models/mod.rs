use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a browse session presents its result set
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
    Map,
}

/// Core property listing model
///
/// Field names mirror the upstream dataset JSON (`Id`, `squareFeet`, ...).
/// The `property_type` vocabulary is open-ended; unknown values pass
/// through the filter engine untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    #[serde(rename = "Id")]
    pub id: i64,
    pub price: i64,
    #[serde(rename = "type")]
    pub property_type: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    #[serde(default)]
    pub square_feet: Option<u32>,
    pub title: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub description: String,
    pub listing_date: DateTime<Utc>,
    pub features: Vec<String>,
    pub images: Vec<String>,
}

/// Marker associating a saved listing with the moment it was saved
///
/// Property ids are stored as strings; the saved-set manager normalizes
/// numeric record ids at its boundary so the save and lookup paths always
/// compare the same representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SavedEntry {
    pub property_id: String,
    pub saved_date: DateTime<Utc>,
}
