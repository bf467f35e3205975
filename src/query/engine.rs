use crate::models::PropertyRecord;
use crate::query::criteria::{set_bound, FilterCriteria};
use tracing::debug;

/// Filter a record collection by criteria and a free-text search term.
///
/// Stable filter: the output preserves the input order and the input is
/// left untouched. All predicates are ANDed; the search term alone is an
/// OR across title, address, city, state and description. No result cap.
///
/// Records without a recorded square footage evaluate as zero square feet,
/// so they fail any set minimum and pass any set maximum.
pub fn search(
    records: &[PropertyRecord],
    criteria: &FilterCriteria,
    search_term: &str,
) -> Vec<PropertyRecord> {
    let needle = search_term.trim().to_lowercase();

    let matches: Vec<PropertyRecord> = records
        .iter()
        .filter(|record| matches_search(record, &needle) && matches_criteria(record, criteria))
        .cloned()
        .collect();

    debug!(
        total = records.len(),
        matched = matches.len(),
        term = %needle,
        "catalog query"
    );

    matches
}

fn matches_search(record: &PropertyRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        &record.title,
        &record.address,
        &record.city,
        &record.state,
        &record.description,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

fn matches_criteria(record: &PropertyRecord, criteria: &FilterCriteria) -> bool {
    if let Some(min) = set_bound(criteria.price_min) {
        if record.price < min {
            return false;
        }
    }
    if let Some(max) = set_bound(criteria.price_max) {
        if record.price > max {
            return false;
        }
    }
    if !criteria.property_types.is_empty()
        && !criteria.property_types.contains(&record.property_type)
    {
        return false;
    }
    if let Some(min) = set_bound(criteria.bedrooms_min) {
        if record.bedrooms < min {
            return false;
        }
    }
    if let Some(min) = set_bound(criteria.bathrooms_min) {
        if record.bathrooms < min {
            return false;
        }
    }
    let square_feet = record.square_feet.unwrap_or(0);
    if let Some(min) = set_bound(criteria.square_feet_min) {
        if square_feet < min {
            return false;
        }
    }
    if let Some(max) = set_bound(criteria.square_feet_max) {
        if square_feet > max {
            return false;
        }
    }
    true
}
