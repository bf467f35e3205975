use crate::models::PropertyRecord;
use tracing::debug;

/// How many related listings a detail view shows by default
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Find listings similar to the given subject.
///
/// A listing is related when its price falls within ±30% of the subject's
/// price and it shares either the property type or the city. Results come
/// back in collection order, capped at `limit`; there is no closeness
/// ranking. An unknown subject id yields an empty vec — "no related
/// listings" is an ordinary state, not an error.
pub fn related(records: &[PropertyRecord], subject_id: i64, limit: usize) -> Vec<PropertyRecord> {
    let Some(subject) = records.iter().find(|r| r.id == subject_id) else {
        debug!(subject = subject_id, "related lookup for unknown listing");
        return Vec::new();
    };

    let band = subject.price as f64 * 0.3;

    records
        .iter()
        .filter(|r| {
            r.id != subject.id
                && ((r.price - subject.price).abs() as f64) <= band
                && (r.property_type == subject.property_type || r.city == subject.city)
        })
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(id: i64, price: i64, property_type: &str, city: &str) -> PropertyRecord {
        PropertyRecord {
            id,
            price,
            property_type: property_type.to_string(),
            bedrooms: 2,
            bathrooms: 1,
            square_feet: Some(1200),
            title: format!("Listing {id}"),
            address: format!("{id} Oak Ave"),
            city: city.to_string(),
            state: "CA".to_string(),
            description: String::new(),
            listing_date: Utc.with_ymd_and_hms(2024, 2, 10, 0, 0, 0).unwrap(),
            features: vec![],
            images: vec![],
        }
    }

    fn ids(records: &[PropertyRecord]) -> Vec<i64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_same_type_within_band() {
        let records = vec![
            record(1, 500_000, "house", "Fresno"),
            record(2, 520_000, "house", "Reno"),
            record(3, 900_000, "condo", "Fresno"),
        ];
        // band is 150_000; listing 3 is 400_000 away and drops out
        assert_eq!(ids(&related(&records, 1, 3)), vec![2]);
    }

    #[test]
    fn test_same_city_counts_even_with_different_type() {
        let records = vec![
            record(1, 500_000, "house", "Fresno"),
            record(2, 450_000, "condo", "Fresno"),
            record(3, 450_000, "condo", "Reno"),
        ];
        assert_eq!(ids(&related(&records, 1, 3)), vec![2]);
    }

    #[test]
    fn test_unknown_subject_returns_empty() {
        let records = vec![record(1, 500_000, "house", "Fresno")];
        assert!(related(&records, 404, 3).is_empty());
    }

    #[test]
    fn test_subject_is_never_its_own_match() {
        let records = vec![record(1, 500_000, "house", "Fresno")];
        assert!(related(&records, 1, 3).is_empty());
    }

    #[test]
    fn test_limit_keeps_first_matches_in_collection_order() {
        let records = vec![
            record(1, 500_000, "house", "Fresno"),
            record(2, 510_000, "house", "Reno"),
            record(3, 490_000, "house", "Davis"),
            record(4, 505_000, "house", "Chico"),
            record(5, 500_500, "house", "Lodi"),
        ];
        assert_eq!(ids(&related(&records, 1, DEFAULT_RELATED_LIMIT)), vec![2, 3, 4]);
    }

    #[test]
    fn test_band_edge_is_inclusive() {
        let records = vec![
            record(1, 500_000, "house", "Fresno"),
            record(2, 650_000, "house", "Reno"),
            record(3, 650_001, "house", "Reno"),
        ];
        assert_eq!(ids(&related(&records, 1, 3)), vec![2]);
    }
}
