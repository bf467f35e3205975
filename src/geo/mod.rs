/// Fallback map center for cities outside the known table (geographic
/// center of California)
pub const FALLBACK_CENTER: (f64, f64) = (37.1661, -119.4494);

/// Map coordinates for a city, for display only.
///
/// Known cities come from a fixed table. Anything else lands on a
/// deterministic offset around [`FALLBACK_CENTER`] derived from the city
/// name, so the same city always pins to the same spot and distinct cities
/// rarely stack. Not part of the filter contract.
pub fn city_coordinates(city: &str) -> (f64, f64) {
    match city {
        "Los Angeles" => (34.0522, -118.2437),
        "San Francisco" => (37.7749, -122.4194),
        "San Diego" => (32.7157, -117.1611),
        "Sacramento" => (38.5816, -121.4944),
        "Fresno" => (36.7378, -119.7871),
        "Malibu" => (34.0259, -118.7798),
        "Oakland" => (37.8044, -122.2712),
        "San Jose" => (37.3382, -121.8863),
        _ => jitter(city),
    }
}

fn jitter(city: &str) -> (f64, f64) {
    let sum: u32 = city.bytes().map(u32::from).sum();
    let lat_offset = f64::from(sum % 100) / 100.0 - 0.5;
    let lng_offset = f64::from((sum / 100) % 100) / 100.0 - 0.5;
    (FALLBACK_CENTER.0 + lat_offset, FALLBACK_CENTER.1 + lng_offset)
}
