use chrono::{DateTime, Utc};

/// Compact listing price: `$2.9M`, `$485K`, `$900`
pub fn format_price(price: i64) -> String {
    if price >= 1_000_000 {
        format!("${:.1}M", price as f64 / 1_000_000.0)
    } else if price >= 1_000 {
        format!("${:.0}K", price as f64 / 1_000.0)
    } else {
        format!("${price}")
    }
}

/// Square footage with a thousands separator, `N/A` when unrecorded
pub fn format_square_feet(square_feet: Option<u32>) -> String {
    match square_feet {
        Some(sqft) => {
            let digits = sqft.to_string();
            let mut out = String::with_capacity(digits.len() + digits.len() / 3);
            for (i, c) in digits.chars().enumerate() {
                if i > 0 && (digits.len() - i) % 3 == 0 {
                    out.push(',');
                }
                out.push(c);
            }
            out
        }
        None => "N/A".to_string(),
    }
}

/// One-line mailing address
pub fn format_address(address: &str, city: &str, state: &str) -> String {
    format!("{address}, {city}, {state}")
}

/// Bed/bath summary with pluralization: `3 beds, 1 bath`
pub fn format_beds_baths(bedrooms: u32, bathrooms: u32) -> String {
    let bed_word = if bedrooms == 1 { "bed" } else { "beds" };
    let bath_word = if bathrooms == 1 { "bath" } else { "baths" };
    format!("{bedrooms} {bed_word}, {bathrooms} {bath_word}")
}

/// Short listing date: `Mar 8, 2024`
pub fn format_listing_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}
