//! Query-string construction for geocoding requests
//!
//! Field order and formatting are fixed: providers and tests depend on them.

use crate::coord::GeoPoint;

/// Form-encode a free-text address (spaces become `+`)
pub fn escape_address(address: &str) -> String {
    urlencoding::encode(address).replace("%20", "+")
}

/// Build a forward geocode query string
///
/// `address=<escaped>`, then `&region=<region>` when a non-empty region is
/// given, then `&key=<key>` (always present, possibly empty).
pub fn geocode_query(address: &str, region: Option<&str>, api_key: &str) -> String {
    let mut query = format!("address={}", escape_address(address));
    if let Some(region) = region.filter(|r| !r.is_empty()) {
        query.push_str("&region=");
        query.push_str(region);
    }
    query.push_str("&key=");
    query.push_str(api_key);
    query
}

/// Build a reverse geocode query string with six-decimal coordinates
pub fn reverse_geocode_query(point: &GeoPoint, api_key: &str) -> String {
    format!("latlng={:.6},{:.6}&key={}", point.lat, point.lng, api_key)
}

/// Build a geolocate query string (the key is the only parameter)
pub fn geolocate_query(api_key: &str) -> String {
    format!("key={}", api_key)
}

/// Replace the key value in a query string, for logging
pub(crate) fn redact_key(query: &str) -> String {
    match query.rfind("key=") {
        Some(idx) if idx == 0 || query[..idx].ends_with('&') => {
            format!("{}key=<redacted>", &query[..idx])
        }
        _ => query.to_string(),
    }
}
