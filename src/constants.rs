//! Centralized constants for the geolocate crate

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in kilometers
    pub const EARTH_RADIUS_KM: f64 = 6371.0;
}

/// External API endpoints
pub mod api {
    /// Google Geocoding API (forward and reverse lookups)
    pub const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

    /// Google Geolocation API (IP-based location, requires a key)
    pub const GEOLOCATE_URL: &str = "https://www.googleapis.com/geolocation/v1/geolocate";
}

/// HTTP transport settings
pub mod http {
    /// Request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
}
