//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants::{api, http};

/// Default API key (none)
pub const DEFAULT_API_KEY: &str = "";

/// Default region bias (none)
pub const DEFAULT_REGION: &str = "";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = http::DEFAULT_TIMEOUT_SECS;

/// Default geocoding endpoint
pub const DEFAULT_GEOCODE_URL: &str = api::GEOCODE_URL;

/// Default geolocation endpoint
pub const DEFAULT_GEOLOCATE_URL: &str = api::GEOLOCATE_URL;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "geolocate";
