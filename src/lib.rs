//! geolocate: geocoding client and great-circle geometry
//!
//! A library for turning addresses into coordinates (and back) through the
//! Google Maps web services, and for spherical geometry on latitude/longitude
//! pairs.
//!
//! ## Features
//!
//! - Forward geocoding with optional region bias
//! - Reverse geocoding to a formatted address or structured [`Address`]
//! - IP-based geolocation
//! - Great-circle distance, initial bearing, destination point and midpoint
//! - Pluggable transport via the [`GeocodeProvider`] trait
//!
//! ## Quick Start
//!
//! ```rust
//! use geolocate::GeoPoint;
//!
//! let sea = GeoPoint::new(47.4489, -122.3094);
//! let sfo = GeoPoint::new(37.6160933, -122.3924223);
//!
//! let km = sea.great_circle_distance(&sfo);
//! assert!((km - 1093.38).abs() < 0.1);
//!
//! let halfway = sea.midpoint_to(&sfo);
//! println!("Halfway: {}", halfway);
//! ```
//!
//! Geocoding talks to the network:
//!
//! ```rust,no_run
//! use geolocate::GeocodeClient;
//!
//! let client = GeocodeClient::new("my-api-key")?.with_region("es");
//! let toledo = client.geocode("Toledo")?;
//! println!("{}", toledo);
//!
//! for result in client.reverse_geocode_detailed(&toledo)? {
//!     println!("{:?}", result.address());
//! }
//! # Ok::<(), geolocate::Error>(())
//! ```

pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod geo;
pub mod logging;

// Re-export commonly used types
pub use config::Config;
pub use coord::{GeoPoint, LocationType};
pub use error::{Error, Result};
pub use geo::{
    Address, AddressComponent, GeocodeClient, GeocodeProvider, GeocodeResult, HttpProvider,
    ProviderRequest, RequestKind,
};
