//! Geographic points
//!
//! This module handles:
//! - The `GeoPoint` value type shared by the geocoding client and geodesy
//! - Provider location precision tags
//! - Great-circle geometry (see [`geodesy`])

pub mod geodesy;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A point on the Earth's surface in degrees
///
/// Coordinates are always degrees at this boundary. Points produced by the
/// geocoding client carry the provider's formatted address and precision tag;
/// points produced by geodesy operations carry neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_type: Option<LocationType>,
}

impl GeoPoint {
    /// Create a bare point from latitude and longitude
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            address: None,
            location_type: None,
        }
    }

    /// Attach a formatted address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Attach a location precision tag
    pub fn with_location_type(mut self, location_type: LocationType) -> Self {
        self.location_type = Some(location_type);
        self
    }

    /// Validate that coordinates are finite and within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> Result<()> {
        if !self.lat.is_finite() || self.lat < -90.0 || self.lat > 90.0 {
            return Err(Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if !self.lng.is_finite() || self.lng < -180.0 || self.lng > 180.0 {
            return Err(Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }

    /// Great-circle distance to `other` in kilometers
    pub fn great_circle_distance(&self, other: &GeoPoint) -> f64 {
        geodesy::great_circle_distance(self, other)
    }

    /// Initial bearing towards `other` in degrees, signed in (-180, 180]
    pub fn bearing_to(&self, other: &GeoPoint) -> f64 {
        geodesy::bearing_to(self, other)
    }

    /// Destination reached by travelling `distance_km` along `bearing_deg`
    pub fn point_at_distance_and_bearing(&self, distance_km: f64, bearing_deg: f64) -> GeoPoint {
        geodesy::point_at_distance_and_bearing(self, distance_km, bearing_deg)
    }

    /// Great-circle midpoint between this point and `other`
    pub fn midpoint_to(&self, other: &GeoPoint) -> GeoPoint {
        geodesy::midpoint_to(self, other)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.address {
            Some(address) => write!(f, "{} ({},{})", address, self.lat, self.lng),
            None => write!(f, "{},{}", self.lat, self.lng),
        }
    }
}

/// Location precision tag reported by the geocoding provider
///
/// Tags the provider introduces later deserialize as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationType {
    /// Precise street address match
    Rooftop,
    /// Interpolated between two precise points, usually on a road
    RangeInterpolated,
    /// Geometric center of a polyline or polygon
    GeometricCenter,
    /// Approximate location
    Approximate,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for LocationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rooftop => write!(f, "ROOFTOP"),
            Self::RangeInterpolated => write!(f, "RANGE_INTERPOLATED"),
            Self::GeometricCenter => write!(f, "GEOMETRIC_CENTER"),
            Self::Approximate => write!(f, "APPROXIMATE"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

impl std::str::FromStr for LocationType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ROOFTOP" => Ok(Self::Rooftop),
            "RANGE_INTERPOLATED" => Ok(Self::RangeInterpolated),
            "GEOMETRIC_CENTER" => Ok(Self::GeometricCenter),
            "APPROXIMATE" => Ok(Self::Approximate),
            _ => Err(format!("Unknown location type: {}", s)),
        }
    }
}
