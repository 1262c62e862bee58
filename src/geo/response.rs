//! Provider response shapes and parsing
//!
//! Everything here is pure: raw body bytes in, domain values out. Transport
//! concerns (status codes, timeouts) are handled before these functions run.

use crate::coord::{GeoPoint, LocationType};
use crate::error::{Error, Result};
use crate::geo::address::{Address, AddressComponent};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Geocoding API response (forward and reverse)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeResponse {
    pub results: Vec<GeocodeResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// A single geocoding match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub formatted_address: String,
    pub geometry: Geometry,
    /// Only populated on reverse lookups
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_type: Option<LocationType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl GeocodeResult {
    /// Convert to a point carrying the formatted address and precision tag
    pub fn to_point(&self) -> GeoPoint {
        let point = GeoPoint::new(self.geometry.location.lat, self.geometry.location.lng)
            .with_address(self.formatted_address.clone());
        match self.geometry.location_type {
            Some(location_type) => point.with_location_type(location_type),
            None => point,
        }
    }

    /// Normalize this result's address components
    pub fn address(&self) -> Address {
        Address::from_components(&self.address_components)
    }
}

/// Geolocation API response
///
/// `error.code == 0` (or no `error` object at all) means success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeolocateResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LatLng>,
    /// Accuracy radius in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<GeolocateError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeolocateError {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub errors: Vec<GeolocateErrorDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeolocateErrorDetail {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub message: String,
}

impl GeolocateError {
    fn into_error(self) -> Error {
        let code = self.code;
        match self.errors.into_iter().next() {
            Some(detail) => Error::Provider {
                code,
                domain: detail.domain,
                reason: detail.reason,
                message: detail.message,
            },
            None => Error::Provider {
                code,
                domain: "global".to_string(),
                reason: self.status.unwrap_or_else(|| "unknown".to_string()),
                message: self.message,
            },
        }
    }
}

impl GeolocateResponse {
    /// Resolve to a point, or the provider's error
    pub fn into_point(self) -> Result<GeoPoint> {
        if let Some(error) = self.error.filter(|e| e.code != 0) {
            warn!(code = error.code, error_message = %error.message, "geolocate returned an error payload");
            return Err(error.into_error());
        }

        let location = self
            .location
            .ok_or_else(|| <serde_json::Error as serde::de::Error>::missing_field("location"))?;

        if let Some(accuracy) = self.accuracy {
            debug!(accuracy_m = accuracy, "geolocate accuracy");
        }

        Ok(GeoPoint::new(location.lat, location.lng))
    }
}

/// Decode a geocoding body, rejecting empty result lists
pub fn parse_geocode_response(body: &[u8]) -> Result<GeocodeResponse> {
    let response: GeocodeResponse = serde_json::from_slice(body)?;

    if let Some(status) = response.status.as_deref() {
        if status != "OK" && status != "ZERO_RESULTS" {
            warn!(
                status,
                error_message = response.error_message.as_deref().unwrap_or(""),
                "geocoding provider returned a non-OK status"
            );
        }
    }

    debug!(results = response.results.len(), "parsed geocode response");

    if response.results.is_empty() {
        return Err(Error::ZeroResults);
    }
    Ok(response)
}

/// Parse a forward geocode body into the first (most relevant) match
pub fn parse_geocode(body: &[u8]) -> Result<GeoPoint> {
    let response = parse_geocode_response(body)?;
    first_result(response.results).map(|r| r.to_point())
}

/// Parse a reverse geocode body into the first match's formatted address
pub fn parse_reverse_geocode(body: &[u8]) -> Result<String> {
    let response = parse_geocode_response(body)?;
    first_result(response.results).map(|r| r.formatted_address)
}

/// Parse a reverse geocode body into the full, non-empty result list
pub fn parse_reverse_geocode_detailed(body: &[u8]) -> Result<Vec<GeocodeResult>> {
    parse_geocode_response(body).map(|r| r.results)
}

/// Parse a geolocation body into a point
pub fn parse_geolocate(body: &[u8]) -> Result<GeoPoint> {
    let response: GeolocateResponse = serde_json::from_slice(body)?;
    response.into_point()
}

fn first_result(results: Vec<GeocodeResult>) -> Result<GeocodeResult> {
    results.into_iter().next().ok_or(Error::ZeroResults)
}
