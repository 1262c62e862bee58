//! Geocoding client
//!
//! Builds queries, hands them to a [`GeocodeProvider`] and parses the bodies
//! that come back. The client holds only its API key and default region.
//!
//! Changing either needs `&mut self`, so a client shared by reference across
//! threads cannot be reconfigured while lookups are in flight.

use crate::config::Config;
use crate::coord::GeoPoint;
use crate::error::{Error, Result};
use crate::geo::http::HttpProvider;
use crate::geo::query;
use crate::geo::response::{self, GeocodeResult};
use crate::geo::{GeocodeProvider, ProviderRequest, RequestKind};
use tracing::debug;

/// Client for the geocoding and geolocation services
#[derive(Debug, Clone)]
pub struct GeocodeClient<P = HttpProvider> {
    provider: P,
    api_key: String,
    region: Option<String>,
}

impl GeocodeClient<HttpProvider> {
    /// Create a client using the HTTP provider with default endpoints and timeout
    ///
    /// An empty key is accepted for geocoding (the provider decides whether to
    /// serve it) but makes [`GeocodeClient::geolocate`] fail.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Ok(Self::with_provider(HttpProvider::new()?, api_key))
    }

    /// Create a client from configuration (key, region, timeout, endpoints)
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Self::with_provider(HttpProvider::from_config(config)?, &config.api.key);
        Ok(match config.region() {
            Some(region) => client.with_region(region),
            None => client,
        })
    }
}

impl<P: GeocodeProvider> GeocodeClient<P> {
    /// Create a client on top of any provider
    pub fn with_provider(provider: P, api_key: impl Into<String>) -> Self {
        Self {
            provider,
            api_key: api_key.into(),
            region: None,
        }
    }

    /// Set the default region bias (ccTLD code such as "es")
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.set_region(Some(region.into()));
        self
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
    }

    /// Replace the default region bias; `None` or an empty code clears it
    pub fn set_region(&mut self, region: Option<String>) {
        self.region = region.filter(|r| !r.is_empty());
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Forward geocode query for `address`, with the key appended last
    pub fn geocode_query(&self, address: &str, region: Option<&str>) -> String {
        query::geocode_query(address, region, &self.api_key)
    }

    /// Reverse geocode query for `point`, with the key appended last
    pub fn reverse_geocode_query(&self, point: &GeoPoint) -> String {
        query::reverse_geocode_query(point, &self.api_key)
    }

    /// Geocode an address using the client's default region bias
    ///
    /// # Returns
    /// The provider's first (most relevant) match, carrying its formatted
    /// address and location precision tag. `Error::ZeroResults` when nothing
    /// matched.
    pub fn geocode(&self, address: &str) -> Result<GeoPoint> {
        self.geocode_in(address, self.region.as_deref())
    }

    /// Geocode an address biased towards `region` for this call only
    pub fn geocode_with_region(&self, address: &str, region: &str) -> Result<GeoPoint> {
        self.geocode_in(address, Some(region))
    }

    fn geocode_in(&self, address: &str, region: Option<&str>) -> Result<GeoPoint> {
        let body = self.send(RequestKind::Geocode, self.geocode_query(address, region))?;
        let point = response::parse_geocode(&body)?;
        debug!(%address, lat = point.lat, lng = point.lng, "geocoded");
        Ok(point)
    }

    /// Formatted address of the first match for `point`
    pub fn reverse_geocode(&self, point: &GeoPoint) -> Result<String> {
        let body = self.send(RequestKind::ReverseGeocode, self.reverse_geocode_query(point))?;
        response::parse_reverse_geocode(&body)
    }

    /// Every match for `point`, with address components
    ///
    /// The list is never empty; apply [`GeocodeResult::address`] to get a
    /// structured address.
    pub fn reverse_geocode_detailed(&self, point: &GeoPoint) -> Result<Vec<GeocodeResult>> {
        let body = self.send(RequestKind::ReverseGeocode, self.reverse_geocode_query(point))?;
        response::parse_reverse_geocode_detailed(&body)
    }

    /// Rough location of the caller based on its IP address
    ///
    /// Requires an API key and fails with `Error::MissingApiKey` before any
    /// network traffic when none is set. Error payloads in the body are
    /// reported as `Error::Provider` even when the transport succeeded.
    pub fn geolocate(&self) -> Result<GeoPoint> {
        if self.api_key.is_empty() {
            return Err(Error::MissingApiKey);
        }
        let body = self.send(RequestKind::Geolocate, query::geolocate_query(&self.api_key))?;
        response::parse_geolocate(&body)
    }

    fn send(&self, kind: RequestKind, query: String) -> Result<Vec<u8>> {
        self.provider.send(&ProviderRequest::new(kind, query))
    }
}
