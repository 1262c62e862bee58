//! Blocking HTTP transport for the Google Maps web services
//!
//! One request per call, bounded by a timeout, no retries.

use crate::config::Config;
use crate::constants::api::{GEOCODE_URL, GEOLOCATE_URL};
use crate::constants::http::DEFAULT_TIMEOUT_SECS;
use crate::error::{Error, Result};
use crate::geo::query::redact_key;
use crate::geo::{GeocodeProvider, Method, ProviderRequest, RequestKind};
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("geolocate/", env!("CARGO_PKG_VERSION"));

/// Longest slice of an error body kept in transport error messages
const ERROR_BODY_PREVIEW: usize = 256;

/// HTTP provider backed by `reqwest::blocking`
#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: reqwest::blocking::Client,
    geocode_url: String,
    geolocate_url: String,
}

impl HttpProvider {
    /// Create a provider with the default endpoints and timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a provider with the default endpoints and a custom timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(client))
    }

    /// Create a provider from configuration (timeout and endpoints)
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::with_timeout(config.timeout())?
            .with_endpoints(&config.http.geocode_url, &config.http.geolocate_url))
    }

    /// Wrap an already configured client
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self {
            client,
            geocode_url: GEOCODE_URL.to_string(),
            geolocate_url: GEOLOCATE_URL.to_string(),
        }
    }

    /// Override the endpoint base URLs
    pub fn with_endpoints(
        mut self,
        geocode_url: impl Into<String>,
        geolocate_url: impl Into<String>,
    ) -> Self {
        self.geocode_url = geocode_url.into();
        self.geolocate_url = geolocate_url.into();
        self
    }

    /// Full URL for a request
    pub fn url_for(&self, request: &ProviderRequest) -> String {
        let base = match request.kind {
            RequestKind::Geocode | RequestKind::ReverseGeocode => &self.geocode_url,
            RequestKind::Geolocate => &self.geolocate_url,
        };
        format!("{}?{}", base, request.query)
    }
}

impl GeocodeProvider for HttpProvider {
    fn send(&self, request: &ProviderRequest) -> Result<Vec<u8>> {
        let url = self.url_for(request);
        debug!(
            kind = %request.kind,
            query = %redact_key(&request.query),
            "sending provider request"
        );

        let builder = match request.kind.method() {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url).body(Vec::<u8>::new()),
        };

        let response = builder
            .send()
            .map_err(|e| Error::Transport(format!("{} request failed: {}", request.kind, e)))?;

        let status = response.status();
        let body = response
            .bytes()
            .map_err(|e| Error::Transport(format!("Failed to read {} response: {}", request.kind, e)))?;

        if !status.is_success() {
            let preview: String = String::from_utf8_lossy(&body)
                .chars()
                .take(ERROR_BODY_PREVIEW)
                .collect();
            warn!(kind = %request.kind, %status, "provider returned an error status");
            return Err(Error::Transport(format!(
                "{} returned status {}: {}",
                request.kind, status, preview
            )));
        }

        debug!(kind = %request.kind, bytes = body.len(), "provider response received");
        Ok(body.to_vec())
    }
}
