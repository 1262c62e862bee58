//! Geocoding module
//!
//! Provides forward/reverse geocoding and IP geolocation against the Google
//! Maps web services.
//!
//! Every lookup runs in two stages: a [`GeocodeProvider`] turns a
//! [`ProviderRequest`] into raw body bytes (or a transport error), then a pure
//! function in [`response`] turns those bytes into domain values.

pub mod address;
pub mod client;
pub mod http;
pub mod query;
pub mod response;

pub use address::{Address, AddressComponent};
pub use client::GeocodeClient;
pub use http::HttpProvider;
pub use response::{GeocodeResponse, GeocodeResult, GeolocateResponse};

use crate::error::Result;

/// Which provider endpoint a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Geocode,
    ReverseGeocode,
    Geolocate,
}

/// HTTP verb used for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl RequestKind {
    /// Geocoding lookups are GETs; geolocation is a POST with an empty body
    pub fn method(&self) -> Method {
        match self {
            Self::Geocode | Self::ReverseGeocode => Method::Get,
            Self::Geolocate => Method::Post,
        }
    }
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Geocode => write!(f, "geocode"),
            Self::ReverseGeocode => write!(f, "reverse_geocode"),
            Self::Geolocate => write!(f, "geolocate"),
        }
    }
}

/// A request ready to hand to a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRequest {
    pub kind: RequestKind,
    /// Pre-built query string, without the leading `?`
    pub query: String,
}

impl ProviderRequest {
    pub fn new(kind: RequestKind, query: impl Into<String>) -> Self {
        Self {
            kind,
            query: query.into(),
        }
    }
}

/// Transport stage of a lookup
///
/// Implementations return the raw response body on a 2xx answer and
/// `Error::Transport` for anything else (connection failure, timeout,
/// non-2xx status, unreadable body). They never inspect the JSON.
///
/// Implementations must be thread-safe (Send + Sync) so a client can be shared.
pub trait GeocodeProvider: Send + Sync {
    fn send(&self, request: &ProviderRequest) -> Result<Vec<u8>>;
}

impl<P: GeocodeProvider + ?Sized> GeocodeProvider for Box<P> {
    fn send(&self, request: &ProviderRequest) -> Result<Vec<u8>> {
        (**self).send(request)
    }
}

impl<P: GeocodeProvider + ?Sized> GeocodeProvider for std::sync::Arc<P> {
    fn send(&self, request: &ProviderRequest) -> Result<Vec<u8>> {
        (**self).send(request)
    }
}

/// In-memory provider that replays canned bodies and records requests
#[cfg(test)]
pub(crate) mod mock {
    use super::{GeocodeProvider, ProviderRequest};
    use crate::error::{Error, Result};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    pub(crate) struct MockProvider {
        replies: Mutex<VecDeque<Result<Vec<u8>>>>,
        requests: Mutex<Vec<ProviderRequest>>,
    }

    impl MockProvider {
        pub(crate) fn replying(body: &str) -> Self {
            let provider = Self::default();
            provider.push_body(body);
            provider
        }

        pub(crate) fn failing(message: &str) -> Self {
            let provider = Self::default();
            provider
                .replies
                .lock()
                .unwrap()
                .push_back(Err(Error::Transport(message.to_string())));
            provider
        }

        pub(crate) fn push_body(&self, body: &str) {
            self.replies
                .lock()
                .unwrap()
                .push_back(Ok(body.as_bytes().to_vec()));
        }

        pub(crate) fn requests(&self) -> Vec<ProviderRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl GeocodeProvider for MockProvider {
        fn send(&self, request: &ProviderRequest) -> Result<Vec<u8>> {
            self.requests.lock().unwrap().push(request.clone());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(Error::Transport("no canned reply".to_string())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockProvider;
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_request_methods() {
        assert_eq!(RequestKind::Geocode.method(), Method::Get);
        assert_eq!(RequestKind::ReverseGeocode.method(), Method::Get);
        assert_eq!(RequestKind::Geolocate.method(), Method::Post);
    }

    #[test]
    fn test_request_kind_display() {
        assert_eq!(RequestKind::ReverseGeocode.to_string(), "reverse_geocode");
    }

    #[test]
    fn test_shared_provider() {
        let provider = Arc::new(MockProvider::replying("{}"));
        let boxed: Box<dyn GeocodeProvider> = Box::new(Arc::clone(&provider));

        let request = ProviderRequest::new(RequestKind::Geolocate, "key=foo");
        assert_eq!(boxed.send(&request).unwrap(), b"{}".to_vec());
        assert!(boxed.send(&request).unwrap_err().is_transport());
        assert_eq!(provider.requests().len(), 2);
    }
}
