//! Error types for geolocate

use thiserror::Error;

/// Main error type for geolocate operations
#[derive(Error, Debug)]
pub enum Error {
    /// Network failure, timeout, non-2xx status or unreadable body
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body was not the expected JSON shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The provider answered but found nothing
    #[error("ZERO_RESULTS")]
    ZeroResults,

    /// Error payload returned inside an otherwise successful geolocate response
    #[error("{domain}.{reason}.{message}")]
    Provider {
        code: i64,
        domain: String,
        reason: String,
        message: String,
    },

    #[error("Google API key not provided")]
    MissingApiKey,

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True when the provider simply had no match ("not found" rather than "broken")
    pub fn is_zero_results(&self) -> bool {
        matches!(self, Self::ZeroResults)
    }

    /// True for failures below the JSON layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Result type alias for geolocate operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_display() {
        let err = Error::Provider {
            code: 400,
            domain: "usageLimits".to_string(),
            reason: "keyInvalid".to_string(),
            message: "Bad Request".to_string(),
        };
        assert_eq!(err.to_string(), "usageLimits.keyInvalid.Bad Request");
    }

    #[test]
    fn test_missing_key_display() {
        assert_eq!(Error::MissingApiKey.to_string(), "Google API key not provided");
    }

    #[test]
    fn test_classification() {
        assert!(Error::ZeroResults.is_zero_results());
        assert!(!Error::ZeroResults.is_transport());

        let transport = Error::Transport("connection refused".to_string());
        assert!(transport.is_transport());
        assert!(!transport.is_zero_results());
    }

    #[test]
    fn test_decode_from_serde() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Decode(_)));
    }
}
