//! Configuration management
//!
//! Loads configuration from XDG-compliant paths or an explicit file.
//! Config location: ~/.config/geolocate/config.toml
//!
//! The library only ever reads this file.

pub mod defaults;

use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Credentials and request biasing
    #[serde(default)]
    pub api: ApiConfig,

    /// Transport settings
    #[serde(default)]
    pub http: HttpConfig,
}

/// Credentials and request biasing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Google API key; required for geolocation
    #[serde(default = "default_api_key")]
    pub key: String,

    /// Region bias as a ccTLD code (empty for none)
    #[serde(default = "default_region")]
    pub region: String,
}

/// Transport settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Geocoding endpoint
    #[serde(default = "default_geocode_url")]
    pub geocode_url: String,

    /// Geolocation endpoint
    #[serde(default = "default_geolocate_url")]
    pub geolocate_url: String,
}

// Default value functions for serde
fn default_api_key() -> String {
    DEFAULT_API_KEY.to_string()
}
fn default_region() -> String {
    DEFAULT_REGION.to_string()
}
fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_geocode_url() -> String {
    DEFAULT_GEOCODE_URL.to_string()
}
fn default_geolocate_url() -> String {
    DEFAULT_GEOLOCATE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: default_api_key(),
            region: default_region(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            geocode_url: default_geocode_url(),
            geolocate_url: default_geolocate_url(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Returns the defaults if the file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Config::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
    }

    /// Region bias, if one is set
    pub fn region(&self) -> Option<&str> {
        Some(self.api.region.as_str()).filter(|r| !r.is_empty())
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_secs)
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["api", "key"] => Some(self.api.key.clone()),
            ["api", "region"] => Some(self.api.region.clone()),

            ["http", "timeout_secs"] => Some(self.http.timeout_secs.to_string()),
            ["http", "geocode_url"] => Some(self.http.geocode_url.clone()),
            ["http", "geolocate_url"] => Some(self.http.geolocate_url.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["api", "key"] => {
                self.api.key = value.to_string();
            }
            ["api", "region"] => {
                self.api.region = value.to_string();
            }

            ["http", "timeout_secs"] => {
                self.http.timeout_secs = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid timeout value: {}", value))
                })?;
            }
            ["http", "geocode_url"] => {
                self.http.geocode_url = value.to_string();
            }
            ["http", "geolocate_url"] => {
                self.http.geolocate_url = value.to_string();
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "api.key",
            "api.region",
            "http.timeout_secs",
            "http.geocode_url",
            "http.geolocate_url",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.api.key, "");
        assert_eq!(config.region(), None);
        assert_eq!(config.http.timeout_secs, 10);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(
            config.http.geocode_url,
            "https://maps.googleapis.com/maps/api/geocode/json"
        );
    }

    #[test]
    fn test_get_set() {
        let mut config = Config::default();

        assert_eq!(config.get("api.key"), Some(String::new()));

        config.set("api.key", "foo").unwrap();
        assert_eq!(config.get("api.key"), Some("foo".to_string()));

        config.set("api.region", "es").unwrap();
        assert_eq!(config.region(), Some("es"));

        config.set("http.timeout_secs", "30").unwrap();
        assert_eq!(config.get("http.timeout_secs"), Some("30".to_string()));
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_get_invalid_key() {
        let config = Config::default();
        assert_eq!(config.get("invalid.key"), None);
        assert_eq!(config.get("api"), None);
    }

    #[test]
    fn test_set_invalid_key() {
        let mut config = Config::default();
        assert!(config.set("invalid.key", "value").is_err());
    }

    #[test]
    fn test_set_invalid_value() {
        let mut config = Config::default();
        assert!(config.set("http.timeout_secs", "soon").is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml_str(
            r#"
            [api]
            key = "foo"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.key, "foo");
        assert_eq!(config.region(), None);
        assert_eq!(config.http.timeout_secs, 10);
        assert_eq!(config.http.geolocate_url, DEFAULT_GEOLOCATE_URL);
    }

    #[test]
    fn test_invalid_toml() {
        let result = Config::from_toml_str("[api\nkey = ");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            "[api]\nkey = \"foo\"\nregion = \"se\"\n\n[http]\ntimeout_secs = 3\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api.key, "foo");
        assert_eq!(config.region(), Some("se"));
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_load_from_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load_from(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_without_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        let config = Config::load().unwrap();
        assert_eq!(config.http.timeout_secs, DEFAULT_TIMEOUT_SECS);

        // Nothing is written back
        assert!(!temp_dir.path().join(APP_DIR_NAME).exists());
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.api.key = "foo".to_string();

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[api]"));
        assert!(toml_str.contains("[http]"));

        let loaded = Config::from_toml_str(&toml_str).unwrap();
        assert_eq!(loaded.api.key, "foo");
        assert_eq!(loaded.http.timeout_secs, 10);
    }

    #[test]
    fn test_available_keys() {
        let keys = Config::available_keys();
        let config = Config::default();
        for key in keys {
            assert!(config.get(key).is_some(), "{} should be readable", key);
        }
    }
}
