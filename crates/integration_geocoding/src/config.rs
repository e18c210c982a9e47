//! Geocoding service configuration

use serde::{Deserialize, Serialize};

use crate::error::GeocodingError;

/// Configuration for the geocoding web service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeocoderConfig {
    /// Base endpoint of the geocoding API, without the format segment
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds, applied to both blocking and async calls
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://maps.googleapis.com/maps/api/geocode".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("geocoder/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl GeocoderConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Base URL without a trailing slash
    pub(crate) fn endpoint(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if the base URL is not an absolute
    /// http(s) URL or the timeout is zero.
    pub fn validate(&self) -> Result<(), GeocodingError> {
        if self.base_url.is_empty() {
            return Err(GeocodingError::ConfigurationError(
                "base_url must not be empty".to_string(),
            ));
        }

        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| GeocodingError::ConfigurationError(format!("base_url: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(GeocodingError::ConfigurationError(format!(
                "base_url must use http or https, got {}",
                parsed.scheme()
            )));
        }

        if self.timeout_secs == 0 {
            return Err(GeocodingError::ConfigurationError(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeocoderConfig::default();
        assert_eq!(
            config.base_url,
            "https://maps.googleapis.com/maps/api/geocode"
        );
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("geocoder/"));
    }

    #[test]
    fn test_testing_config() {
        let config = GeocoderConfig::for_testing();
        assert_eq!(config.timeout_secs, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let config = GeocoderConfig {
            base_url: "http://localhost:8080/geocode/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.endpoint(), "http://localhost:8080/geocode");
    }

    #[test]
    fn test_validation_success() {
        assert!(GeocoderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let config = GeocoderConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GeocodingError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_validation_relative_base_url() {
        let config = GeocoderConfig {
            base_url: "maps/api/geocode".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_unsupported_scheme() {
        let config = GeocoderConfig {
            base_url: "ftp://example.com/geocode".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = GeocoderConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: GeocoderConfig = serde_json::from_str(r#"{"timeout_secs": 12}"#).unwrap();
        assert_eq!(config.timeout_secs, 12);
        assert_eq!(config.base_url, default_base_url());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = GeocoderConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GeocoderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, config);
    }
}
