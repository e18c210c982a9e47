//! Request URI construction
//!
//! Every request has the same shape:
//! `{base_url}/{format}?{param}={value}&key={api_key}`.

use std::fmt;
use std::str::FromStr;

use domain::value_objects::GeoPoint;
use serde::{Deserialize, Serialize};

use crate::config::GeocoderConfig;
use crate::error::{GeocodingError, Result};
use crate::urlencoding;

/// Query key carrying the API key
pub const API_KEY_PARAM: &str = "key";

/// Wire encoding requested from the service and used to parse its answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// `application/json`
    #[default]
    Json,
    /// `application/xml`
    Xml,
}

impl ResponseFormat {
    /// Path segment selecting this format on the service
    #[must_use]
    pub const fn as_path_segment(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path_segment())
    }
}

impl FromStr for ResponseFormat {
    type Err = GeocodingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            _ => Err(GeocodingError::InvalidArgument(format!(
                "Unsupported format type {s}"
            ))),
        }
    }
}

/// Which lookup a request performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestParam {
    /// Forward geocoding of a postal address
    Address,
    /// Reverse geocoding of a coordinate pair
    LatLng,
}

impl RequestParam {
    /// Query key the service expects for this lookup
    #[must_use]
    pub const fn query_key(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::LatLng => "latlng",
        }
    }
}

impl fmt::Display for RequestParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query_key())
    }
}

impl FromStr for RequestParam {
    type Err = GeocodingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "address" => Ok(Self::Address),
            "latlng" => Ok(Self::LatLng),
            _ => Err(GeocodingError::InvalidArgument(format!(
                "Unsupported param type {s}"
            ))),
        }
    }
}

/// Build the full request URI for one lookup
///
/// The value is trimmed and URL-decoded before being encoded again for the
/// query string, so `"Main%20St"` and `"Main St"` produce the same request.
///
/// # Errors
///
/// Returns `InvalidArgument` if the value is empty after trimming and decoding.
pub fn build_request_uri(
    config: &GeocoderConfig,
    api_key: &str,
    format: ResponseFormat,
    param: RequestParam,
    value: &str,
) -> Result<String> {
    let decoded = urlencoding::decode(value.trim());
    if decoded.trim().is_empty() {
        return Err(GeocodingError::InvalidArgument(format!(
            "{} must not be empty",
            param.query_key()
        )));
    }

    Ok(format!(
        "{}/{}?{}={}&{}={}",
        config.endpoint(),
        format.as_path_segment(),
        param.query_key(),
        urlencoding::encode(&decoded),
        API_KEY_PARAM,
        urlencoding::encode(api_key),
    ))
}

/// Format a coordinate pair as the `latlng` parameter value
///
/// # Errors
///
/// Returns `InvalidArgument` if either coordinate is NaN or infinite.
pub fn lat_lng_value(latitude: f64, longitude: f64) -> Result<String> {
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(GeocodingError::InvalidArgument(format!(
            "coordinates must be finite, got {latitude},{longitude}"
        )));
    }
    Ok(GeoPoint::new(latitude, longitude).to_lat_lng_param())
}
