//! Geocoding response models
//!
//! Field names follow the service's JSON document. XML documents are mapped
//! onto the same types by the parser.

use std::fmt;

use domain::value_objects::GeoPoint;
use serde::{Deserialize, Serialize};

/// Top-level geocoding response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResponse {
    /// Status reported by the service
    pub status: GeocodeStatus,
    /// Matched results, empty unless `status` is `OK`
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    /// Additional detail when the request was not successful
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Open Location Code of the queried point, set on reverse lookups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plus_code: Option<PlusCode>,
}

impl GeocodeResponse {
    /// Returns true if the service reported success
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == GeocodeStatus::Ok
    }

    /// First (best) result, if any
    #[must_use]
    pub fn first(&self) -> Option<&GeocodeResult> {
        self.results.first()
    }
}

/// Status code returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GeocodeStatus {
    /// At least one result was returned
    Ok,
    /// The lookup succeeded but matched nothing
    ZeroResults,
    /// Billing or key problem on the account
    OverDailyLimit,
    /// Quota exceeded
    OverQueryLimit,
    /// The request was rejected, usually because of the key
    RequestDenied,
    /// A required parameter was missing or malformed
    InvalidRequest,
    /// Server-side error, the request may succeed if repeated
    UnknownError,
    /// A status this client does not know about
    Other(String),
}

impl GeocodeStatus {
    /// Wire representation
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ok => "OK",
            Self::ZeroResults => "ZERO_RESULTS",
            Self::OverDailyLimit => "OVER_DAILY_LIMIT",
            Self::OverQueryLimit => "OVER_QUERY_LIMIT",
            Self::RequestDenied => "REQUEST_DENIED",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::UnknownError => "UNKNOWN_ERROR",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for GeocodeStatus {
    fn from(value: String) -> Self {
        match value.trim() {
            "OK" => Self::Ok,
            "ZERO_RESULTS" => Self::ZeroResults,
            "OVER_DAILY_LIMIT" => Self::OverDailyLimit,
            "OVER_QUERY_LIMIT" => Self::OverQueryLimit,
            "REQUEST_DENIED" => Self::RequestDenied,
            "INVALID_REQUEST" => Self::InvalidRequest,
            "UNKNOWN_ERROR" => Self::UnknownError,
            _ => Self::Other(value),
        }
    }
}

impl From<GeocodeStatus> for String {
    fn from(status: GeocodeStatus) -> Self {
        match status {
            GeocodeStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for GeocodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single geocoding match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    /// Address parts, most specific first
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    /// Human-readable address
    pub formatted_address: String,
    /// Position and extent of the match
    pub geometry: Geometry,
    /// Stable place identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    /// Feature types of the match, e.g. `street_address`
    #[serde(default)]
    pub types: Vec<String>,
    /// Set when the service could only match part of the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partial_match: Option<bool>,
    /// Open Location Code for the match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plus_code: Option<PlusCode>,
}

impl GeocodeResult {
    /// Coordinates of the match
    #[must_use]
    pub fn coordinates(&self) -> GeoPoint {
        self.geometry.location.into()
    }
}

/// One part of a structured address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
    /// Precision of `location`, e.g. `ROOFTOP` or `APPROXIMATE`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Viewport>,
}

/// Coordinate pair as the service spells it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<LatLng> for GeoPoint {
    fn from(value: LatLng) -> Self {
        Self::new(value.lat, value.lng)
    }
}

/// Bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub northeast: LatLng,
    pub southwest: LatLng,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlusCode {
    pub global_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compound_code: Option<String>,
}
