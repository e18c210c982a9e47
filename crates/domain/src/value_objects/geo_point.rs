//! Geographic point value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// A latitude/longitude pair in degrees
///
/// Ranges are not enforced on construction: the geocoding service is the
/// authority on what it accepts. Use [`GeoPoint::is_within_bounds`] to check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

impl GeoPoint {
    /// Create a new point
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Check whether both coordinates are finite and inside their valid ranges
    #[must_use]
    pub fn is_within_bounds(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Render the point as `"{lat},{lon}"` for a `latlng` query parameter
    ///
    /// Float formatting in Rust never consults the host locale, so the decimal
    /// separator is always `.` and cannot collide with the `,` between the pair.
    /// Each value uses the shortest representation that round-trips.
    #[must_use]
    pub fn to_lat_lng_param(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}
