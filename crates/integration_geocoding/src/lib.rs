//! Geocoding web service client
//!
//! Converts postal addresses into coordinates ("geocode") and coordinates back
//! into addresses ("reverse geocode") using the
//! [Google Maps Geocoding API](https://developers.google.com/maps/documentation/geocoding).
//!
//! # Architecture
//!
//! The crate follows the client-trait pattern of the other integration crates.
//! [`GeocodingClient`] is the capability interface, implemented by [`Geocoder`].
//! A call runs three steps in order: [`request`] builds the request URI,
//! a [`Transport`] fetches the body, and [`parser`] decodes JSON or XML into
//! a [`GeocodeResponse`]. Every operation has a blocking and an async variant.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{Geocoder, GeocoderConfig, GeocodingClient};
//!
//! let geocoder = Geocoder::new("my-api-key", &GeocoderConfig::default())?;
//!
//! let response = geocoder
//!     .geocode("1600 Amphitheatre Parkway, Mountain View, CA")
//!     .await?;
//! if let Some(result) = response.first() {
//!     println!("{} -> {}", result.formatted_address, result.coordinates());
//! }
//! ```

mod client;
mod config;
mod error;
mod models;
pub mod parser;
pub mod request;
mod transport;
mod urlencoding;

pub use client::{Geocoder, GeocodingClient};
pub use config::GeocoderConfig;
pub use domain::value_objects::GeoPoint;
pub use error::{ErrorKind, GeocodingError, Result};
pub use models::{
    AddressComponent, GeocodeResponse, GeocodeResult, GeocodeStatus, Geometry, LatLng, PlusCode,
    Viewport,
};
pub use request::{RequestParam, ResponseFormat};
pub use transport::{HttpTransport, Transport};
