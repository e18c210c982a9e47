//! Geocoding client
//!
//! [`GeocodingClient`] is the capability interface, [`Geocoder`] its only
//! implementation. Every call builds a request URI, fetches it through a
//! [`Transport`] and, for the typed variants, parses the JSON body.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};

use crate::config::GeocoderConfig;
use crate::error::{GeocodingError, Result};
use crate::models::GeocodeResponse;
use crate::parser;
use crate::request::{RequestParam, ResponseFormat, build_request_uri, lat_lng_value};
use crate::transport::{HttpTransport, Transport};

/// Trait for geocoding clients
///
/// Blocking methods must not be called from inside an async runtime; use the
/// async variants there.
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// API key appended to every request
    fn api_key(&self) -> &str;

    /// Geocode an address and return the body in the requested format, unparsed
    fn geocode_raw_blocking(&self, address: &str, format: ResponseFormat) -> Result<String>;

    /// Geocode an address
    fn geocode_blocking(&self, address: &str) -> Result<GeocodeResponse>;

    /// Reverse geocode a coordinate pair and return the body unparsed
    fn reverse_geocode_raw_blocking(
        &self,
        latitude: f64,
        longitude: f64,
        format: ResponseFormat,
    ) -> Result<String>;

    /// Reverse geocode a coordinate pair
    fn reverse_geocode_blocking(&self, latitude: f64, longitude: f64)
    -> Result<GeocodeResponse>;

    /// Geocode an address and return the body in the requested format, unparsed
    async fn geocode_raw(&self, address: &str, format: ResponseFormat) -> Result<String>;

    /// Geocode an address
    async fn geocode(&self, address: &str) -> Result<GeocodeResponse>;

    /// Reverse geocode a coordinate pair and return the body unparsed
    async fn reverse_geocode_raw(
        &self,
        latitude: f64,
        longitude: f64,
        format: ResponseFormat,
    ) -> Result<String>;

    /// Reverse geocode a coordinate pair
    async fn reverse_geocode(&self, latitude: f64, longitude: f64) -> Result<GeocodeResponse>;

    /// Decode a JSON response body
    fn from_json(&self, json: &str) -> Result<GeocodeResponse>;

    /// Decode an XML response body
    fn from_xml(&self, xml: &str) -> Result<GeocodeResponse>;
}

/// Geocoder bound to one API key
///
/// Holds no mutable state, so a single instance can serve any number of
/// concurrent calls.
#[derive(Debug)]
pub struct Geocoder<T = HttpTransport> {
    api_key: SecretString,
    config: GeocoderConfig,
    transport: T,
}

impl Geocoder<HttpTransport> {
    /// Create a geocoder that talks to the service over HTTP
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if the key is empty, the configuration is
    /// invalid or the HTTP client cannot be initialized.
    pub fn new(api_key: impl Into<String>, config: &GeocoderConfig) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        Self::with_transport(api_key, config, transport)
    }
}

impl<T: Transport> Geocoder<T> {
    /// Create a geocoder with a custom transport
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if the key is empty or the configuration
    /// is invalid.
    pub fn with_transport(
        api_key: impl Into<String>,
        config: &GeocoderConfig,
        transport: T,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GeocodingError::ConfigurationError(
                "api_key must not be empty".to_string(),
            ));
        }
        config.validate()?;

        Ok(Self {
            api_key: SecretString::from(api_key),
            config: config.clone(),
            transport,
        })
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &GeocoderConfig {
        &self.config
    }

    /// Build the request URI for a lookup
    ///
    /// Blocking and async calls both go through here.
    pub fn request_uri(
        &self,
        format: ResponseFormat,
        param: RequestParam,
        value: &str,
    ) -> Result<String> {
        build_request_uri(
            &self.config,
            self.api_key.expose_secret(),
            format,
            param,
            value,
        )
    }

    fn reverse_uri(&self, latitude: f64, longitude: f64, format: ResponseFormat) -> Result<String> {
        let value = lat_lng_value(latitude, longitude)?;
        self.request_uri(format, RequestParam::LatLng, &value)
    }
}

#[async_trait]
impl<T: Transport> GeocodingClient for Geocoder<T> {
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    #[instrument(skip(self))]
    fn geocode_raw_blocking(&self, address: &str, format: ResponseFormat) -> Result<String> {
        let uri = self.request_uri(format, RequestParam::Address, address)?;
        debug!(%format, "Geocoding address");
        self.transport.fetch_blocking(&uri)
    }

    #[instrument(skip(self))]
    fn geocode_blocking(&self, address: &str) -> Result<GeocodeResponse> {
        let body = self.geocode_raw_blocking(address, ResponseFormat::Json)?;
        parser::from_json(&body)
    }

    #[instrument(skip(self))]
    fn reverse_geocode_raw_blocking(
        &self,
        latitude: f64,
        longitude: f64,
        format: ResponseFormat,
    ) -> Result<String> {
        let uri = self.reverse_uri(latitude, longitude, format)?;
        debug!(%format, "Reverse geocoding");
        self.transport.fetch_blocking(&uri)
    }

    #[instrument(skip(self))]
    fn reverse_geocode_blocking(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<GeocodeResponse> {
        let body = self.reverse_geocode_raw_blocking(latitude, longitude, ResponseFormat::Json)?;
        parser::from_json(&body)
    }

    #[instrument(skip(self))]
    async fn geocode_raw(&self, address: &str, format: ResponseFormat) -> Result<String> {
        let uri = self.request_uri(format, RequestParam::Address, address)?;
        debug!(%format, "Geocoding address");
        self.transport.fetch(&uri).await
    }

    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<GeocodeResponse> {
        let body = self.geocode_raw(address, ResponseFormat::Json).await?;
        parser::from_json(&body)
    }

    #[instrument(skip(self))]
    async fn reverse_geocode_raw(
        &self,
        latitude: f64,
        longitude: f64,
        format: ResponseFormat,
    ) -> Result<String> {
        let uri = self.reverse_uri(latitude, longitude, format)?;
        debug!(%format, "Reverse geocoding");
        self.transport.fetch(&uri).await
    }

    #[instrument(skip(self))]
    async fn reverse_geocode(&self, latitude: f64, longitude: f64) -> Result<GeocodeResponse> {
        let body = self
            .reverse_geocode_raw(latitude, longitude, ResponseFormat::Json)
            .await?;
        parser::from_json(&body)
    }

    fn from_json(&self, json: &str) -> Result<GeocodeResponse> {
        parser::from_json(json)
    }

    fn from_xml(&self, xml: &str) -> Result<GeocodeResponse> {
        parser::from_xml(xml)
    }
}
