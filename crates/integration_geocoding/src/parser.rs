//! Response body decoding
//!
//! JSON bodies map straight onto the models. XML bodies repeat an element per
//! list entry (`<result>`, `<type>`, `<address_component>`) instead of using
//! arrays, so they are read into raw records first and converted.

use serde::Deserialize;
use tracing::debug;

use crate::error::{GeocodingError, Result};
use crate::models::{AddressComponent, GeocodeResponse, GeocodeResult, Geometry, PlusCode};
use crate::request::ResponseFormat;

/// Decode a JSON geocoding response
///
/// # Errors
///
/// Returns `ParseError` if the text is not JSON of the expected shape.
pub fn from_json(json: &str) -> Result<GeocodeResponse> {
    let response: GeocodeResponse =
        serde_json::from_str(json).map_err(|e| GeocodingError::ParseError(e.to_string()))?;
    debug!(status = %response.status, results = response.results.len(), "Parsed JSON response");
    Ok(response)
}

/// Decode an XML geocoding response
///
/// # Errors
///
/// Returns `ParseError` if the text is not XML of the expected shape.
pub fn from_xml(xml: &str) -> Result<GeocodeResponse> {
    let raw: RawXmlResponse =
        quick_xml::de::from_str(xml).map_err(|e| GeocodingError::ParseError(e.to_string()))?;
    let response = raw.into_response();
    debug!(status = %response.status, results = response.results.len(), "Parsed XML response");
    Ok(response)
}

/// Decode a body in the given format
///
/// # Errors
///
/// Returns `ParseError` if the body does not match the format's schema.
pub fn parse(body: &str, format: ResponseFormat) -> Result<GeocodeResponse> {
    match format {
        ResponseFormat::Json => from_json(body),
        ResponseFormat::Xml => from_xml(body),
    }
}

/// `<GeocodeResponse>` root element
#[derive(Debug, Deserialize)]
struct RawXmlResponse {
    status: String,
    #[serde(rename = "result", default)]
    results: Vec<RawXmlResult>,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    plus_code: Option<PlusCode>,
}

#[derive(Debug, Deserialize)]
struct RawXmlResult {
    #[serde(rename = "type", default)]
    types: Vec<String>,
    formatted_address: String,
    #[serde(rename = "address_component", default)]
    address_components: Vec<RawXmlAddressComponent>,
    geometry: Geometry,
    #[serde(default)]
    place_id: Option<String>,
    #[serde(default)]
    partial_match: Option<bool>,
    #[serde(default)]
    plus_code: Option<PlusCode>,
}

#[derive(Debug, Deserialize)]
struct RawXmlAddressComponent {
    long_name: String,
    short_name: String,
    #[serde(rename = "type", default)]
    types: Vec<String>,
}

impl RawXmlResponse {
    fn into_response(self) -> GeocodeResponse {
        GeocodeResponse {
            status: self.status.into(),
            results: self
                .results
                .into_iter()
                .map(RawXmlResult::into_result)
                .collect(),
            error_message: self.error_message,
            plus_code: self.plus_code,
        }
    }
}

impl RawXmlResult {
    fn into_result(self) -> GeocodeResult {
        GeocodeResult {
            address_components: self
                .address_components
                .into_iter()
                .map(|c| AddressComponent {
                    long_name: c.long_name,
                    short_name: c.short_name,
                    types: c.types,
                })
                .collect(),
            formatted_address: self.formatted_address,
            geometry: self.geometry,
            place_id: self.place_id,
            types: self.types,
            partial_match: self.partial_match,
            plus_code: self.plus_code,
        }
    }
}
