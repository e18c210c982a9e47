//! HTTP transport for geocoding requests
//!
//! One GET per call, returning the raw body. [`Transport`] is the seam that
//! lets tests replace the network with canned responses.

use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::config::GeocoderConfig;
use crate::error::{GeocodingError, Result};

/// Fetches the body behind a request URI
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform the request, blocking the calling thread until the body is read
    fn fetch_blocking(&self, uri: &str) -> Result<String>;

    /// Perform the request without blocking the executor
    async fn fetch(&self, uri: &str) -> Result<String>;
}

/// `reqwest`-backed transport
///
/// The async client is shared across calls. The blocking client owns its own
/// runtime thread and cannot be created inside an async context, so it is
/// acquired per call and dropped before returning.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Duration,
    user_agent: String,
}

impl HttpTransport {
    /// Create a new transport
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if the HTTP client cannot be initialized.
    pub fn new(config: &GeocoderConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| GeocodingError::ConfigurationError(e.to_string()))?;

        Ok(Self {
            client,
            timeout,
            user_agent: config.user_agent.clone(),
        })
    }

    fn map_error(&self, err: &reqwest::Error) -> GeocodingError {
        if err.is_timeout() {
            GeocodingError::Timeout {
                timeout_secs: self.timeout.as_secs(),
            }
        } else {
            GeocodingError::ConnectionFailed(err.to_string())
        }
    }
}

fn check_status(status: StatusCode) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    warn!(%status, "Geocoding service returned an error status");
    Err(GeocodingError::RequestFailed {
        status: status.as_u16(),
    })
}

#[async_trait]
impl Transport for HttpTransport {
    fn fetch_blocking(&self, uri: &str) -> Result<String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .build()
            .map_err(|e| GeocodingError::ConfigurationError(e.to_string()))?;

        let response = client.get(uri).send().map_err(|e| self.map_error(&e))?;
        check_status(response.status())?;

        let body = response.text().map_err(|e| self.map_error(&e))?;
        debug!(bytes = body.len(), "Received geocoding response");
        Ok(body)
    }

    async fn fetch(&self, uri: &str) -> Result<String> {
        let response = self
            .client
            .get(uri)
            .send()
            .await
            .map_err(|e| self.map_error(&e))?;
        check_status(response.status())?;

        let body = response.text().await.map_err(|e| self.map_error(&e))?;
        debug!(bytes = body.len(), "Received geocoding response");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status() {
        assert!(check_status(StatusCode::OK).is_ok());
        assert!(matches!(
            check_status(StatusCode::FORBIDDEN),
            Err(GeocodingError::RequestFailed { status: 403 })
        ));
        assert!(matches!(
            check_status(StatusCode::SERVICE_UNAVAILABLE),
            Err(GeocodingError::RequestFailed { status: 503 })
        ));
    }

    #[test]
    fn test_transport_keeps_config() {
        let config = GeocoderConfig {
            timeout_secs: 7,
            user_agent: "test-agent/1.0".to_string(),
            ..GeocoderConfig::default()
        };
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.timeout, Duration::from_secs(7));
        assert_eq!(transport.user_agent, "test-agent/1.0");
    }

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn Transport>();
    }
}
