//! Geocoding error types

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, GeocodingError>;

/// Coarse classification of a [`GeocodingError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a value the client cannot turn into a request
    InvalidArgument,
    /// The HTTP round trip failed
    Transport,
    /// The response body did not match the expected schema
    Parse,
}

/// Errors that can occur during geocoding operations
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Unsupported format or parameter kind, or an unusable parameter value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Client configuration is invalid
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Connection to the geocoding service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The geocoding service answered with a non-success status
    #[error("Request failed: HTTP {status}")]
    RequestFailed {
        /// HTTP status code returned by the service
        status: u16,
    },

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl GeocodingError {
    /// Classify this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) | Self::ConfigurationError(_) => ErrorKind::InvalidArgument,
            Self::ConnectionFailed(_) | Self::RequestFailed { .. } | Self::Timeout { .. } => {
                ErrorKind::Transport
            },
            Self::ParseError(_) => ErrorKind::Parse,
        }
    }

    /// Returns true if the error happened during the HTTP round trip
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self.kind(), ErrorKind::Transport)
    }

    /// Returns true if repeating the same request may succeed
    ///
    /// The client never retries on its own; this is a hint for callers.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::ConnectionFailed(_) | Self::Timeout { .. } => true,
            Self::RequestFailed { status } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}
