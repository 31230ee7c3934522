//! Error types for launchtracker.
//!
//! This module defines all error types used throughout the launchtracker crate,
//! providing detailed context for debugging and user-friendly error messages.

use thiserror::Error;

/// The main error type for launchtracker operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Transport Errors ===
    /// The HTTP request could not be completed (connect, timeout, TLS, ...).
    #[error("request to {endpoint} failed: {source}")]
    Request {
        /// API path that was requested.
        endpoint: String,
        /// The underlying error.
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status code.
    #[error("{endpoint} returned HTTP {status}")]
    HttpStatus {
        /// API path that was requested.
        endpoint: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The response body did not match the expected record shape.
    #[error("failed to decode response from {endpoint}: {source}")]
    Decode {
        /// API path that was requested.
        endpoint: String,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Lookup Errors ===
    /// No launch with the requested identifier was loaded.
    #[error("no launch with id '{id}'")]
    LaunchNotFound {
        /// The identifier that was requested.
        id: String,
    },

    // === I/O Errors ===
    /// File system or terminal operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for launchtracker operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a transport error for the given endpoint.
    #[must_use]
    pub fn request(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Request {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// Create a decode error for the given endpoint.
    #[must_use]
    pub fn decode(endpoint: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// Create an HTTP status error for the given endpoint.
    #[must_use]
    pub fn http_status(endpoint: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            endpoint: endpoint.into(),
            status,
        }
    }

    /// Create a launch-not-found error.
    #[must_use]
    pub fn launch_not_found(id: impl Into<String>) -> Self {
        Self::LaunchNotFound { id: id.into() }
    }

    /// Check if this error came from talking to the remote API.
    #[must_use]
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Self::Request { .. } | Self::HttpStatus { .. } | Self::Decode { .. }
        )
    }

    /// Check if this error means a requested record does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::LaunchNotFound { .. } => true,
            Self::HttpStatus { status, .. } => *status == 404,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error() -> serde_json::Error {
        serde_json::from_str::<Vec<u8>>("{not json").unwrap_err()
    }

    #[test]
    fn test_http_status_display() {
        let err = Error::http_status("/launches", 503);
        assert_eq!(err.to_string(), "/launches returned HTTP 503");
    }

    #[test]
    fn test_decode_display_mentions_endpoint() {
        let err = Error::decode("/rockets", decode_error());
        let msg = err.to_string();
        assert!(msg.contains("/rockets"));
        assert!(msg.starts_with("failed to decode response"));
    }

    #[test]
    fn test_is_transport_error() {
        assert!(Error::http_status("/launches", 500).is_transport_error());
        assert!(Error::decode("/launchpads", decode_error()).is_transport_error());
        assert!(!Error::launch_not_found("abc").is_transport_error());
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::launch_not_found("abc").is_not_found());
        assert!(Error::http_status("/launches/abc", 404).is_not_found());
        assert!(!Error::http_status("/launches", 500).is_not_found());
        assert!(!Error::ConfigValidation {
            message: "x".to_string()
        }
        .is_not_found());
    }

    #[test]
    fn test_launch_not_found_display() {
        let err = Error::launch_not_found("5eb87cd9ffd86e000604b32a");
        assert_eq!(
            err.to_string(),
            "no launch with id '5eb87cd9ffd86e000604b32a'"
        );
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "timeout_secs must be greater than 0".to_string(),
        };
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_from_json_error() {
        let err: Error = decode_error().into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_from_figment_error() {
        let err: Error = figment::Error::from("bad value".to_string()).into();
        assert!(matches!(err, Error::ConfigLoad(_)));
        assert!(err.to_string().contains("bad value"));
    }
}
