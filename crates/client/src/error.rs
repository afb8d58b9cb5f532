//! Error types for the Ceph client.
//!
//! Two families live here. `NotImplemented` and `InvalidRequest` are raised
//! by the endpoint wrapper itself, before any network activity. Every other
//! variant originates in the transport and reaches the caller unchanged.

use std::time::Duration;
use thiserror::Error;

use crate::body::BodyType;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Ceph client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The operation is declared but not supported by this client.
    #[error("Operation not implemented: {operation}")]
    NotImplemented { operation: &'static str },

    /// The arguments do not fit the endpoint descriptor, e.g. a missing
    /// daemon id or an undeclared query parameter.
    #[error("Invalid request for {operation}: {message}")]
    InvalidRequest {
        operation: &'static str,
        message: String,
    },

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success response from the REST API.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// The requested response body type is not in the supported set.
    #[error("Unsupported body type '{requested}', supported: {}", format_body_types(.supported))]
    UnsupportedBodyType {
        requested: BodyType,
        supported: Vec<BodyType>,
    },

    /// Invalid response format from the REST API.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection refused.
    #[error("Connection refused to {0}")]
    ConnectionRefused(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

fn format_body_types(types: &[BodyType]) -> String {
    types
        .iter()
        .map(BodyType::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ClientError {
    /// Check if this error means "feature absent" rather than "call failed".
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }

    /// Check if this error was raised by the wrapper without a transport call.
    pub fn is_wrapper_error(&self) -> bool {
        matches!(
            self,
            Self::NotImplemented { .. } | Self::InvalidRequest { .. }
        )
    }

    /// Check if this error came from the transport layer.
    pub fn is_transport_error(&self) -> bool {
        !self.is_wrapper_error()
    }

    /// HTTP status of an API error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
