//! Transport seam between the endpoint wrapper and the network.
//!
//! The wrapper only ever needs two primitives, `get(path, options)` and
//! `put(path, options)`. [`Transport`] captures them; [`HttpTransport`] is
//! the reqwest implementation.
//!
//! # Invariants
//! - `path` is relative to the transport's base URL and already carries its
//!   query string.
//! - Body-type negotiation happens before any network activity: an
//!   unsupported requested type fails with `UnsupportedBodyType`.

pub mod builder;
mod http;

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::body::{BodyType, DEFAULT_SUPPORTED_BODY_TYPES, ResponseBody};
use crate::error::{ClientError, Result};

pub use http::HttpTransport;

/// HTTP verb used by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Put,
}

impl HttpMethod {
    pub const fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-request transport options.
///
/// All fields are optional; `None` leaves the decision to the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestOptions {
    /// Body type the caller wants back.
    pub body: Option<BodyType>,
    /// Acceptable body types. `None` means [`DEFAULT_SUPPORTED_BODY_TYPES`].
    pub supported_body_types: Option<Vec<BodyType>>,
    /// Timeout for this request only.
    #[serde(skip)]
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a specific body type.
    pub fn body(mut self, body: BodyType) -> Self {
        self.body = Some(body);
        self
    }

    /// Restrict the acceptable body types.
    pub fn supported_body_types(mut self, types: impl Into<Vec<BodyType>>) -> Self {
        self.supported_body_types = Some(types.into());
        self
    }

    /// Override the transport timeout for this request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The effective set of acceptable body types.
    pub fn effective_supported(&self) -> &[BodyType] {
        self.supported_body_types
            .as_deref()
            .unwrap_or(DEFAULT_SUPPORTED_BODY_TYPES)
    }

    /// Resolve the body type to request.
    ///
    /// The explicit `body` wins, then the first supported type, then JSON.
    /// The result must be a member of the supported set.
    pub fn negotiate(&self) -> Result<BodyType> {
        let supported = self.effective_supported();
        let requested = self
            .body
            .or_else(|| supported.first().copied())
            .unwrap_or(BodyType::Json);

        if !supported.contains(&requested) {
            return Err(ClientError::UnsupportedBodyType {
                requested,
                supported: supported.to_vec(),
            });
        }
        Ok(requested)
    }
}

/// A decoded response from the REST API.
#[derive(Debug, Clone, PartialEq)]
pub struct CephResponse {
    pub status: u16,
    pub url: String,
    pub content_type: Option<String>,
    pub body: ResponseBody,
}

impl CephResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The `output` member of the JSON envelope (`{"status": ..., "output": ...}`).
    pub fn output(&self) -> Option<&serde_json::Value> {
        self.body.as_json().and_then(|v| v.get("output"))
    }

    /// The `status` member of the JSON envelope.
    pub fn ceph_status(&self) -> Option<&str> {
        self.body
            .as_json()
            .and_then(|v| v.get("status"))
            .and_then(|s| s.as_str())
    }
}

/// The generic `get` / `put` primitive the endpoint wrapper delegates to.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET for `path` (relative, query string included).
    async fn get(&self, path: &str, options: RequestOptions) -> Result<CephResponse>;

    /// Issue a PUT for `path` (relative, query string included).
    async fn put(&self, path: &str, options: RequestOptions) -> Result<CephResponse>;
}
