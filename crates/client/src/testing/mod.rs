//! Testing utilities for Ceph client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use ceph_client::CephWrapper;
//! use ceph_client::testing::{RecordingTransport, load_fixture};
//!
//! let transport = RecordingTransport::new().with_json(load_fixture("health/health_ok.json"));
//! let ceph = CephWrapper::new(transport);
//! ceph.health(None).await?;
//! assert_eq!(ceph.transport().last_request().unwrap().path, "health");
//! ```

use std::fmt;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use serde_json::json;

use crate::body::ResponseBody;
use crate::error::{ClientError, Result};
use crate::transport::{CephResponse, HttpMethod, RequestOptions, Transport};

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "osd/tree.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let fixture_dir = manifest_dir.join("fixtures");
    let full_path = fixture_dir.join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// One call observed by [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: HttpMethod,
    pub path: String,
    pub options: RequestOptions,
}

impl RecordedRequest {
    /// Path without its query string.
    pub fn resource(&self) -> &str {
        self.path.split_once('?').map_or(&self.path, |(p, _)| p)
    }

    /// Query string without the leading `?`, empty when absent.
    pub fn query(&self) -> &str {
        self.path.split_once('?').map_or("", |(_, q)| q)
    }
}

type ErrorFactory = Box<dyn Fn() -> ClientError + Send + Sync>;

/// In-memory [`Transport`] that records every call.
///
/// Replies with a canned response, `{"status": "OK", "output": null}` by
/// default, or with an error produced by the factory given to
/// [`RecordingTransport::failing`].
pub struct RecordingTransport {
    requests: Mutex<Vec<RecordedRequest>>,
    body: ResponseBody,
    error: Option<ErrorFactory>,
}

impl fmt::Debug for RecordingTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingTransport")
            .field("requests", &self.call_count())
            .field("body", &self.body)
            .field("failing", &self.error.is_some())
            .finish()
    }
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            body: ResponseBody::Json(json!({"status": "OK", "output": null})),
            error: None,
        }
    }
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply with `value` as a JSON body.
    pub fn with_json(mut self, value: serde_json::Value) -> Self {
        self.body = ResponseBody::Json(value);
        self
    }

    /// Reply with an arbitrary body.
    pub fn with_body(mut self, body: ResponseBody) -> Self {
        self.body = body;
        self
    }

    /// Fail every call with the error produced by `factory`.
    pub fn failing<F>(factory: F) -> Self
    where
        F: Fn() -> ClientError + Send + Sync + 'static,
    {
        Self {
            error: Some(Box::new(factory)),
            ..Self::default()
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<RecordedRequest>> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Every recorded call, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock().len()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.lock().last().cloned()
    }

    fn record(&self, method: HttpMethod, path: &str, options: RequestOptions) -> Result<CephResponse> {
        self.lock().push(RecordedRequest {
            method,
            path: path.to_string(),
            options,
        });

        if let Some(factory) = &self.error {
            return Err(factory());
        }

        Ok(CephResponse {
            status: 200,
            url: path.to_string(),
            content_type: Some(self.body.body_type().mime_type().to_string()),
            body: self.body.clone(),
        })
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(&self, path: &str, options: RequestOptions) -> Result<CephResponse> {
        self.record(HttpMethod::Get, path, options)
    }

    async fn put(&self, path: &str, options: RequestOptions) -> Result<CephResponse> {
        self.record(HttpMethod::Put, path, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_calls_in_order() {
        let transport = RecordingTransport::new();
        transport.get("osd/tree", RequestOptions::new()).await.unwrap();
        transport
            .put("log?logtext=hi", RequestOptions::new())
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, HttpMethod::Get);
        assert_eq!(requests[1].resource(), "log");
        assert_eq!(requests[1].query(), "logtext=hi");
    }

    #[tokio::test]
    async fn test_failing_still_records() {
        let transport = RecordingTransport::failing(|| ClientError::ConnectionRefused("mon1".into()));
        let err = transport.get("fsid", RequestOptions::new()).await.unwrap_err();
        assert!(matches!(err, ClientError::ConnectionRefused(_)));
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_canned_body() {
        let transport = RecordingTransport::new().with_body(ResponseBody::Binary(vec![7]));
        let response = transport.get("pg/getmap", RequestOptions::new()).await.unwrap();
        assert_eq!(response.body.as_bytes(), Some(&[7u8][..]));
        assert_eq!(response.content_type.as_deref(), Some("application/octet-stream"));
    }

    #[test]
    fn test_load_fixture() {
        let value = load_fixture("health/health_ok.json");
        assert_eq!(value["status"], "OK");
    }
}
