//! reqwest-backed [`Transport`] implementation.
//!
//! # What this module handles:
//! - Joining relative endpoint paths onto the base URL
//! - Content negotiation through the `Accept` header
//! - Decoding the response body according to the negotiated type
//! - Mapping non-success statuses and reqwest failures to [`ClientError`]
//!
//! # What this module does NOT handle:
//! - Shaping endpoint paths and query strings (see [`crate::client`])
//! - Retries; every call is a single attempt

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::debug;

use crate::body::{BodyType, ResponseBody};
use crate::error::{ClientError, Result};
use crate::metrics::{ErrorCategory, MetricsCollector};
use crate::transport::builder::HttpTransportBuilder;
use crate::transport::{CephResponse, HttpMethod, RequestOptions, Transport};

/// HTTP transport for the Ceph REST API.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) timeout: Duration,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl HttpTransport {
    /// Create a new transport builder.
    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a relative endpoint path.
    ///
    /// A leading `/` on the path is dropped so every endpoint stays under
    /// the API prefix of the base URL.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        options: RequestOptions,
    ) -> Result<CephResponse> {
        let body_type = options.negotiate()?;
        let url = self.url_for(path);
        let endpoint = endpoint_label(path);
        let timeout = options.timeout.unwrap_or(self.timeout);

        let mut builder = match method {
            HttpMethod::Get => self.http.get(&url),
            HttpMethod::Put => self.http.put(&url),
        }
        .header(ACCEPT, body_type.mime_type());

        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        debug!(%method, %url, accept = body_type.mime_type(), "Sending request");

        if let Some(metrics) = &self.metrics {
            metrics.record_request(endpoint, method.as_str());
        }
        let start = Instant::now();

        let result = self.execute(builder, &url, body_type, timeout).await;

        if let Some(metrics) = &self.metrics {
            let status = match &result {
                Ok(response) => Some(response.status),
                Err(e) => e.status(),
            };
            metrics.record_request_duration(endpoint, method.as_str(), start.elapsed(), status);
            if let Err(e) = &result {
                metrics.record_error(endpoint, method.as_str(), ErrorCategory::from(e));
            }
        }

        result
    }

    async fn execute(
        &self,
        builder: reqwest::RequestBuilder,
        url: &str,
        body_type: BodyType,
        timeout: Duration,
    ) -> Result<CephResponse> {
        let response = builder
            .send()
            .await
            .map_err(|e| map_send_error(e, url, timeout))?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string);

        debug!(status, url = %final_url, "Received response");

        if !response.status().is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response body".to_string());
            return Err(ClientError::ApiError {
                status,
                url: final_url,
                message: extract_error_message(&body),
            });
        }

        let body = decode_body(response, body_type).await?;

        Ok(CephResponse {
            status,
            url: final_url,
            content_type,
            body,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, options: RequestOptions) -> Result<CephResponse> {
        self.send(HttpMethod::Get, path, options).await
    }

    async fn put(&self, path: &str, options: RequestOptions) -> Result<CephResponse> {
        self.send(HttpMethod::Put, path, options).await
    }
}

/// Path without its query string, used as a low-cardinality metrics label.
fn endpoint_label(path: &str) -> &str {
    let path = path.trim_start_matches('/');
    path.split_once('?').map_or(path, |(p, _)| p)
}

fn map_send_error(error: reqwest::Error, url: &str, timeout: Duration) -> ClientError {
    if error.is_timeout() {
        ClientError::Timeout(timeout)
    } else if error.is_connect() {
        ClientError::ConnectionRefused(url.to_string())
    } else {
        ClientError::HttpError(error)
    }
}

/// Prefer the `status` member of a JSON error envelope over the raw body.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("status").and_then(|s| s.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

async fn decode_body(response: reqwest::Response, body_type: BodyType) -> Result<ResponseBody> {
    match body_type {
        BodyType::Json => {
            let bytes = response.bytes().await?;
            if bytes.iter().all(u8::is_ascii_whitespace) {
                return Ok(ResponseBody::Json(serde_json::Value::Null));
            }
            serde_json::from_slice(&bytes)
                .map(ResponseBody::Json)
                .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse JSON body: {}", e)))
        }
        BodyType::Text => Ok(ResponseBody::Text(response.text().await?)),
        BodyType::Xml => Ok(ResponseBody::Xml(response.text().await?)),
        BodyType::Binary => Ok(ResponseBody::Binary(response.bytes().await?.to_vec())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport() -> HttpTransport {
        HttpTransport::builder()
            .base_url("http://localhost:5000/api/v0.1".to_string())
            .build()
            .unwrap()
    }

    #[test]
    fn test_url_for_joins_relative_path() {
        assert_eq!(
            transport().url_for("osd/tree?epoch=12"),
            "http://localhost:5000/api/v0.1/osd/tree?epoch=12"
        );
    }

    #[test]
    fn test_url_for_keeps_leading_slash_paths_under_prefix() {
        assert_eq!(
            transport().url_for("/tell/osd.0/version"),
            "http://localhost:5000/api/v0.1/tell/osd.0/version"
        );
    }

    #[test]
    fn test_endpoint_label_strips_query() {
        assert_eq!(endpoint_label("mon/dump?epoch=3"), "mon/dump");
        assert_eq!(endpoint_label("/tell/osd.1/query"), "tell/osd.1/query");
        assert_eq!(endpoint_label("fsid"), "fsid");
    }

    #[test]
    fn test_extract_error_message_prefers_envelope_status() {
        let body = r#"{"status": "Error ENOENT: osd.9 does not exist", "output": []}"#;
        assert_eq!(
            extract_error_message(body),
            "Error ENOENT: osd.9 does not exist"
        );
        assert_eq!(extract_error_message("  plain failure \n"), "plain failure");
    }
}
