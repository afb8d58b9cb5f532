//! Metrics collection for REST API calls.
//!
//! This module provides metrics collection for Ceph REST calls, including:
//! - Request latency histograms
//! - Request counters
//! - Error categorization
//!
//! # What this module does NOT handle:
//! - Metrics exposition/export (install a `metrics` recorder for that)
//!
//! # Invariants
//! - All metrics use consistent label names: `endpoint`, `method`, `status`, `error_category`
//! - Metric recording is infallible
//! - Zero-cost when no metrics recorder is installed

use crate::error::ClientError;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "ceph_rest_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "ceph_rest_requests_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "ceph_rest_errors_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Transport-level errors (connection refused, DNS, etc.)
    Transport,
    /// HTTP 4xx client errors
    Http4xx,
    /// HTTP 5xx server errors
    Http5xx,
    /// Undecodable response body
    Decode,
    /// Request timeout
    Timeout,
    /// Rejected locally before any network activity
    Local,
    /// Unknown/unclassified errors
    Unknown,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::Decode => "decode",
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::Local => "local",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::Timeout(_) => ErrorCategory::Timeout,
            ClientError::ConnectionRefused(_) => ErrorCategory::Transport,
            ClientError::ApiError { status, .. } => match status {
                400..=499 => ErrorCategory::Http4xx,
                500..=599 => ErrorCategory::Http5xx,
                _ => ErrorCategory::Unknown,
            },
            ClientError::InvalidResponse(_) => ErrorCategory::Decode,
            ClientError::NotImplemented { .. }
            | ClientError::InvalidRequest { .. }
            | ClientError::UnsupportedBodyType { .. }
            | ClientError::InvalidUrl(_) => ErrorCategory::Local,
            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_request() {
                    ErrorCategory::Transport
                } else if e.is_decode() || e.is_body() {
                    ErrorCategory::Decode
                } else {
                    ErrorCategory::Unknown
                }
            }
        }
    }
}

/// Metrics collector for REST API calls.
///
/// A thin wrapper around the `metrics` crate macros with consistent labels.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create a new, enabled metrics collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a disabled metrics collector.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of an API request.
    ///
    /// `status` is None if the request failed before receiving a response.
    pub fn record_request_duration(
        &self,
        endpoint: &str,
        method: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record a request attempt.
    pub fn record_request(&self, endpoint: &str, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
        )
        .increment(1);
    }

    /// Record an error.
    pub fn record_error(&self, endpoint: &str, method: &str, category: ErrorCategory) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "error_category" => category.as_str(),
        )
        .increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_labels() {
        assert_eq!(ErrorCategory::Transport.as_str(), "transport");
        assert_eq!(ErrorCategory::Http4xx.as_str(), "http_4xx");
        assert_eq!(ErrorCategory::Http5xx.as_str(), "http_5xx");
        assert_eq!(ErrorCategory::Local.as_str(), "local");
    }

    #[test]
    fn test_error_category_from_api_error() {
        let err = ClientError::ApiError {
            status: 404,
            url: "http://localhost:5000/api/v0.1/auth/get?entity=client.nobody".to_string(),
            message: "not found".to_string(),
        };
        assert_eq!(ErrorCategory::from(&err), ErrorCategory::Http4xx);

        let err = ClientError::ApiError {
            status: 503,
            url: "http://localhost:5000/api/v0.1/status".to_string(),
            message: "unavailable".to_string(),
        };
        assert_eq!(ErrorCategory::from(&err), ErrorCategory::Http5xx);
    }

    #[test]
    fn test_error_category_from_local_rejections() {
        let err = ClientError::NotImplemented {
            operation: "mds_set_allow_new_snaps",
        };
        assert_eq!(ErrorCategory::from(&err), ErrorCategory::Local);
        let err = ClientError::InvalidRequest {
            operation: "tell_version",
            message: "daemon id required".to_string(),
        };
        assert_eq!(ErrorCategory::from(&err), ErrorCategory::Local);
        assert_eq!(
            ErrorCategory::from(&ClientError::Timeout(Duration::from_secs(3))),
            ErrorCategory::Timeout
        );
    }

    #[test]
    fn test_disabled_collector_is_noop() {
        let collector = MetricsCollector::disabled();
        assert!(!collector.is_enabled());
        collector.record_request("health", "GET");
        collector.record_request_duration("health", "GET", Duration::from_millis(5), Some(200));
        collector.record_error("health", "GET", ErrorCategory::Timeout);
    }

    #[test]
    fn test_enabled_collector_without_recorder_does_not_panic() {
        let collector = MetricsCollector::new();
        assert!(collector.is_enabled());
        collector.record_request("osd/tree", "GET");
        collector.record_request_duration("osd/tree", "GET", Duration::from_millis(12), None);
    }
}
