//! Ceph REST management API client.
//!
//! This crate wraps the Ceph REST management API (`ceph-rest-api`) with one
//! method per endpoint. [`CephWrapper`] shapes the request path and query
//! string for each operation and hands it to a [`Transport`], which owns
//! the actual HTTP exchange. [`HttpTransport`] is the reqwest-backed
//! transport; any other implementation of the trait can be plugged in.
//!
//! ```rust,ignore
//! use ceph_client::{CephWrapper, HttpTransport};
//!
//! let transport = HttpTransport::builder()
//!     .base_url("http://mon1:5000/api/v0.1".to_string())
//!     .build()?;
//! let ceph = CephWrapper::new(transport);
//! let health = ceph.health(Some("detail")).await?;
//! ```

pub mod body;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod transport;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use body::{BodyType, DEFAULT_SUPPORTED_BODY_TYPES, ResponseBody};
pub use client::CephWrapper;
pub use endpoints::{Availability, Capabilities, Endpoint, Query};
pub use error::{ClientError, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use transport::builder::HttpTransportBuilder;
pub use transport::{CephResponse, HttpMethod, HttpTransport, RequestOptions, Transport};
