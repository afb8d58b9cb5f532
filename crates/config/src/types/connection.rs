//! Connection configuration types for the Ceph REST client.
//!
//! Responsibilities:
//! - Define connection settings (endpoint URL, TLS verification, timeout, user agent).
//! - Define the main `Config` structure.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from env/dotenv (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - `Config::default()` targets a local `ceph-rest-api` listener.

use crate::constants::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, USER_AGENT_PREFIX};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for a Ceph REST endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Endpoint URL including the API prefix (e.g., http://mon1:5000/api/v0.1)
    pub endpoint: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    #[serde(default)]
    pub skip_verify: bool,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Default user agent: `ceph-client-wrapper/<version>`.
pub fn default_user_agent() -> String {
    format!("{}/{}", USER_AGENT_PREFIX, env!("CARGO_PKG_VERSION"))
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
}

impl Config {
    /// Create a new config pointing at the given endpoint, other settings default.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            connection: ConnectionConfig {
                endpoint: endpoint.into(),
                ..ConnectionConfig::default()
            },
        }
    }
}
