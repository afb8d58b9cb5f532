//! Centralized constants for the Ceph REST client workspace.
//!
//! Default values used across crates, kept in one place to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default Ceph REST API endpoint (the `ceph-rest-api` listener and API prefix).
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/v0.1";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// User agent prefix sent with every request; the crate version is appended.
pub const USER_AGENT_PREFIX: &str = "ceph-client-wrapper";

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable holding the REST endpoint URL.
pub const ENV_ENDPOINT: &str = "CEPH_REST_ENDPOINT";

/// Environment variable holding the request timeout in seconds.
pub const ENV_TIMEOUT: &str = "CEPH_REST_TIMEOUT";

/// Environment variable toggling TLS certificate verification.
pub const ENV_SKIP_VERIFY: &str = "CEPH_REST_SKIP_VERIFY";

/// Environment variable overriding the user agent.
pub const ENV_USER_AGENT: &str = "CEPH_REST_USER_AGENT";

/// Environment variable that disables `.env` loading when set to `1` or `true`.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
