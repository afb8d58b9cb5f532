//! Configuration type definitions for the Ceph REST client.
//!
//! Responsibilities:
//! - Define the connection settings and the top-level `Config`.
//! - Provide serialization helpers for durations.
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Actual network connections (see client crate).

pub(crate) mod connection;

pub use connection::{Config, ConnectionConfig, default_user_agent};
