//! Configuration management for the Ceph REST client.
//!
//! This crate provides types and loaders for the connection settings of a
//! Ceph REST management endpoint, read from environment variables, `.env`
//! files and builder calls.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{Config, ConnectionConfig};
