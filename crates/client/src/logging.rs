//! Tracing subscriber initialization for applications embedding the client.
//!
//! ```rust,ignore
//! use ceph_client::logging::LoggingConfig;
//!
//! LoggingConfig::new().with_json(true).init()?;
//! ```
//!
//! `RUST_LOG` takes precedence over the configured default filter.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for the global tracing subscriber.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset (e.g. "info", "ceph_client=debug")
    pub default_filter: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
    /// Include the event target (module path) in each line
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_filter: "info".to_string(),
            json: false,
            with_target: true,
        }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the fallback filter directive.
    pub fn with_default_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = filter.into();
        self
    }

    /// Builder method to switch to JSON output.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Builder method to control target output.
    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }

    fn env_filter(&self) -> Result<EnvFilter, LoggingError> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.default_filter)
                .map_err(|e| LoggingError::InvalidFilter(e.to_string())),
        }
    }

    /// Install the global subscriber.
    ///
    /// # Errors
    /// Returns an error if the filter directive is invalid or a global
    /// subscriber is already installed.
    pub fn init(&self) -> Result<(), LoggingError> {
        use tracing_subscriber::fmt;

        let env_filter = self.env_filter()?;

        let result = if self.json {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_target(self.with_target))
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_target(self.with_target))
                .try_init()
        };

        result.map_err(|e| LoggingError::InitError(e.to_string()))
    }
}

/// Errors that can occur during logging initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("Failed to initialize tracing subscriber: {0}")]
    InitError(String),
}
