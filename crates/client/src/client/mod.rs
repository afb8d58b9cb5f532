//! The method-per-endpoint wrapper over a [`Transport`].
//!
//! [`CephWrapper`] exposes one async method per Ceph REST operation. Each
//! method builds a [`Query`] from its typed arguments and hands the
//! matching [`Endpoint`] descriptor to [`CephWrapper::call`], which is the
//! only place a transport is invoked.
//!
//! # Submodules
//! - `root`: cluster-wide status and admin commands
//! - `auth`: entity and capability management
//! - `config_key`: monitor key/value store
//! - `mds`, `mon`, `osd`, `pg`: per-subsystem operations
//! - `tell`: per-daemon diagnostics
//!
//! # What this module does NOT handle:
//! - HTTP, content negotiation and error mapping (see [`crate::transport`])
//! - Retries, caching or any interpretation of the response
//!
//! # Invariants
//! - Exactly one transport call per implemented operation
//! - Operations flagged `NotImplemented` fail before touching the transport
//! - Transport errors are returned unchanged

mod auth;
mod config_key;
mod mds;
mod mon;
mod osd;
mod pg;
mod root;
mod tell;

use std::sync::Arc;

use ceph_config::Config;
use tracing::{debug, warn};

use crate::endpoints::{Availability, Endpoint, Query};
use crate::error::{ClientError, Result};
use crate::transport::{CephResponse, HttpMethod, HttpTransport, RequestOptions, Transport};

/// Ceph REST management API wrapper.
///
/// Cloning is cheap; clones share the transport.
///
/// ```rust,ignore
/// use ceph_client::{CephWrapper, Capabilities, HttpTransport};
///
/// let ceph = CephWrapper::new(HttpTransport::builder()
///     .base_url("http://mon1:5000/api/v0.1".to_string())
///     .build()?);
///
/// let tree = ceph.osd_tree(None).await?;
/// let caps = Capabilities::new().with("mon", "allow r").with("osd", "allow rw pool=rbd");
/// ceph.auth_get_or_create("client.rbd", &caps).await?;
/// ```
#[derive(Debug)]
pub struct CephWrapper<T> {
    transport: Arc<T>,
    options: RequestOptions,
}

impl<T> Clone for CephWrapper<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            options: self.options.clone(),
        }
    }
}

impl<T: Transport> CephWrapper<T> {
    /// Wrap a transport.
    pub fn new(transport: T) -> Self {
        Self::from_shared(Arc::new(transport))
    }

    /// Wrap a transport that is already shared.
    pub fn from_shared(transport: Arc<T>) -> Self {
        Self {
            transport,
            options: RequestOptions::default(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// A wrapper sharing this transport whose calls carry `options`.
    ///
    /// Endpoints with a body-type override still replace
    /// `supported_body_types`.
    pub fn with_request_options(&self, options: RequestOptions) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            options,
        }
    }

    pub fn request_options(&self) -> &RequestOptions {
        &self.options
    }

    /// Dispatch one operation.
    ///
    /// `target` fills the daemon id of `tell/{id}/...` templates and is
    /// ignored elsewhere. `query` must follow the descriptor's `params`;
    /// anything else is rejected with `InvalidRequest` before dispatch.
    pub async fn call(
        &self,
        endpoint: &Endpoint,
        target: Option<&str>,
        query: Query,
    ) -> Result<CephResponse> {
        if endpoint.availability == Availability::NotImplemented {
            warn!(operation = endpoint.name, "Operation is not implemented");
            return Err(ClientError::NotImplemented {
                operation: endpoint.name,
            });
        }

        let path = endpoint.render_path(target, &query)?;
        let options = endpoint.apply_body_override(self.options.clone());

        debug!(
            operation = endpoint.name,
            method = %endpoint.method,
            path = %path,
            "Dispatching operation"
        );

        match endpoint.method {
            HttpMethod::Get => self.transport.get(&path, options).await,
            HttpMethod::Put => self.transport.put(&path, options).await,
        }
    }
}

impl CephWrapper<HttpTransport> {
    /// Build an HTTP-backed wrapper from a loaded [`Config`].
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = HttpTransport::builder().from_config(config).build()?;
        Ok(Self::new(transport))
    }
}
