//! Monitor API methods for [`CephWrapper`].

use crate::client::CephWrapper;
use crate::endpoints::{Query, mon};
use crate::error::Result;
use crate::transport::{CephResponse, Transport};

impl<T: Transport> CephWrapper<T> {
    /// Dump the monitor map, at `epoch` if given.
    pub async fn mon_dump(&self, epoch: Option<u64>) -> Result<CephResponse> {
        self.call(&mon::DUMP, None, Query::new().optional("epoch", epoch))
            .await
    }

    /// Fetch the encoded monitor map. The response body is binary.
    pub async fn mon_getmap(&self, epoch: Option<u64>) -> Result<CephResponse> {
        self.call(&mon::GETMAP, None, Query::new().optional("epoch", epoch))
            .await
    }

    /// One-line monitor summary, served as text or XML only.
    pub async fn mon_stat(&self) -> Result<CephResponse> {
        self.call(&mon::STAT, None, Query::new()).await
    }

    pub async fn mon_status(&self) -> Result<CephResponse> {
        self.call(&mon::STATUS, None, Query::new()).await
    }

    /// Add a monitor `name` listening on `addr` (`ip:port`).
    pub async fn mon_add(&self, name: &str, addr: &str) -> Result<CephResponse> {
        self.call(
            &mon::ADD,
            None,
            Query::new().param("name", name).param("addr", addr),
        )
        .await
    }

    pub async fn mon_remove(&self, name: &str) -> Result<CephResponse> {
        self.call(&mon::REMOVE, None, Query::new().param("name", name))
            .await
    }
}
