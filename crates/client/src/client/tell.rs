//! Per-daemon diagnostic API methods for [`CephWrapper`].
//!
//! `id` is interpolated into the path (`tell/<id>/...`), not the query.

use crate::client::CephWrapper;
use crate::endpoints::{Query, tell};
use crate::error::Result;
use crate::transport::{CephResponse, Transport};

impl<T: Transport> CephWrapper<T> {
    /// Dump missing objects of placement group `id` to `filename` on the daemon host.
    pub async fn tell_debug_dump_missing(&self, id: &str, filename: &str) -> Result<CephResponse> {
        self.call(
            &tell::DEBUG_DUMP_MISSING,
            Some(id),
            Query::new().param("filename", filename),
        )
        .await
    }

    pub async fn tell_dump_pg_recovery_stats(&self, id: &str) -> Result<CephResponse> {
        self.call(&tell::DUMP_PG_RECOVERY_STATS, Some(id), Query::new())
            .await
    }

    /// List missing objects of placement group `id`, starting after `offset`.
    pub async fn tell_list_missing(&self, id: &str, offset: &str) -> Result<CephResponse> {
        self.call(
            &tell::LIST_MISSING,
            Some(id),
            Query::new().param("offset", offset),
        )
        .await
    }

    pub async fn tell_query(&self, id: &str) -> Result<CephResponse> {
        self.call(&tell::QUERY, Some(id), Query::new()).await
    }

    pub async fn tell_version(&self, id: &str) -> Result<CephResponse> {
        self.call(&tell::VERSION, Some(id), Query::new()).await
    }
}
