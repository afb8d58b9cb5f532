//! Placement group API methods for [`CephWrapper`].

use crate::client::CephWrapper;
use crate::endpoints::{Query, pg};
use crate::error::Result;
use crate::transport::{CephResponse, Transport};

impl<T: Transport> CephWrapper<T> {
    /// Placement group debug query, served as text or XML only.
    pub async fn pg_debug(&self, debugop: &str) -> Result<CephResponse> {
        self.call(&pg::DEBUG, None, Query::new().param("debugop", debugop))
            .await
    }

    pub async fn pg_dump(&self, dumpcontents: Option<&str>) -> Result<CephResponse> {
        self.call(
            &pg::DUMP,
            None,
            Query::new().optional("dumpcontents", dumpcontents),
        )
        .await
    }

    pub async fn pg_dump_json(&self, dumpcontents: Option<&str>) -> Result<CephResponse> {
        self.call(
            &pg::DUMP_JSON,
            None,
            Query::new().optional("dumpcontents", dumpcontents),
        )
        .await
    }

    pub async fn pg_dump_pools_json(&self) -> Result<CephResponse> {
        self.call(&pg::DUMP_POOLS_JSON, None, Query::new()).await
    }

    /// Placement groups stuck in `stuckops` (`inactive`, `unclean`, `stale`).
    pub async fn pg_dump_stuck(&self, stuckops: Option<&str>) -> Result<CephResponse> {
        self.call(
            &pg::DUMP_STUCK,
            None,
            Query::new().optional("stuckops", stuckops),
        )
        .await
    }

    /// Fetch the encoded placement group map. The response body is binary.
    pub async fn pg_getmap(&self) -> Result<CephResponse> {
        self.call(&pg::GETMAP, None, Query::new()).await
    }

    pub async fn pg_map(&self, pgid: &str) -> Result<CephResponse> {
        self.call(&pg::MAP, None, Query::new().param("pgid", pgid))
            .await
    }

    pub async fn pg_stat(&self) -> Result<CephResponse> {
        self.call(&pg::STAT, None, Query::new()).await
    }
}
