//! Object storage daemon API methods for [`CephWrapper`].

use crate::client::CephWrapper;
use crate::endpoints::{Query, osd};
use crate::error::Result;
use crate::transport::{CephResponse, Transport};

impl<T: Transport> CephWrapper<T> {
    pub async fn osd_blacklist_ls(&self) -> Result<CephResponse> {
        self.call(&osd::BLACKLIST_LS, None, Query::new()).await
    }

    pub async fn osd_crush_dump(&self) -> Result<CephResponse> {
        self.call(&osd::CRUSH_DUMP, None, Query::new()).await
    }

    pub async fn osd_crush_rule_dump(&self) -> Result<CephResponse> {
        self.call(&osd::CRUSH_RULE_DUMP, None, Query::new()).await
    }

    pub async fn osd_crush_rule_list(&self) -> Result<CephResponse> {
        self.call(&osd::CRUSH_RULE_LIST, None, Query::new()).await
    }

    pub async fn osd_crush_rule_ls(&self) -> Result<CephResponse> {
        self.call(&osd::CRUSH_RULE_LS, None, Query::new()).await
    }

    /// Dump the OSD map, at `epoch` if given.
    pub async fn osd_dump(&self, epoch: Option<u64>) -> Result<CephResponse> {
        self.call(&osd::DUMP, None, Query::new().optional("epoch", epoch))
            .await
    }

    /// Locate OSD `id` in the CRUSH hierarchy.
    pub async fn osd_find(&self, id: u32) -> Result<CephResponse> {
        self.call(&osd::FIND, None, Query::new().param("id", id))
            .await
    }

    /// Fetch the compiled CRUSH map. The response body is binary.
    pub async fn osd_getcrushmap(&self, epoch: Option<u64>) -> Result<CephResponse> {
        self.call(&osd::GETCRUSHMAP, None, Query::new().optional("epoch", epoch))
            .await
    }

    /// Fetch the encoded OSD map. The response body is binary.
    pub async fn osd_getmap(&self, epoch: Option<u64>) -> Result<CephResponse> {
        self.call(&osd::GETMAP, None, Query::new().optional("epoch", epoch))
            .await
    }

    pub async fn osd_getmaxosd(&self) -> Result<CephResponse> {
        self.call(&osd::GETMAXOSD, None, Query::new()).await
    }

    pub async fn osd_ls(&self, epoch: Option<u64>) -> Result<CephResponse> {
        self.call(&osd::LS, None, Query::new().optional("epoch", epoch))
            .await
    }

    /// List pools, restricted to owner `auid` if given.
    pub async fn osd_lspools(&self, auid: Option<u64>) -> Result<CephResponse> {
        self.call(&osd::LSPOOLS, None, Query::new().optional("auid", auid))
            .await
    }

    /// Map `object` in `pool` to its placement group and acting set.
    pub async fn osd_map(&self, pool: &str, object: &str) -> Result<CephResponse> {
        self.call(
            &osd::MAP,
            None,
            Query::new().param("pool", pool).param("object", object),
        )
        .await
    }

    pub async fn osd_perf(&self) -> Result<CephResponse> {
        self.call(&osd::PERF, None, Query::new()).await
    }

    /// Read pool setting `var` (e.g. `size`, `pg_num`).
    pub async fn osd_pool_get(&self, pool: &str, var: &str) -> Result<CephResponse> {
        self.call(
            &osd::POOL_GET,
            None,
            Query::new().param("pool", pool).param("var", var),
        )
        .await
    }

    pub async fn osd_pool_stats(&self, name: Option<&str>) -> Result<CephResponse> {
        self.call(&osd::POOL_STATS, None, Query::new().optional("name", name))
            .await
    }

    pub async fn osd_stat(&self) -> Result<CephResponse> {
        self.call(&osd::STAT, None, Query::new()).await
    }

    pub async fn osd_tree(&self, epoch: Option<u64>) -> Result<CephResponse> {
        self.call(&osd::TREE, None, Query::new().optional("epoch", epoch))
            .await
    }
}
