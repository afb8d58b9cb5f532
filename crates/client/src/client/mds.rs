//! Metadata server API methods for [`CephWrapper`].
//!
//! # What this module handles:
//! - MDS map queries (`mds_dump`, `mds_getmap`, `mds_stat`)
//! - Filesystem and rank administration (`mds_newfs`, `mds_fail`, `mds_stop`, ...)
//!
//! # What this module does NOT handle:
//! - Toggling `allow_new_snaps`; both methods fail with `NotImplemented`

use crate::client::CephWrapper;
use crate::endpoints::{Query, mds};
use crate::error::Result;
use crate::transport::{CephResponse, Transport};

impl<T: Transport> CephWrapper<T> {
    pub async fn mds_compat_show(&self) -> Result<CephResponse> {
        self.call(&mds::COMPAT_SHOW, None, Query::new()).await
    }

    /// Dump the MDS map, at `epoch` if given.
    pub async fn mds_dump(&self, epoch: Option<u64>) -> Result<CephResponse> {
        self.call(&mds::DUMP, None, Query::new().optional("epoch", epoch))
            .await
    }

    /// Fetch the encoded MDS map. The response body is binary.
    pub async fn mds_getmap(&self, epoch: Option<u64>) -> Result<CephResponse> {
        self.call(&mds::GETMAP, None, Query::new().optional("epoch", epoch))
            .await
    }

    pub async fn mds_stat(&self) -> Result<CephResponse> {
        self.call(&mds::STAT, None, Query::new()).await
    }

    /// Add a data pool to the filesystem, by name or id.
    pub async fn mds_add_data_pool(&self, pool: &str) -> Result<CephResponse> {
        self.call(&mds::ADD_DATA_POOL, None, Query::new().param("pool", pool))
            .await
    }

    pub async fn mds_cluster_down(&self) -> Result<CephResponse> {
        self.call(&mds::CLUSTER_DOWN, None, Query::new()).await
    }

    pub async fn mds_cluster_up(&self) -> Result<CephResponse> {
        self.call(&mds::CLUSTER_UP, None, Query::new()).await
    }

    pub async fn mds_compat_rm_compat(&self, feature: u32) -> Result<CephResponse> {
        self.call(
            &mds::COMPAT_RM_COMPAT,
            None,
            Query::new().param("feature", feature),
        )
        .await
    }

    pub async fn mds_compat_rm_incompat(&self, feature: u32) -> Result<CephResponse> {
        self.call(
            &mds::COMPAT_RM_INCOMPAT,
            None,
            Query::new().param("feature", feature),
        )
        .await
    }

    pub async fn mds_deactivate(&self, who: &str) -> Result<CephResponse> {
        self.call(&mds::DEACTIVATE, None, Query::new().param("who", who))
            .await
    }

    pub async fn mds_fail(&self, who: &str) -> Result<CephResponse> {
        self.call(&mds::FAIL, None, Query::new().param("who", who))
            .await
    }

    /// Create a new filesystem on the given metadata and data pool ids.
    ///
    /// `sure` must be `--yes-i-really-mean-it` for the cluster to accept it.
    pub async fn mds_newfs(&self, metadata: u32, data: u32, sure: &str) -> Result<CephResponse> {
        self.call(
            &mds::NEWFS,
            None,
            Query::new()
                .param("metadata", metadata)
                .param("data", data)
                .param("sure", sure),
        )
        .await
    }

    pub async fn mds_remove_data_pool(&self, pool: &str) -> Result<CephResponse> {
        self.call(&mds::REMOVE_DATA_POOL, None, Query::new().param("pool", pool))
            .await
    }

    /// Remove the MDS with global id `gid`.
    pub async fn mds_rm(&self, gid: u64, who: &str) -> Result<CephResponse> {
        self.call(
            &mds::RM,
            None,
            Query::new().param("gid", gid).param("who", who),
        )
        .await
    }

    pub async fn mds_rmfailed(&self, who: &str) -> Result<CephResponse> {
        self.call(&mds::RMFAILED, None, Query::new().param("who", who))
            .await
    }

    /// Always fails with [`crate::ClientError::NotImplemented`].
    pub async fn mds_set_allow_new_snaps(&self, _sure: &str) -> Result<CephResponse> {
        self.call(&mds::SET_ALLOW_NEW_SNAPS, None, Query::new())
            .await
    }

    pub async fn mds_set_max_mds(&self, maxmds: u32) -> Result<CephResponse> {
        self.call(&mds::SET_MAX_MDS, None, Query::new().param("maxmds", maxmds))
            .await
    }

    pub async fn mds_setmap(&self, epoch: u64) -> Result<CephResponse> {
        self.call(&mds::SETMAP, None, Query::new().param("epoch", epoch))
            .await
    }

    pub async fn mds_stop(&self, who: &str) -> Result<CephResponse> {
        self.call(&mds::STOP, None, Query::new().param("who", who))
            .await
    }

    pub async fn mds_tell(&self, who: &str, args: &str) -> Result<CephResponse> {
        self.call(
            &mds::TELL,
            None,
            Query::new().param("who", who).param("args", args),
        )
        .await
    }

    /// Always fails with [`crate::ClientError::NotImplemented`].
    pub async fn mds_unset_allow_new_snaps(&self, _sure: &str) -> Result<CephResponse> {
        self.call(&mds::UNSET_ALLOW_NEW_SNAPS, None, Query::new())
            .await
    }
}
