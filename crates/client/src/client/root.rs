//! Cluster-wide API methods for [`CephWrapper`].
//!
//! # What this module handles:
//! - Cluster status queries (`df`, `health`, `status`, ...)
//! - Monitor-wide admin commands (`compact`, `heap`, `injectargs`, ...)

use crate::client::CephWrapper;
use crate::endpoints::{Query, root};
use crate::error::Result;
use crate::transport::{CephResponse, Transport};

impl<T: Transport> CephWrapper<T> {
    /// Cluster free space, optionally with per-pool `detail`.
    pub async fn df(&self, detail: Option<&str>) -> Result<CephResponse> {
        self.call(&root::DF, None, Query::new().optional("detail", detail))
            .await
    }

    pub async fn fsid(&self) -> Result<CephResponse> {
        self.call(&root::FSID, None, Query::new()).await
    }

    /// Cluster health, optionally with `detail`.
    pub async fn health(&self, detail: Option<&str>) -> Result<CephResponse> {
        self.call(&root::HEALTH, None, Query::new().optional("detail", detail))
            .await
    }

    pub async fn quorum_status(&self) -> Result<CephResponse> {
        self.call(&root::QUORUM_STATUS, None, Query::new()).await
    }

    /// Full cluster report, optionally annotated with `tags`.
    pub async fn report(&self, tags: Option<&str>) -> Result<CephResponse> {
        self.call(&root::REPORT, None, Query::new().optional("tags", tags))
            .await
    }

    pub async fn status(&self) -> Result<CephResponse> {
        self.call(&root::STATUS, None, Query::new()).await
    }

    /// Compact the monitor data store.
    pub async fn compact(&self) -> Result<CephResponse> {
        self.call(&root::COMPACT, None, Query::new()).await
    }

    /// Run a heap profiler command (`dump`, `start_profiler`, `stats`, ...).
    pub async fn heap(&self, heapcmd: &str) -> Result<CephResponse> {
        self.call(&root::HEAP, None, Query::new().param("heapcmd", heapcmd))
            .await
    }

    /// Inject configuration arguments into the monitor.
    pub async fn injectargs(&self, injected_args: &str) -> Result<CephResponse> {
        self.call(
            &root::INJECTARGS,
            None,
            Query::new().param("injected_args", injected_args),
        )
        .await
    }

    /// Write `logtext` to the cluster log.
    pub async fn log(&self, logtext: &str) -> Result<CephResponse> {
        self.call(&root::LOG, None, Query::new().param("logtext", logtext))
            .await
    }

    /// Enter or exit the quorum (`enter` / `exit`).
    pub async fn quorum(&self, quorumcmd: &str) -> Result<CephResponse> {
        self.call(&root::QUORUM, None, Query::new().param("quorumcmd", quorumcmd))
            .await
    }

    pub async fn scrub(&self) -> Result<CephResponse> {
        self.call(&root::SCRUB, None, Query::new()).await
    }

    /// Send `args` to the daemon named by `target` (e.g. `osd.0`).
    pub async fn tell(&self, target: &str, args: &str) -> Result<CephResponse> {
        self.call(
            &root::TELL,
            None,
            Query::new().param("target", target).param("args", args),
        )
        .await
    }
}
