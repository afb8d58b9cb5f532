//! Cluster-wide operations served at the API root.

use super::Endpoint;

pub const DF: Endpoint = Endpoint::get("df", "df").params(&["detail"]);
pub const FSID: Endpoint = Endpoint::get("fsid", "fsid");
pub const HEALTH: Endpoint = Endpoint::get("health", "health").params(&["detail"]);
pub const QUORUM_STATUS: Endpoint = Endpoint::get("quorum_status", "quorum_status");
pub const REPORT: Endpoint = Endpoint::get("report", "report").params(&["tags"]);
pub const STATUS: Endpoint = Endpoint::get("status", "status");

pub const COMPACT: Endpoint = Endpoint::put("compact", "compact");
pub const HEAP: Endpoint = Endpoint::put("heap", "heap").params(&["heapcmd"]);
pub const INJECTARGS: Endpoint =
    Endpoint::put("injectargs", "injectargs").params(&["injected_args"]);
pub const LOG: Endpoint = Endpoint::put("log", "log").params(&["logtext"]);
pub const QUORUM: Endpoint = Endpoint::put("quorum", "quorum").params(&["quorumcmd"]);
pub const SCRUB: Endpoint = Endpoint::put("scrub", "scrub");
pub const TELL: Endpoint = Endpoint::put("tell", "tell").params(&["target", "args"]);

pub const ENDPOINTS: &[Endpoint] = &[
    DF,
    FSID,
    HEALTH,
    QUORUM_STATUS,
    REPORT,
    STATUS,
    COMPACT,
    HEAP,
    INJECTARGS,
    LOG,
    QUORUM,
    SCRUB,
    TELL,
];
