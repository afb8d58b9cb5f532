//! Metadata server operations (`mds/*`).

use super::{BINARY_ONLY, Endpoint};

pub const COMPAT_SHOW: Endpoint = Endpoint::get("mds_compat_show", "mds/compat/show");
pub const DUMP: Endpoint = Endpoint::get("mds_dump", "mds/dump").params(&["epoch"]);
pub const GETMAP: Endpoint = Endpoint::get("mds_getmap", "mds/getmap")
    .params(&["epoch"])
    .body_types(BINARY_ONLY);
pub const STAT: Endpoint = Endpoint::get("mds_stat", "mds/stat");

pub const ADD_DATA_POOL: Endpoint =
    Endpoint::put("mds_add_data_pool", "mds/add_data_pool").params(&["pool"]);
pub const CLUSTER_DOWN: Endpoint = Endpoint::put("mds_cluster_down", "mds/cluster_down");
pub const CLUSTER_UP: Endpoint = Endpoint::put("mds_cluster_up", "mds/cluster_up");
pub const COMPAT_RM_COMPAT: Endpoint =
    Endpoint::put("mds_compat_rm_compat", "mds/compat/rm_compat").params(&["feature"]);
pub const COMPAT_RM_INCOMPAT: Endpoint =
    Endpoint::put("mds_compat_rm_incompat", "mds/compat/rm_incompat").params(&["feature"]);
pub const DEACTIVATE: Endpoint = Endpoint::put("mds_deactivate", "mds/deactivate").params(&["who"]);
pub const FAIL: Endpoint = Endpoint::put("mds_fail", "mds/fail").params(&["who"]);
pub const NEWFS: Endpoint =
    Endpoint::put("mds_newfs", "mds/newfs").params(&["metadata", "data", "sure"]);
pub const REMOVE_DATA_POOL: Endpoint =
    Endpoint::put("mds_remove_data_pool", "mds/remove_data_pool").params(&["pool"]);
pub const RM: Endpoint = Endpoint::put("mds_rm", "mds/rm").params(&["gid", "who"]);
pub const RMFAILED: Endpoint = Endpoint::put("mds_rmfailed", "mds/rmfailed").params(&["who"]);
/// `mds/set?key=allow_new_snaps`, not supported.
pub const SET_ALLOW_NEW_SNAPS: Endpoint =
    Endpoint::put("mds_set_allow_new_snaps", "mds/set").not_implemented();
pub const SET_MAX_MDS: Endpoint =
    Endpoint::put("mds_set_max_mds", "mds/set_max_mds").params(&["maxmds"]);
pub const SETMAP: Endpoint = Endpoint::put("mds_setmap", "mds/setmap").params(&["epoch"]);
pub const STOP: Endpoint = Endpoint::put("mds_stop", "mds/stop").params(&["who"]);
pub const TELL: Endpoint = Endpoint::put("mds_tell", "mds/tell").params(&["who", "args"]);
/// `mds/unset?key=allow_new_snaps`, not supported.
pub const UNSET_ALLOW_NEW_SNAPS: Endpoint =
    Endpoint::put("mds_unset_allow_new_snaps", "mds/unset").not_implemented();

pub const ENDPOINTS: &[Endpoint] = &[
    COMPAT_SHOW,
    DUMP,
    GETMAP,
    STAT,
    ADD_DATA_POOL,
    CLUSTER_DOWN,
    CLUSTER_UP,
    COMPAT_RM_COMPAT,
    COMPAT_RM_INCOMPAT,
    DEACTIVATE,
    FAIL,
    NEWFS,
    REMOVE_DATA_POOL,
    RM,
    RMFAILED,
    SET_ALLOW_NEW_SNAPS,
    SET_MAX_MDS,
    SETMAP,
    STOP,
    TELL,
    UNSET_ALLOW_NEW_SNAPS,
];
