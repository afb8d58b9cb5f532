//! Object storage daemon queries (`osd/*`).

use super::{BINARY_ONLY, Endpoint};

pub const BLACKLIST_LS: Endpoint = Endpoint::get("osd_blacklist_ls", "osd/blacklist/ls");
pub const CRUSH_DUMP: Endpoint = Endpoint::get("osd_crush_dump", "osd/crush/dump");
pub const CRUSH_RULE_DUMP: Endpoint = Endpoint::get("osd_crush_rule_dump", "osd/crush/rule/dump");
pub const CRUSH_RULE_LIST: Endpoint = Endpoint::get("osd_crush_rule_list", "osd/crush/rule/list");
pub const CRUSH_RULE_LS: Endpoint = Endpoint::get("osd_crush_rule_ls", "osd/crush/rule/ls");
pub const DUMP: Endpoint = Endpoint::get("osd_dump", "osd/dump").params(&["epoch"]);
pub const FIND: Endpoint = Endpoint::get("osd_find", "osd/find").params(&["id"]);
pub const GETCRUSHMAP: Endpoint = Endpoint::get("osd_getcrushmap", "osd/getcrushmap")
    .params(&["epoch"])
    .body_types(BINARY_ONLY);
pub const GETMAP: Endpoint = Endpoint::get("osd_getmap", "osd/getmap")
    .params(&["epoch"])
    .body_types(BINARY_ONLY);
pub const GETMAXOSD: Endpoint = Endpoint::get("osd_getmaxosd", "osd/getmaxosd");
pub const LS: Endpoint = Endpoint::get("osd_ls", "osd/ls").params(&["epoch"]);
pub const LSPOOLS: Endpoint = Endpoint::get("osd_lspools", "osd/lspools").params(&["auid"]);
pub const MAP: Endpoint = Endpoint::get("osd_map", "osd/map").params(&["pool", "object"]);
pub const PERF: Endpoint = Endpoint::get("osd_perf", "osd/perf");
pub const POOL_GET: Endpoint = Endpoint::get("osd_pool_get", "osd/pool/get").params(&["pool", "var"]);
pub const POOL_STATS: Endpoint = Endpoint::get("osd_pool_stats", "osd/pool/stats").params(&["name"]);
pub const STAT: Endpoint = Endpoint::get("osd_stat", "osd/stat");
pub const TREE: Endpoint = Endpoint::get("osd_tree", "osd/tree").params(&["epoch"]);

pub const ENDPOINTS: &[Endpoint] = &[
    BLACKLIST_LS,
    CRUSH_DUMP,
    CRUSH_RULE_DUMP,
    CRUSH_RULE_LIST,
    CRUSH_RULE_LS,
    DUMP,
    FIND,
    GETCRUSHMAP,
    GETMAP,
    GETMAXOSD,
    LS,
    LSPOOLS,
    MAP,
    PERF,
    POOL_GET,
    POOL_STATS,
    STAT,
    TREE,
];
