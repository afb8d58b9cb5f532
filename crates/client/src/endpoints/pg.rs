//! Placement group queries (`pg/*`).

use super::{BINARY_ONLY, Endpoint, TEXT_OR_XML};

pub const DEBUG: Endpoint = Endpoint::get("pg_debug", "pg/debug")
    .params(&["debugop"])
    .body_types(TEXT_OR_XML);
pub const DUMP: Endpoint = Endpoint::get("pg_dump", "pg/dump").params(&["dumpcontents"]);
pub const DUMP_JSON: Endpoint =
    Endpoint::get("pg_dump_json", "pg/dump_json").params(&["dumpcontents"]);
pub const DUMP_POOLS_JSON: Endpoint = Endpoint::get("pg_dump_pools_json", "pg/dump_pools_json");
pub const DUMP_STUCK: Endpoint =
    Endpoint::get("pg_dump_stuck", "pg/dump_stuck").params(&["stuckops"]);
pub const GETMAP: Endpoint = Endpoint::get("pg_getmap", "pg/getmap").body_types(BINARY_ONLY);
pub const MAP: Endpoint = Endpoint::get("pg_map", "pg/map").params(&["pgid"]);
pub const STAT: Endpoint = Endpoint::get("pg_stat", "pg/stat");

pub const ENDPOINTS: &[Endpoint] = &[
    DEBUG,
    DUMP,
    DUMP_JSON,
    DUMP_POOLS_JSON,
    DUMP_STUCK,
    GETMAP,
    MAP,
    STAT,
];
