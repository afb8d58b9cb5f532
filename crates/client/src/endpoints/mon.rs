//! Monitor operations (`mon/*`, `mon_status`).

use super::{BINARY_ONLY, Endpoint, TEXT_OR_XML};

pub const DUMP: Endpoint = Endpoint::get("mon_dump", "mon/dump").params(&["epoch"]);
pub const GETMAP: Endpoint = Endpoint::get("mon_getmap", "mon/getmap")
    .params(&["epoch"])
    .body_types(BINARY_ONLY);
pub const STAT: Endpoint = Endpoint::get("mon_stat", "mon/stat").body_types(TEXT_OR_XML);
pub const STATUS: Endpoint = Endpoint::get("mon_status", "mon_status");

pub const ADD: Endpoint = Endpoint::put("mon_add", "mon/add").params(&["name", "addr"]);
pub const REMOVE: Endpoint = Endpoint::put("mon_remove", "mon/remove").params(&["name"]);

pub const ENDPOINTS: &[Endpoint] = &[DUMP, GETMAP, STAT, STATUS, ADD, REMOVE];
