//! Per-daemon diagnostics scoped by a placement group or daemon id
//! (`tell/{id}/*`).

use super::Endpoint;

pub const DEBUG_DUMP_MISSING: Endpoint =
    Endpoint::get("tell_debug_dump_missing", "tell/{id}/debug_dump_missing")
        .params(&["filename"]);
pub const DUMP_PG_RECOVERY_STATS: Endpoint =
    Endpoint::get("tell_dump_pg_recovery_stats", "tell/{id}/dump_pg_recovery_stats");
pub const LIST_MISSING: Endpoint =
    Endpoint::get("tell_list_missing", "tell/{id}/list_missing").params(&["offset"]);
pub const QUERY: Endpoint = Endpoint::get("tell_query", "tell/{id}/query");
pub const VERSION: Endpoint = Endpoint::get("tell_version", "tell/{id}/version");

pub const ENDPOINTS: &[Endpoint] = &[
    DEBUG_DUMP_MISSING,
    DUMP_PG_RECOVERY_STATS,
    LIST_MISSING,
    QUERY,
    VERSION,
];
