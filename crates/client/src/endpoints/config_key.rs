//! Monitor key/value store (`config-key/*`).

use super::Endpoint;

pub const EXISTS: Endpoint =
    Endpoint::get("config_key_exists", "config-key/exists").params(&["key"]);
pub const GET: Endpoint = Endpoint::get("config_key_get", "config-key/get").params(&["key"]);
pub const LIST: Endpoint = Endpoint::get("config_key_list", "config-key/list");

pub const ENDPOINTS: &[Endpoint] = &[EXISTS, GET, LIST];
