//! Authentication entity and capability management (`auth/*`).

use super::Endpoint;

pub const EXPORT: Endpoint = Endpoint::get("auth_export", "auth/export").params(&["entity"]);
pub const GET: Endpoint = Endpoint::get("auth_get", "auth/get").params(&["entity"]);
pub const GET_KEY: Endpoint = Endpoint::get("auth_get_key", "auth/get-key").params(&["entity"]);
pub const LIST: Endpoint = Endpoint::get("auth_list", "auth/list");
pub const PRINT_KEY: Endpoint =
    Endpoint::get("auth_print_key", "auth/print-key").params(&["entity"]);

pub const ADD: Endpoint = Endpoint::put("auth_add", "auth/add").params(&["entity", "caps"]);
pub const CAPS: Endpoint = Endpoint::put("auth_caps", "auth/caps").params(&["entity", "caps"]);
pub const DEL: Endpoint = Endpoint::put("auth_del", "auth/del").params(&["entity"]);
pub const GET_OR_CREATE: Endpoint =
    Endpoint::put("auth_get_or_create", "auth/get-or-create").params(&["entity", "caps"]);
pub const GET_OR_CREATE_KEY: Endpoint =
    Endpoint::put("auth_get_or_create_key", "auth/get-or-create-key")
        .params(&["entity", "caps"]);
/// Importing a keyring file is not supported.
pub const IMPORT: Endpoint = Endpoint::put("auth_import", "auth/import").not_implemented();

pub const ENDPOINTS: &[Endpoint] = &[
    EXPORT,
    GET,
    GET_KEY,
    LIST,
    PRINT_KEY,
    ADD,
    CAPS,
    DEL,
    GET_OR_CREATE,
    GET_OR_CREATE_KEY,
    IMPORT,
];
