//! Exhaustive checks of the endpoint table.
//!
//! Every operation is listed here with its verb, path template and body
//! type override, and compared against `endpoints::ALL`.

use ceph_client::endpoints::{self, Availability, Query};
use ceph_client::testing::RecordingTransport;
use ceph_client::{BodyType, Capabilities, CephWrapper, HttpMethod};

const BINARY: &[BodyType] = &[BodyType::Binary];
const TEXT_XML: &[BodyType] = &[BodyType::Text, BodyType::Xml];

type Row = (&'static str, HttpMethod, &'static str, Option<&'static [BodyType]>);

const EXPECTED: &[Row] = &[
    ("df", HttpMethod::Get, "df", None),
    ("fsid", HttpMethod::Get, "fsid", None),
    ("health", HttpMethod::Get, "health", None),
    ("quorum_status", HttpMethod::Get, "quorum_status", None),
    ("report", HttpMethod::Get, "report", None),
    ("status", HttpMethod::Get, "status", None),
    ("compact", HttpMethod::Put, "compact", None),
    ("heap", HttpMethod::Put, "heap", None),
    ("injectargs", HttpMethod::Put, "injectargs", None),
    ("log", HttpMethod::Put, "log", None),
    ("quorum", HttpMethod::Put, "quorum", None),
    ("scrub", HttpMethod::Put, "scrub", None),
    ("tell", HttpMethod::Put, "tell", None),
    ("auth_export", HttpMethod::Get, "auth/export", None),
    ("auth_get", HttpMethod::Get, "auth/get", None),
    ("auth_get_key", HttpMethod::Get, "auth/get-key", None),
    ("auth_list", HttpMethod::Get, "auth/list", None),
    ("auth_print_key", HttpMethod::Get, "auth/print-key", None),
    ("auth_add", HttpMethod::Put, "auth/add", None),
    ("auth_caps", HttpMethod::Put, "auth/caps", None),
    ("auth_del", HttpMethod::Put, "auth/del", None),
    ("auth_get_or_create", HttpMethod::Put, "auth/get-or-create", None),
    ("auth_get_or_create_key", HttpMethod::Put, "auth/get-or-create-key", None),
    ("auth_import", HttpMethod::Put, "auth/import", None),
    ("config_key_exists", HttpMethod::Get, "config-key/exists", None),
    ("config_key_get", HttpMethod::Get, "config-key/get", None),
    ("config_key_list", HttpMethod::Get, "config-key/list", None),
    ("mds_compat_show", HttpMethod::Get, "mds/compat/show", None),
    ("mds_dump", HttpMethod::Get, "mds/dump", None),
    ("mds_getmap", HttpMethod::Get, "mds/getmap", Some(BINARY)),
    ("mds_stat", HttpMethod::Get, "mds/stat", None),
    ("mds_add_data_pool", HttpMethod::Put, "mds/add_data_pool", None),
    ("mds_cluster_down", HttpMethod::Put, "mds/cluster_down", None),
    ("mds_cluster_up", HttpMethod::Put, "mds/cluster_up", None),
    ("mds_compat_rm_compat", HttpMethod::Put, "mds/compat/rm_compat", None),
    ("mds_compat_rm_incompat", HttpMethod::Put, "mds/compat/rm_incompat", None),
    ("mds_deactivate", HttpMethod::Put, "mds/deactivate", None),
    ("mds_fail", HttpMethod::Put, "mds/fail", None),
    ("mds_newfs", HttpMethod::Put, "mds/newfs", None),
    ("mds_remove_data_pool", HttpMethod::Put, "mds/remove_data_pool", None),
    ("mds_rm", HttpMethod::Put, "mds/rm", None),
    ("mds_rmfailed", HttpMethod::Put, "mds/rmfailed", None),
    ("mds_set_allow_new_snaps", HttpMethod::Put, "mds/set", None),
    ("mds_set_max_mds", HttpMethod::Put, "mds/set_max_mds", None),
    ("mds_setmap", HttpMethod::Put, "mds/setmap", None),
    ("mds_stop", HttpMethod::Put, "mds/stop", None),
    ("mds_tell", HttpMethod::Put, "mds/tell", None),
    ("mds_unset_allow_new_snaps", HttpMethod::Put, "mds/unset", None),
    ("mon_dump", HttpMethod::Get, "mon/dump", None),
    ("mon_getmap", HttpMethod::Get, "mon/getmap", Some(BINARY)),
    ("mon_stat", HttpMethod::Get, "mon/stat", Some(TEXT_XML)),
    ("mon_status", HttpMethod::Get, "mon_status", None),
    ("mon_add", HttpMethod::Put, "mon/add", None),
    ("mon_remove", HttpMethod::Put, "mon/remove", None),
    ("osd_blacklist_ls", HttpMethod::Get, "osd/blacklist/ls", None),
    ("osd_crush_dump", HttpMethod::Get, "osd/crush/dump", None),
    ("osd_crush_rule_dump", HttpMethod::Get, "osd/crush/rule/dump", None),
    ("osd_crush_rule_list", HttpMethod::Get, "osd/crush/rule/list", None),
    ("osd_crush_rule_ls", HttpMethod::Get, "osd/crush/rule/ls", None),
    ("osd_dump", HttpMethod::Get, "osd/dump", None),
    ("osd_find", HttpMethod::Get, "osd/find", None),
    ("osd_getcrushmap", HttpMethod::Get, "osd/getcrushmap", Some(BINARY)),
    ("osd_getmap", HttpMethod::Get, "osd/getmap", Some(BINARY)),
    ("osd_getmaxosd", HttpMethod::Get, "osd/getmaxosd", None),
    ("osd_ls", HttpMethod::Get, "osd/ls", None),
    ("osd_lspools", HttpMethod::Get, "osd/lspools", None),
    ("osd_map", HttpMethod::Get, "osd/map", None),
    ("osd_perf", HttpMethod::Get, "osd/perf", None),
    ("osd_pool_get", HttpMethod::Get, "osd/pool/get", None),
    ("osd_pool_stats", HttpMethod::Get, "osd/pool/stats", None),
    ("osd_stat", HttpMethod::Get, "osd/stat", None),
    ("osd_tree", HttpMethod::Get, "osd/tree", None),
    ("pg_debug", HttpMethod::Get, "pg/debug", Some(TEXT_XML)),
    ("pg_dump", HttpMethod::Get, "pg/dump", None),
    ("pg_dump_json", HttpMethod::Get, "pg/dump_json", None),
    ("pg_dump_pools_json", HttpMethod::Get, "pg/dump_pools_json", None),
    ("pg_dump_stuck", HttpMethod::Get, "pg/dump_stuck", None),
    ("pg_getmap", HttpMethod::Get, "pg/getmap", Some(BINARY)),
    ("pg_map", HttpMethod::Get, "pg/map", None),
    ("pg_stat", HttpMethod::Get, "pg/stat", None),
    ("tell_debug_dump_missing", HttpMethod::Get, "tell/{id}/debug_dump_missing", None),
    ("tell_dump_pg_recovery_stats", HttpMethod::Get, "tell/{id}/dump_pg_recovery_stats", None),
    ("tell_list_missing", HttpMethod::Get, "tell/{id}/list_missing", None),
    ("tell_query", HttpMethod::Get, "tell/{id}/query", None),
    ("tell_version", HttpMethod::Get, "tell/{id}/version", None),];

#[test]
fn test_table_matches_expected_rows() {
    let actual: Vec<_> = endpoints::all().collect();
    assert_eq!(actual.len(), EXPECTED.len());

    for (endpoint, (name, method, path, body_types)) in actual.iter().zip(EXPECTED) {
        assert_eq!(endpoint.name, *name);
        assert_eq!(endpoint.method, *method, "verb of {}", name);
        assert_eq!(endpoint.path, *path, "path of {}", name);
        assert_eq!(endpoint.body_types, *body_types, "body types of {}", name);
    }
}

#[test]
fn test_every_operation_is_found_by_name() {
    for (name, method, _, _) in EXPECTED {
        let endpoint = endpoints::lookup(name).unwrap_or_else(|| panic!("missing {}", name));
        assert_eq!(endpoint.method, *method);
    }
}

#[test]
fn test_verb_follows_operation_kind() {
    const READ_ONLY_FAMILIES: &[&str] = &["osd/", "pg/", "config-key/", "tell/"];
    // Reads in the families that mix queries and commands.
    const QUERIES: &[&str] = &[
        "df",
        "fsid",
        "health",
        "quorum_status",
        "report",
        "status",
        "auth_export",
        "auth_get",
        "auth_get_key",
        "auth_list",
        "auth_print_key",
        "mds_compat_show",
        "mds_dump",
        "mds_getmap",
        "mds_stat",
        "mon_dump",
        "mon_getmap",
        "mon_stat",
        "mon_status",
    ];

    for endpoint in endpoints::all() {
        let read_only = READ_ONLY_FAMILIES
            .iter()
            .any(|family| endpoint.path.starts_with(family));
        let expected = if read_only || QUERIES.contains(&endpoint.name) {
            HttpMethod::Get
        } else {
            HttpMethod::Put
        };
        assert_eq!(endpoint.method, expected, "{}", endpoint.name);
    }

    let commands = endpoints::all()
        .filter(|e| e.method == HttpMethod::Put)
        .count();
    assert_eq!(commands, 32);
}

#[test]
fn test_only_map_retrieval_is_binary() {
    let binary: Vec<_> = endpoints::all()
        .filter(|e| e.body_types == Some(BINARY))
        .map(|e| e.name)
        .collect();
    assert_eq!(
        binary,
        vec!["mds_getmap", "mon_getmap", "osd_getcrushmap", "osd_getmap", "pg_getmap"]
    );

    let text_xml: Vec<_> = endpoints::all()
        .filter(|e| e.body_types == Some(TEXT_XML))
        .map(|e| e.name)
        .collect();
    assert_eq!(text_xml, vec!["mon_stat", "pg_debug"]);
}

#[test]
fn test_not_implemented_operations() {
    let flagged: Vec<_> = endpoints::all()
        .filter(|e| e.availability == Availability::NotImplemented)
        .map(|e| (e.name, e.method))
        .collect();
    assert_eq!(
        flagged,
        vec![
            ("auth_import", HttpMethod::Put),
            ("mds_set_allow_new_snaps", HttpMethod::Put),
            ("mds_unset_allow_new_snaps", HttpMethod::Put),
        ]
    );
}

#[test]
fn test_bare_paths_render_without_query() {
    for endpoint in endpoints::all() {
        let target = endpoint.is_targeted().then_some("0.1");
        let path = endpoint.render_path(target, &Query::new()).unwrap();
        assert!(!path.contains('?'), "{}", path);
        assert!(!path.starts_with('/'), "{}", path);
        assert!(!path.contains('{'), "{}", path);
    }
}

/// Parameter names of a recorded query, with consecutive `caps` collapsed.
fn query_names(query: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let name = pair.split_once('=').map_or(pair, |(name, _)| name);
        if name == "caps" && names.last() == Some(&"caps") {
            continue;
        }
        names.push(name);
    }
    names
}

#[tokio::test]
async fn test_methods_send_declared_params() {
    let ceph = CephWrapper::new(RecordingTransport::new());
    let caps = Capabilities::new()
        .with("mon", "allow r")
        .with("osd", "allow rw pool=rbd");
    let mut checked = Vec::new();

    macro_rules! check {
        ($name:literal, $call:expr) => {{
            $call.await.unwrap();
            let endpoint = endpoints::lookup($name).unwrap();
            let request = ceph.transport().last_request().unwrap();
            assert_eq!(request.method, endpoint.method, "{}", $name);
            assert_eq!(
                request.resource(),
                endpoint.path.replace("{id}", "1.0"),
                "{}",
                $name
            );
            assert_eq!(query_names(request.query()), endpoint.params, "{}", $name);
            checked.push($name);
        }};
    }

    check!("df", ceph.df(Some("detail")));
    check!("fsid", ceph.fsid());
    check!("health", ceph.health(Some("detail")));
    check!("quorum_status", ceph.quorum_status());
    check!("report", ceph.report(Some("tag")));
    check!("status", ceph.status());
    check!("compact", ceph.compact());
    check!("heap", ceph.heap("stats"));
    check!("injectargs", ceph.injectargs("--debug-mon=1"));
    check!("log", ceph.log("maintenance"));
    check!("quorum", ceph.quorum("enter"));
    check!("scrub", ceph.scrub());
    check!("tell", ceph.tell("osd.0", "version"));

    check!("auth_export", ceph.auth_export(Some("client.admin")));
    check!("auth_get", ceph.auth_get("client.admin"));
    check!("auth_get_key", ceph.auth_get_key("client.admin"));
    check!("auth_list", ceph.auth_list());
    check!("auth_print_key", ceph.auth_print_key("client.admin"));
    check!("auth_add", ceph.auth_add("client.rbd", &caps));
    check!("auth_caps", ceph.auth_caps("client.rbd", &caps));
    check!("auth_del", ceph.auth_del("client.rbd"));
    check!("auth_get_or_create", ceph.auth_get_or_create("client.rbd", &caps));
    check!(
        "auth_get_or_create_key",
        ceph.auth_get_or_create_key("client.rbd", &caps)
    );

    check!("config_key_exists", ceph.config_key_exists("k"));
    check!("config_key_get", ceph.config_key_get("k"));
    check!("config_key_list", ceph.config_key_list());

    check!("mds_compat_show", ceph.mds_compat_show());
    check!("mds_dump", ceph.mds_dump(Some(3)));
    check!("mds_getmap", ceph.mds_getmap(Some(3)));
    check!("mds_stat", ceph.mds_stat());
    check!("mds_add_data_pool", ceph.mds_add_data_pool("cephfs_data"));
    check!("mds_cluster_down", ceph.mds_cluster_down());
    check!("mds_cluster_up", ceph.mds_cluster_up());
    check!("mds_compat_rm_compat", ceph.mds_compat_rm_compat(1));
    check!("mds_compat_rm_incompat", ceph.mds_compat_rm_incompat(2));
    check!("mds_deactivate", ceph.mds_deactivate("a"));
    check!("mds_fail", ceph.mds_fail("a"));
    check!("mds_newfs", ceph.mds_newfs(1, 2, "--yes-i-really-mean-it"));
    check!("mds_remove_data_pool", ceph.mds_remove_data_pool("cephfs_data"));
    check!("mds_rm", ceph.mds_rm(4123, "a"));
    check!("mds_rmfailed", ceph.mds_rmfailed("0"));
    check!("mds_set_max_mds", ceph.mds_set_max_mds(2));
    check!("mds_setmap", ceph.mds_setmap(5));
    check!("mds_stop", ceph.mds_stop("a"));
    check!("mds_tell", ceph.mds_tell("a", "injectargs"));

    check!("mon_dump", ceph.mon_dump(Some(1)));
    check!("mon_getmap", ceph.mon_getmap(Some(1)));
    check!("mon_stat", ceph.mon_stat());
    check!("mon_status", ceph.mon_status());
    check!("mon_add", ceph.mon_add("c", "10.0.0.3:6789"));
    check!("mon_remove", ceph.mon_remove("c"));

    check!("osd_blacklist_ls", ceph.osd_blacklist_ls());
    check!("osd_crush_dump", ceph.osd_crush_dump());
    check!("osd_crush_rule_dump", ceph.osd_crush_rule_dump());
    check!("osd_crush_rule_list", ceph.osd_crush_rule_list());
    check!("osd_crush_rule_ls", ceph.osd_crush_rule_ls());
    check!("osd_dump", ceph.osd_dump(Some(9)));
    check!("osd_find", ceph.osd_find(0));
    check!("osd_getcrushmap", ceph.osd_getcrushmap(Some(9)));
    check!("osd_getmap", ceph.osd_getmap(Some(9)));
    check!("osd_getmaxosd", ceph.osd_getmaxosd());
    check!("osd_ls", ceph.osd_ls(Some(9)));
    check!("osd_lspools", ceph.osd_lspools(Some(0)));
    check!("osd_map", ceph.osd_map("rbd", "obj"));
    check!("osd_perf", ceph.osd_perf());
    check!("osd_pool_get", ceph.osd_pool_get("rbd", "size"));
    check!("osd_pool_stats", ceph.osd_pool_stats(Some("rbd")));
    check!("osd_stat", ceph.osd_stat());
    check!("osd_tree", ceph.osd_tree(Some(9)));

    check!("pg_debug", ceph.pg_debug("unfound_objects_exist"));
    check!("pg_dump", ceph.pg_dump(Some("all")));
    check!("pg_dump_json", ceph.pg_dump_json(Some("all")));
    check!("pg_dump_pools_json", ceph.pg_dump_pools_json());
    check!("pg_dump_stuck", ceph.pg_dump_stuck(Some("inactive")));
    check!("pg_getmap", ceph.pg_getmap());
    check!("pg_map", ceph.pg_map("1.0"));
    check!("pg_stat", ceph.pg_stat());

    check!(
        "tell_debug_dump_missing",
        ceph.tell_debug_dump_missing("1.0", "missing.txt")
    );
    check!(
        "tell_dump_pg_recovery_stats",
        ceph.tell_dump_pg_recovery_stats("1.0")
    );
    check!("tell_list_missing", ceph.tell_list_missing("1.0", "obj1"));
    check!("tell_query", ceph.tell_query("1.0"));
    check!("tell_version", ceph.tell_version("1.0"));

    let implemented: Vec<_> = endpoints::all()
        .filter(|e| e.is_implemented())
        .map(|e| e.name)
        .collect();
    assert_eq!(checked, implemented);
}
