//! `schh --list` specs

use crate::prelude::*;

#[test]
fn no_sessions() {
    let ws = Workspace::with_hosts(&[("web1", "web1")]);
    ws.schh()
        .args(&["--list", "web1"])
        .passes()
        .stdout_eq("Active sessions for web1:\n  (none)\n");
}

#[test]
fn only_the_hosts_sessions_are_listed() {
    let ws = Workspace::with_hosts(&[("web1", "web1")]);
    ws.running(&["schh_web1_alpha", "schh_db_alpha", "unrelated", "schh_web1_beta"]);
    ws.config_file("last_sessions", "web1 beta\n");

    ws.schh()
        .args(&["web1", "--list"])
        .passes()
        .stdout_eq("Active sessions for web1:\n  - alpha\n  - beta  (last used)\n");
}

#[test]
fn host_names_are_canonicalized_for_matching() {
    let ws = Workspace::with_hosts(&[("Web.Prod", "web.prod.internal")]);
    ws.running(&["schh_web-prod_alpha"]);

    ws.schh()
        .args(&["--list", "Web.Prod"])
        .passes()
        .stdout_eq("Active sessions for Web.Prod:\n  - alpha\n");
}

#[test]
fn json_output() {
    let ws = Workspace::with_hosts(&[("web1", "web1")]);
    ws.running(&["schh_web1_alpha"]);

    ws.schh()
        .args(&["--list", "web1", "-o", "json"])
        .passes()
        .stdout_has("\"host\": \"web1\"")
        .stdout_has("\"id\": \"4201.schh_web1_alpha\"")
        .stdout_has("\"last_used\": false");
}

#[test]
fn listing_never_starts_or_attaches() {
    let ws = Workspace::with_hosts(&[("web1", "web1")]);
    ws.running(&["schh_web1_alpha"]);
    ws.schh().args(&["--list", "web1"]).passes();
    assert_eq!(ws.screen_calls(), "");
}
