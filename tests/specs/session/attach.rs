//! Named-session and `--last` specs
//!
//! The fake screen prints `attached to <id>` where the real one would take
//! over the terminal.

use crate::prelude::*;

#[test]
fn named_session_is_started_then_attached() {
    let ws = Workspace::with_hosts(&[("web1", "admin@web1")]);

    ws.schh()
        .args(&["web1", "Alpha"])
        .passes()
        .stdout_eq("attached to schh_web1_alpha\n");

    assert_eq!(
        ws.screen_calls(),
        "start schh_web1_alpha ssh admin@web1\nattach schh_web1_alpha\n"
    );
    assert_eq!(ws.read_config("last_sessions"), "web1 alpha\n");
}

#[test]
fn running_session_is_not_started_again() {
    let ws = Workspace::with_hosts(&[("web1", "admin@web1")]);
    ws.running(&["schh_web1_alpha"]);

    ws.schh().args(&["web1", "alpha"]).passes();

    assert_eq!(ws.screen_calls(), "attach schh_web1_alpha\n");
}

#[test]
fn start_failure_is_reported() {
    let ws = Workspace::with_hosts(&[("web1", "admin@web1")]);
    ws.fail_starts();

    ws.schh()
        .args(&["web1", "alpha"])
        .fails()
        .stderr_has("Error: Unable to start session 'alpha':")
        .stderr_has("cannot create session");
    assert_eq!(ws.read_config("last_sessions"), "");
}

#[test]
fn last_without_history_fails() {
    let ws = Workspace::with_hosts(&[("web1", "web1")]);
    ws.schh()
        .args(&["--last", "web1"])
        .fails()
        .stderr_eq("Error: No recent session stored for 'web1'.\n");
}

#[test]
fn last_reattaches_previous_session() {
    let ws = Workspace::with_hosts(&[("web1", "admin@web1")]);
    ws.schh().args(&["web1", "alpha"]).passes();

    ws.schh()
        .args(&["web1", "--last"])
        .passes()
        .stdout_eq("attached to schh_web1_alpha\n");

    assert_eq!(
        ws.screen_calls(),
        "start schh_web1_alpha ssh admin@web1\nattach schh_web1_alpha\nattach schh_web1_alpha\n"
    );
}

#[test]
fn environment_overrides_configured_multiplexer() {
    let ws = Workspace::with_hosts(&[("web1", "web1")]);
    ws.config_file("config.toml", "multiplexer = \"/nonexistent/screen\"\n");

    ws.schh().args(&["web1", "alpha"]).passes();
}

#[test]
fn remote_login_program_comes_from_settings() {
    let ws = Workspace::with_hosts(&[("web1", "web1")]);
    ws.config_file("config.toml", "remote_login = \"mosh\"\n");

    ws.schh().args(&["web1", "alpha"]).passes();

    assert!(
        ws.screen_calls().starts_with("start schh_web1_alpha mosh web1\n"),
        "calls: {}",
        ws.screen_calls()
    );
}
