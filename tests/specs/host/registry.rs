//! Host registry specs
//!
//! `schh host add|remove|list` against an isolated config directory.

use crate::prelude::*;

#[test]
fn add_then_list() {
    let ws = Workspace::empty();
    ws.schh()
        .args(&["host", "add", "web1"])
        .passes()
        .stdout_eq("Host 'web1' saved as 'web1'.\n");
    ws.schh()
        .args(&["host", "add", "db", "admin@db.internal"])
        .passes()
        .stdout_eq("Host 'admin@db.internal' saved as 'db'.\n");

    ws.schh()
        .args(&["host", "list"])
        .passes()
        .stdout_eq("Configured hosts:\n  - web1\n  - db -> admin@db.internal\n");
    assert_eq!(
        ws.read_config("hosts"),
        "web1 web1\ndb admin@db.internal\n"
    );
}

#[test]
fn list_without_hosts() {
    let ws = Workspace::empty();
    ws.schh()
        .args(&["host", "list"])
        .passes()
        .stdout_eq("No hosts configured. Use 'schh host add <name> [target]'.\n");
}

#[test]
fn list_as_json() {
    let ws = Workspace::with_hosts(&[("db", "admin@db.internal")]);
    ws.schh()
        .args(&["host", "list", "-o", "json"])
        .passes()
        .stdout_has("\"name\": \"db\"")
        .stdout_has("\"target\": \"admin@db.internal\"");
}

#[test]
fn hand_edited_hosts_file_is_read() {
    let ws = Workspace::empty();
    ws.config_file("hosts", "# lab machines\n\nweb1\ndb   admin@db\n");
    ws.schh()
        .args(&["host", "list"])
        .passes()
        .stdout_eq("Configured hosts:\n  - web1\n  - db -> admin@db\n");
}

#[test]
fn duplicate_add_fails() {
    let ws = Workspace::with_hosts(&[("web1", "web1")]);
    ws.schh()
        .args(&["host", "add", "web1", "other"])
        .fails()
        .stderr_eq("Error: Host 'web1' already exists.\n");
}

#[test]
fn whitespace_is_rejected() {
    let ws = Workspace::empty();
    ws.schh()
        .args(&["host", "add", "web 1"])
        .fails()
        .stderr_eq("Error: Host names and targets cannot contain spaces.\n");
    assert_eq!(ws.read_config("hosts"), "");
}

#[test]
fn remove_clears_recent_session() {
    let ws = Workspace::with_hosts(&[("web1", "web1"), ("db", "db")]);
    ws.config_file("last_sessions", "web1 alpha\ndb beta\n");

    ws.schh()
        .args(&["host", "remove", "web1"])
        .passes()
        .stdout_eq("Host 'web1' removed and recent sessions cleared.\n");

    assert_eq!(ws.read_config("hosts"), "db db\n");
    assert_eq!(ws.read_config("last_sessions"), "db beta\n");
}

#[test]
fn remove_without_recent_session() {
    let ws = Workspace::with_hosts(&[("web1", "web1")]);
    ws.schh()
        .args(&["host", "remove", "web1"])
        .passes()
        .stdout_eq("Host 'web1' removed.\n");
}

#[test]
fn remove_unknown_host_fails() {
    let ws = Workspace::empty();
    ws.schh()
        .args(&["host", "remove", "ghost"])
        .fails()
        .stderr_eq("Error: Host 'ghost' was not found.\n");
}

#[test]
fn add_after_hand_edit_without_final_newline() {
    let ws = Workspace::empty();
    ws.config_file("hosts", "web1 admin@web1");

    ws.schh().args(&["host", "add", "db"]).passes();

    ws.schh()
        .args(&["host", "list"])
        .passes()
        .stdout_eq("Configured hosts:\n  - web1 -> admin@web1\n  - db\n");
}
