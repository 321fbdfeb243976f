//! Interactive picker specs, driven through stdin

use crate::prelude::*;

#[test]
fn cancel_from_menu() {
    let ws = Workspace::with_hosts(&[("web1", "web1")]);
    ws.running(&["schh_web1_alpha"]);

    ws.schh()
        .args(&["web1"])
        .stdin("q\n")
        .passes()
        .stdout_has("Active sessions for web1:\n  1) alpha\n  2) Start a new session\n");
    assert_eq!(ws.screen_calls(), "");
}

#[test]
fn pick_existing_session() {
    let ws = Workspace::with_hosts(&[("web1", "web1")]);
    ws.running(&["schh_web1_alpha", "schh_web1_beta"]);

    ws.schh()
        .args(&["web1"])
        .stdin("2\n")
        .passes()
        .stdout_has("attached to 4202.schh_web1_beta");
    assert_eq!(ws.read_config("last_sessions"), "web1 beta\n");
}

#[test]
fn invalid_entries_reprompt() {
    let ws = Workspace::with_hosts(&[("web1", "web1")]);
    ws.running(&["schh_web1_alpha"]);

    ws.schh()
        .args(&["web1"])
        .stdin("abc\n7\n1\n")
        .passes()
        .stdout_has("Please enter a valid number.")
        .stdout_has("Selection out of range. Try again.")
        .stdout_has("attached to 4201.schh_web1_alpha");
}

#[test]
fn create_named_session_from_menu() {
    let ws = Workspace::with_hosts(&[("web1", "admin@web1")]);
    ws.running(&["schh_web1_alpha"]);

    ws.schh()
        .args(&["web1"])
        .stdin("2\nDeploy Box\n")
        .passes()
        .stdout_has("Starting a new session for web1.")
        .stdout_has("attached to schh_web1_deploybox");
    assert_eq!(
        ws.screen_calls(),
        "start schh_web1_deploybox ssh admin@web1\nattach schh_web1_deploybox\n"
    );
}

#[test]
fn suggestion_is_used_without_sessions() {
    let ws = Workspace::with_hosts(&[("web1", "web1")]);

    let run = ws
        .schh()
        .args(&["web1"])
        .stdin("\n")
        .passes()
        .stdout_has("Suggested name: ");
    let stdout = run.stdout();
    let suggestion = stdout
        .lines()
        .find_map(|l| l.strip_prefix("Suggested name: "))
        .unwrap()
        .to_string();
    assert!(stdout.contains(&format!("attached to schh_web1_{}", suggestion)));
}

#[test]
fn closed_input_fails() {
    let ws = Workspace::with_hosts(&[("web1", "web1")]);
    ws.running(&["schh_web1_alpha"]);

    ws.schh()
        .args(&["web1"])
        .stdin("")
        .fails()
        .stderr_has("Error: Unable to prompt for sessions:");
}
