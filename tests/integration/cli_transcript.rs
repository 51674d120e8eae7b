//! Integration tests running the rollcall binary end to end

use super::test_utils::{stdout, Workspace};
use rollcall::tree::{build_tree, compute_digest};
use std::io::Write;
use std::process::Stdio;

#[test]
fn test_verify_known_identifier() {
    let ws = Workspace::new();
    let output = ws.run(&["verify", "12314545"]);

    assert!(
        output.status.success(),
        "verify should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    let text = stdout(&output);
    assert!(text.contains("->Name: Ada Lovelace"));
    assert!(text.contains("->Hash Tree Structure:"));
    assert!(text.contains(&format!("(Hash: {})", compute_digest(b"12314545"))));
    assert!(text.contains("->Status: <---Verified--->"));
}

#[test]
fn test_verify_root_matches_default_roster() {
    let ws = Workspace::new();
    let output = ws.run(&["verify", "12314515"]);
    assert!(output.status.success());

    let tree = build_tree(&rollcall::config::DEFAULT_LEAVES).unwrap();
    assert!(stdout(&output).contains(&format!("Root Hash: {}", tree.root_digest())));
}

#[test]
fn test_verify_named_identifier_outside_tree() {
    let ws = Workspace::new();
    let output = ws.run(&["verify", "99999999"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("->Name: Grace Hopper"));
    assert!(text.contains("->Status: <---Not Found--->"));
}

#[test]
fn test_verify_unknown_identifier_exits_with_status_one() {
    let ws = Workspace::new();
    let output = ws.run(&["verify", "00000000"]);

    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.contains("->Name: Not found"));
    assert!(text.contains("Exiting: Invalid registration number."));
    assert!(!text.contains("Root Hash"));
}

#[test]
fn test_verify_missing_table_exits_with_status_one() {
    let ws = Workspace::new();
    ws.write("rollcall.toml", "[roster]\ntable = \"absent.csv\"\n");
    let output = ws.run(&["verify", "12314545"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("->Name: Error: Could not open file"));
}

#[test]
fn test_prompted_identifier_from_stdin() {
    let ws = Workspace::new();
    let mut child = ws
        .command()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"12314515 trailing words\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("->Registration Number: 12314515"));
    assert!(text.contains("->Name: Alan Turing"));
    assert!(text.contains("<---Verified--->"));
}

#[test]
fn test_verify_json_output() {
    let ws = Workspace::new();
    let output = ws.run(&["verify", "12314545", "--format", "json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["status"], "verified");
    assert_eq!(value["name"], "Ada Lovelace");
    assert_eq!(value["leaf_count"], 44);
    assert_eq!(value["height"], 6);
}

#[test]
fn test_custom_leaves_from_workspace_config() {
    let ws = Workspace::new();
    ws.write("leaves.txt", "12314545\n");
    ws.write("rollcall.toml", "[roster]\nleaves_file = \"leaves.txt\"\n");
    let output = ws.run(&["tree", "--format", "json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["leaf_count"], 1);
    assert_eq!(value["root_digest"], compute_digest(b"12314545").as_str());
}

#[test]
fn test_empty_roster_is_not_fatal() {
    let ws = Workspace::new();
    ws.write("rollcall.toml", "[roster]\nleaves = []\n");
    let output = ws.run(&["verify", "12314545"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("(empty roster, nothing to check)"));
    assert!(text.contains("<---Not Found--->"));
}

#[test]
fn test_digest_command() {
    let ws = Workspace::new();
    let output = ws.run(&["digest", "foobar"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "85944171f73967e8");
}

#[test]
fn test_invalid_config_exits_with_status_two() {
    let ws = Workspace::new();
    ws.write("rollcall.toml", "[logging]\noutput = \"everywhere\"\n");
    let output = ws.run(&["--quiet", "tree"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_config_command_prints_toml() {
    let ws = Workspace::new();
    let output = ws.run(&["config"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("[roster]"));
    assert!(text.contains("[logging]"));
}

#[test]
fn test_verify_blank_argument_is_refused() {
    let ws = Workspace::new();
    ws.write("roster.csv", "reg_no,name\n,Nobody\n");

    let output = ws.run(&["verify", ""]);

    assert_eq!(output.status.code(), Some(2));
    assert!(!stdout(&output).contains("Nobody"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No registration number entered"));
}
