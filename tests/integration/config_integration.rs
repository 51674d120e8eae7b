//! Integration tests for configuration layering

use super::test_utils::{stdout, Workspace};
use rollcall::cli::{Commands, OutputFormat, RunContext, RunOutcome};
use rollcall::config::ConfigLoader;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_env_specific_file_overrides_base() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("rollcall.toml"), "[roster]\ntable = \"base.csv\"\n").unwrap();
    fs::create_dir_all(root.join("config")).unwrap();
    fs::write(
        root.join("config").join("development.toml"),
        "[roster]\ntable = \"dev.csv\"\n",
    )
    .unwrap();

    let config = ConfigLoader::load(root).unwrap();
    assert_eq!(config.roster.table, PathBuf::from("dev.csv"));
}

#[test]
fn test_explicit_config_file_skips_workspace_file() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("rollcall.toml"), "[roster]\ntable = \"workspace.csv\"\n").unwrap();
    let explicit = root.join("explicit.toml");
    fs::write(&explicit, "[roster]\nleaves = [\"A\", \"B\"]\n").unwrap();

    let config = ConfigLoader::load_from_file(&explicit).unwrap();
    assert_eq!(config.roster.table, PathBuf::from("roster.csv"));
    assert_eq!(config.roster.leaves, vec!["A", "B"]);
}

#[test]
fn test_run_context_uses_configured_roster() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(
        root.join("rollcall.toml"),
        "[roster]\ntable = \"people.csv\"\nleaves = [\"7\", \"8\", \"9\"]\n",
    )
    .unwrap();
    fs::write(root.join("people.csv"), "id,name\n8,Eight\n").unwrap();

    let ctx = RunContext::new(root.to_path_buf(), None, false).unwrap();
    let outcome = ctx
        .execute(&Commands::Verify {
            id: Some("8".to_string()),
            format: OutputFormat::Text,
        })
        .unwrap();
    match outcome {
        RunOutcome::Completed(text) => {
            assert!(text.contains("->Name: Eight"));
            assert!(text.contains("<---Verified--->"));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn test_env_overrides_roster_table() {
    let ws = Workspace::new();
    ws.write("people.csv", "reg_no,name\n12314545,Ann\n");

    let output = ws
        .command()
        .env("ROLLCALL__ROSTER__TABLE", "people.csv")
        .args(["verify", "12314545"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("->Name: Ann"));
    assert!(text.contains("->Status: <---Verified--->"));
}

#[test]
fn test_env_overrides_leaves_as_list() {
    let ws = Workspace::new();
    let output = ws
        .command()
        .env("ROLLCALL__ROSTER__LEAVES", "12314545,99999999")
        .args(["tree", "--format", "json"])
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "tree should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["leaf_count"], 2);
    assert_eq!(value["height"], 1);

    let output = ws
        .command()
        .env("ROLLCALL__ROSTER__LEAVES", "12314545,99999999")
        .args(["verify", "99999999"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).contains("->Status: <---Verified--->"));
}

#[test]
fn test_env_overrides_workspace_file() {
    let ws = Workspace::new();
    ws.write("rollcall.toml", "[roster]\nleaves = [\"A\", \"B\", \"C\"]\n");

    let output = ws
        .command()
        .env("ROLLCALL__ROSTER__LEAVES", "A")
        .args(["tree", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["leaf_count"], 1);
}

#[test]
fn test_global_file_is_loaded() {
    let ws = Workspace::new();
    ws.write("global.csv", "reg_no,name\n12314545,Global Ada\n");
    ws.write_global_config("[roster]\ntable = \"global.csv\"\n");

    let output = ws.run(&["verify", "12314545"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("->Name: Global Ada"));
}

#[test]
fn test_workspace_file_overrides_global_file() {
    let ws = Workspace::new();
    ws.write("global.csv", "reg_no,name\n12314545,Global Ada\n");
    ws.write("local.csv", "reg_no,name\n12314545,Local Ada\n");
    ws.write_global_config("[roster]\ntable = \"global.csv\"\nleaves = [\"12314545\"]\n");
    ws.write("rollcall.toml", "[roster]\ntable = \"local.csv\"\n");

    let output = ws.run(&["verify", "12314545"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("->Name: Local Ada"));
    assert!(!text.contains("Global Ada"));

    let output = ws.run(&["tree", "--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["leaf_count"], 1);
}
