//! Shared test utilities for integration tests

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Roster table used by the CLI tests
pub const ROSTER_TABLE: &str = "\
reg_no,name
12314545,Ada Lovelace
12314515,Alan Turing
99999999,Grace Hopper
";

/// Scratch workspace with a roster table and isolated config directories
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("ws")).unwrap();
        fs::create_dir_all(dir.path().join("config_home")).unwrap();
        fs::create_dir_all(dir.path().join("home")).unwrap();
        fs::write(dir.path().join("ws").join("roster.csv"), ROSTER_TABLE).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().join("ws")
    }

    pub fn write(&self, relative: impl AsRef<Path>, contents: &str) {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    /// Write the global config file the binary finds under `$XDG_CONFIG_HOME`
    pub fn write_global_config(&self, contents: &str) {
        let dir = self.dir.path().join("config_home").join("rollcall");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), contents).unwrap();
    }

    /// Command for the built binary, isolated from the user's configuration
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_rollcall"));
        cmd.env("XDG_CONFIG_HOME", self.dir.path().join("config_home"))
            .env("XDG_DATA_HOME", self.dir.path().join("data_home"))
            .env("HOME", self.dir.path().join("home"))
            .env_remove("ROLLCALL_LOG")
            .env_remove("ROLLCALL_ENV")
            .arg("--workspace")
            .arg(self.root())
            .arg("--no-color");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().unwrap()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
