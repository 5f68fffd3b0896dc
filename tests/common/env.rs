//! Isolated environment for running the `slotwise` binary.
//!
//! The working directory and the user config directory are both temp dirs,
//! and `SLOTWISE_*` variables from the outer shell are cleared.

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a Slotwise CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).expect("stdout line is JSON"))
            .collect()
    }
}

pub struct TestEnv {
    pub working_dir: TempDir,
    pub config_home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            working_dir: TempDir::new().expect("temp working dir"),
            config_home: TempDir::new().expect("temp config home"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_slotwise")),
        }
    }

    /// Write `./canvas.toml`
    pub fn with_canvas(self, toml: &str) -> Self {
        std::fs::write(self.working_dir.path().join("canvas.toml"), toml)
            .expect("write canvas.toml");
        self
    }

    /// Write `<config home>/slotwise/canvas.toml`
    pub fn with_user_canvas(self, toml: &str) -> Self {
        let dir = self.config_home.path().join("slotwise");
        std::fs::create_dir_all(&dir).expect("create user config dir");
        std::fs::write(dir.join("canvas.toml"), toml).expect("write user canvas.toml");
        self
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.working_dir.path().join(relative)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.working_dir.path())
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("HOME", self.config_home.path())
            .env_remove("SLOTWISE_TEMPLATE")
            .env_remove("SLOTWISE_ENABLE")
            .env_remove("SLOTWISE_DISABLE")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        to_result(cmd.output().expect("Failed to execute slotwise"))
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
