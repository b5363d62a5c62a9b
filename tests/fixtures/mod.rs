//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Path to the colorpick binary
pub fn colorpick_bin() -> String {
    std::env::var("CARGO_BIN_EXE_colorpick")
        .unwrap_or_else(|_| "target/release/colorpick".to_string())
}

/// Isolated config and data directories for one test.
pub struct TestEnv {
    config_dir: TempDir,
    data_dir: TempDir,
}

impl TestEnv {
    /// Creates empty config and data directories.
    pub fn new() -> Self {
        Self {
            config_dir: TempDir::new().expect("Failed to create config temp dir"),
            data_dir: TempDir::new().expect("Failed to create data temp dir"),
        }
    }

    /// Config directory passed as `COLORPICK_CONFIG_DIR`.
    pub fn config_dir(&self) -> &Path {
        self.config_dir.path()
    }

    /// Data directory passed as `COLORPICK_DATA_DIR`.
    pub fn data_dir(&self) -> &Path {
        self.data_dir.path()
    }

    /// Path of the JSON store file.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir().join("store.json")
    }

    /// Creates a Command running inside this environment.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(colorpick_bin());
        cmd.env("COLORPICK_CONFIG_DIR", self.config_dir());
        cmd.env("COLORPICK_DATA_DIR", self.data_dir());
        cmd.env_remove("RUST_LOG");
        cmd.args(args);
        cmd
    }

    /// Runs a command with no stdin.
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .stdin(Stdio::null())
            .output()
            .expect("Failed to execute command")
    }

    /// Runs a command, feeding `input` on stdin.
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn command");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");
        child.wait_with_output().expect("Failed to wait for command")
    }

    /// Writes `config.toml` into the config directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.config_dir().join("config.toml"), content)
            .expect("Failed to write config file");
    }

    /// Writes raw store contents.
    pub fn write_store(&self, value: &Value) {
        fs::write(
            self.store_path(),
            serde_json::to_string_pretty(value).expect("Failed to serialize store"),
        )
        .expect("Failed to write store file");
    }

    /// Reads the store file, or `null` when it was never written.
    pub fn read_store(&self) -> Value {
        match fs::read_to_string(self.store_path()) {
            Ok(content) => serde_json::from_str(&content).expect("Store should be valid JSON"),
            Err(_) => Value::Null,
        }
    }
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Stdout parsed as JSON.
pub fn stdout_json(output: &Output) -> Value {
    serde_json::from_str(&stdout(output)).expect("Should parse JSON output")
}

/// Asserts the process exited with `code`, showing stderr otherwise.
pub fn assert_exit(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "Unexpected exit code. stdout: {} stderr: {}",
        stdout(output),
        stderr(output)
    );
}
