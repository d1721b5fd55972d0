//! Common test utilities for Tariff CLI tests.
//!
//! `TestEnv` runs the `tariff` binary inside an isolated project directory
//! with its own config directory, plain (ASCII, no color) output and no
//! inherited `TARIFF_*` or CI variables.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a Tariff CLI command
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    /// stdout parsed as NDJSON, one value per line
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("invalid NDJSON line {:?}: {}", line, e))
            })
            .collect()
    }

    /// First event with `"event": <name>`
    pub fn event(&self, name: &str) -> serde_json::Value {
        self.events()
            .into_iter()
            .find(|e| e["event"] == name)
            .unwrap_or_else(|| panic!("no '{}' event in:\n{}", name, self.stdout))
    }
}

pub struct TestEnv {
    project: TempDir,
    config_home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let project = tempfile::tempdir().expect("project dir");
        std::fs::create_dir(project.path().join(".git")).expect("git marker");
        Self {
            project,
            config_home: tempfile::tempdir().expect("config dir"),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.project.path().join(relative)
    }

    pub fn root(&self) -> &Path {
        self.project.path()
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(&path, content).expect("write file");
        path
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("read {}: {}", relative, e))
    }

    pub fn read_json(&self, relative: &str) -> serde_json::Value {
        serde_json::from_str(&self.read(relative)).expect("valid JSON")
    }

    /// Write the user-level config (`$XDG_CONFIG_HOME/tariff/config.toml`)
    pub fn write_user_config(&self, content: &str) {
        let dir = self.config_home.path().join("tariff");
        std::fs::create_dir_all(&dir).expect("create user config dir");
        std::fs::write(dir.join("config.toml"), content).expect("write user config");
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_tariff"));
        cmd.current_dir(self.project.path())
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("NO_COLOR", "1")
            .env("TERM", "dumb");

        for key in [
            "TARIFF_VERBOSITY",
            "TARIFF_COLOR",
            "TARIFF_RANGES_FIELD",
            "TARIFF_RANGES_DISABLED",
            "CI",
            "GITHUB_ACTIONS",
        ] {
            cmd.env_remove(key);
        }
        for (key, value) in env {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute tariff");
        TestResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
