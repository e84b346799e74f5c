#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Runs the `sked` binary against a throwaway database.
pub struct CliTestHarness {
    temp_dir: TempDir,
    db_path: PathBuf,
}

impl CliTestHarness {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");

        Self { temp_dir, db_path }
    }

    /// A command pointed at this harness' database, run from the temp dir
    /// so no stray `sked.toml` is picked up.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("sked").expect("Failed to find sked binary");
        cmd.current_dir(self.temp_dir.path())
            .env("SKED_DATABASE_PATH", &self.db_path)
            .env_remove("SKED_LIST_LIMIT")
            .env_remove("SKED_LOG");
        cmd
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }

    /// Runs `list --json` (optionally with a search term) and returns the
    /// decoded rows.
    pub fn list_json(&self, search: Option<&str>) -> Vec<serde_json::Value> {
        let mut args = vec!["list", "--json"];
        if let Some(search) = search {
            args.push(search);
        }
        let output = self.command().args(&args).output().expect("Failed to run sked");
        assert!(output.status.success(), "list failed: {:?}", output);
        serde_json::from_slice(&output.stdout).expect("list --json did not print JSON")
    }

    /// Adds a task and returns the id the store assigned to it.
    pub fn add(&self, args: &[&str]) -> i64 {
        let mut full = vec!["add"];
        full.extend_from_slice(args);
        self.run_success(&full);
        self.list_json(None)
            .iter()
            .filter_map(|t| t["id"].as_i64())
            .max()
            .expect("no task was created")
    }
}

pub mod assertions {
    use predicates::prelude::*;

    pub fn has_task_table_headers() -> impl Predicate<str> {
        predicate::str::contains("ID")
            .and(predicate::str::contains("Title"))
            .and(predicate::str::contains("Repeat"))
    }

    pub fn task_created_successfully() -> impl Predicate<str> {
        predicate::str::contains("✓").and(predicate::str::contains("Created"))
    }

    pub fn empty_result() -> impl Predicate<str> {
        predicate::str::contains("No tasks found")
    }
}
