//! Shared testing utilities for adaudit CLI tests.

use std::path::Path;

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;

/// Scenario dataset: one aggregated row without a new_customers column.
pub const SCENARIO_CSV: &str = "campaign_name,spend,revenue,impressions,clicks,conversions\n\
Spring Sale,1000,3000,10000,500,50\n";

/// Testing harness providing an isolated working directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        Self { root: TempDir::new().expect("Failed to create temp directory for tests") }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Write a campaign dataset at the default `data/campaign_data.csv` path.
    pub fn write_dataset(&self, content: &str) {
        self.root
            .child("data/campaign_data.csv")
            .write_str(content)
            .expect("Failed to write test dataset");
    }

    /// Write an `adaudit.toml` pointing the completion endpoint at `api_url`.
    pub fn write_config(&self, api_url: &str) {
        let content = format!("[completion]\napi_url = \"{}\"\ntimeout_secs = 2\n", api_url);
        self.root
            .child("adaudit.toml")
            .write_str(&content)
            .expect("Failed to write test config");
    }

    /// CLI command rooted in the test directory with a dummy API key set.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("adaudit").expect("adaudit binary builds");
        cmd.current_dir(self.root.path());
        cmd.env("OPENAI_API_KEY", "test-key");
        cmd
    }
}
