//! Dependency freshness check through npm-check
//!
//! npm-check is a library, so the default command drives it through `node`
//! and prints its `packages` state as JSON. Failures never abort a manifest:
//! callers get an empty list and the affected columns fall back to defaults.

use super::command::{display_command, run_command};
use crate::error::AnalyzerError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

const NPM_CHECK_SCRIPT: &str = "require('npm-check')({ cwd: process.cwd() })\
.then(function (state) { process.stdout.write(JSON.stringify(state.get('packages'))); })\
.catch(function (err) { console.error(err && err.message ? err.message : String(err)); process.exit(1); });";

/// Freshness information for one package
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreshnessRecord {
    /// Package name
    pub module_name: String,
    /// Latest published version
    pub latest: Option<String>,
    /// Highest version allowed by the declared range
    pub package_wanted: Option<String>,
    /// An upgrade within the declared range is available
    pub easy_upgrade: Option<bool>,
    /// The package is declared but not imported anywhere
    pub unused: Option<bool>,
}

impl FreshnessRecord {
    /// Creates a record with only the package name set
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            ..Default::default()
        }
    }
}

/// Trait for outdated-package checkers
#[async_trait]
pub trait OutdatedChecker: Send + Sync {
    /// Check the packages of the manifest in `dir`
    async fn check(&self, dir: &Path) -> Result<Vec<FreshnessRecord>, AnalyzerError>;

    /// Check, degrading any failure to an empty list
    async fn check_or_empty(&self, dir: &Path) -> Vec<FreshnessRecord> {
        match self.check(dir).await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "outdated check failed");
                Vec::new()
            }
        }
    }
}

/// Outdated checker that runs the configured command
#[derive(Debug, Clone)]
pub struct SystemOutdatedChecker {
    command: Vec<String>,
}

impl SystemOutdatedChecker {
    /// Create a checker running npm-check through node
    pub fn new() -> Self {
        Self::with_command(default_outdated_command())
    }

    /// Create a checker running a custom command
    pub fn with_command(command: Vec<String>) -> Self {
        Self { command }
    }

    /// The command this checker runs
    pub fn command(&self) -> &[String] {
        &self.command
    }
}

impl Default for SystemOutdatedChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Command used when nothing else is configured
pub fn default_outdated_command() -> Vec<String> {
    vec![
        "node".to_string(),
        "-e".to_string(),
        NPM_CHECK_SCRIPT.to_string(),
    ]
}

#[async_trait]
impl OutdatedChecker for SystemOutdatedChecker {
    async fn check(&self, dir: &Path) -> Result<Vec<FreshnessRecord>, AnalyzerError> {
        let command = display_command(&self.command);
        let output = run_command(&self.command, dir).await?;

        if !output.status.success() {
            return Err(AnalyzerError::command_failed(
                command,
                dir,
                output.status.to_string(),
                output.stderr.trim(),
            ));
        }

        serde_json::from_str(&output.stdout)
            .map_err(|e| AnalyzerError::invalid_output(command, dir, e.to_string()))
    }
}
