//! Version drift analysis through the libyear CLI
//!
//! The CLI is run once per manifest directory with JSON output requested.
//! Its result is classified as:
//! - Records: stdout decoded as a list of drift records
//! - Diagnostic: the tool wrote to stderr; its text is kept instead of data
//! - NotAList: stdout was valid JSON but not a list
//!
//! A failed or unstartable process, or undecodable stdout, is an error.

use super::command::{display_command, run_command};
use crate::error::AnalyzerError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Command used when nothing else is configured
pub const DEFAULT_DRIFT_COMMAND: &[&str] = &["npx", "--yes", "libyear", "--json"];

/// Owned copy of the default libyear command
pub fn default_drift_command() -> Vec<String> {
    DEFAULT_DRIFT_COMMAND
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Drift metrics for one dependency
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DriftRecord {
    /// Dependency name
    pub dependency: String,
    /// Latest available version
    pub available: Option<String>,
    /// Years behind the latest release
    pub drift: Option<f64>,
    /// Release frequency signal
    pub pulse: Option<f64>,
    /// Number of releases behind
    pub releases: Option<u64>,
    /// Major versions behind
    pub major: Option<u64>,
    /// Minor versions behind
    pub minor: Option<u64>,
    /// Patch versions behind
    pub patch: Option<u64>,
}

impl DriftRecord {
    /// Creates a record with only the dependency name set
    pub fn new(dependency: impl Into<String>) -> Self {
        Self {
            dependency: dependency.into(),
            ..Default::default()
        }
    }
}

/// Outcome of a drift analysis that ran to completion
#[derive(Debug, Clone, PartialEq)]
pub enum DriftOutcome {
    /// Per-dependency drift records
    Records(Vec<DriftRecord>),
    /// The tool reported diagnostics instead of data
    Diagnostic(String),
    /// The tool produced JSON that is not a list
    NotAList(String),
}

/// Trait for drift analyzers
#[async_trait]
pub trait DriftAnalyzer: Send + Sync {
    /// Analyze the manifest in `dir`
    async fn analyze(&self, dir: &Path) -> Result<DriftOutcome, AnalyzerError>;
}

/// Drift analyzer that runs the configured command
#[derive(Debug, Clone)]
pub struct SystemDriftAnalyzer {
    command: Vec<String>,
}

impl SystemDriftAnalyzer {
    /// Create an analyzer running the default libyear command
    pub fn new() -> Self {
        Self::with_command(default_drift_command())
    }

    /// Create an analyzer running a custom command
    pub fn with_command(command: Vec<String>) -> Self {
        Self { command }
    }

    /// The command this analyzer runs
    pub fn command(&self) -> &[String] {
        &self.command
    }
}

impl Default for SystemDriftAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify decoded stdout
pub fn interpret_drift_output(value: Value) -> Result<DriftOutcome, serde_json::Error> {
    match value {
        Value::Array(_) => Ok(DriftOutcome::Records(serde_json::from_value(value)?)),
        Value::Object(_) => Ok(DriftOutcome::NotAList("object".to_string())),
        Value::String(_) => Ok(DriftOutcome::NotAList("string".to_string())),
        Value::Number(_) => Ok(DriftOutcome::NotAList("number".to_string())),
        Value::Bool(_) => Ok(DriftOutcome::NotAList("boolean".to_string())),
        Value::Null => Ok(DriftOutcome::NotAList("null".to_string())),
    }
}

#[async_trait]
impl DriftAnalyzer for SystemDriftAnalyzer {
    async fn analyze(&self, dir: &Path) -> Result<DriftOutcome, AnalyzerError> {
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

        if !output.stderr.trim().is_empty() {
            return Ok(DriftOutcome::Diagnostic(output.stderr.trim().to_string()));
        }

        let value: Value = serde_json::from_str(&output.stdout)
            .map_err(|e| AnalyzerError::invalid_output(&command, dir, e.to_string()))?;

        interpret_drift_output(value)
            .map_err(|e| AnalyzerError::invalid_output(&command, dir, e.to_string()))
    }
}
