//! Run summary types
//!
//! Tracks what happened to each manifest during one analysis run.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What happened to one manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ManifestStatus {
    /// Rows were produced for every declared dependency
    Analyzed,
    /// No rows were produced
    Skipped { reason: String },
}

/// Result for a single manifest file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestOutcome {
    /// Path to the manifest file
    pub path: PathBuf,
    /// Module label of the manifest
    pub module: String,
    /// Number of report rows produced
    pub rows: usize,
    #[serde(flatten)]
    pub status: ManifestStatus,
}

impl ManifestOutcome {
    /// Creates an outcome for an analyzed manifest
    pub fn analyzed(path: impl Into<PathBuf>, module: impl Into<String>, rows: usize) -> Self {
        Self {
            path: path.into(),
            module: module.into(),
            rows,
            status: ManifestStatus::Analyzed,
        }
    }

    /// Creates an outcome for a skipped manifest
    pub fn skipped(
        path: impl Into<PathBuf>,
        module: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            module: module.into(),
            rows: 0,
            status: ManifestStatus::Skipped {
                reason: reason.into(),
            },
        }
    }

    /// Returns true if the manifest was skipped
    pub fn is_skipped(&self) -> bool {
        matches!(self.status, ManifestStatus::Skipped { .. })
    }
}

/// Overall summary of one run
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Scanned root directory
    pub root: PathBuf,
    /// Where the report was written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// One entry per manifest found
    pub manifests: Vec<ManifestOutcome>,
}

impl RunSummary {
    /// Creates an empty summary for a root directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: None,
            manifests: Vec::new(),
        }
    }

    /// Records a manifest outcome
    pub fn add(&mut self, outcome: ManifestOutcome) {
        self.manifests.push(outcome);
    }

    /// Number of manifests that produced rows
    pub fn analyzed_count(&self) -> usize {
        self.manifests.iter().filter(|m| !m.is_skipped()).count()
    }

    /// Number of manifests that were skipped
    pub fn skipped_count(&self) -> usize {
        self.manifests.iter().filter(|m| m.is_skipped()).count()
    }

    /// Total number of report rows
    pub fn total_rows(&self) -> usize {
        self.manifests.iter().map(|m| m.rows).sum()
    }

    /// Returns all skipped manifests
    pub fn skipped(&self) -> impl Iterator<Item = &ManifestOutcome> {
        self.manifests.iter().filter(|m| m.is_skipped())
    }
}
