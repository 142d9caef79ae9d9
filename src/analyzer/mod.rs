//! Adapters for the external per-manifest analyses
//!
//! This module provides:
//! - Drift analysis (libyear) with explicit outcome kinds
//! - Outdated-package check (npm-check) degrading to empty results
//! - Shared command execution

mod command;
mod drift;
mod outdated;

pub use command::{display_command, run_command, CommandOutput};
pub use drift::{
    default_drift_command, interpret_drift_output, DriftAnalyzer, DriftOutcome, DriftRecord,
    SystemDriftAnalyzer, DEFAULT_DRIFT_COMMAND,
};
pub use outdated::{
    default_outdated_command, FreshnessRecord, OutdatedChecker, SystemOutdatedChecker,
};
