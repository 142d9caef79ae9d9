//! Core domain models for depreport
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency declarations and their kinds
//! - Module labels derived from manifest locations
//! - Node.js runtime targets for compatibility columns
//! - Run summary structures

mod dependency;
mod module;
mod runtime;
mod summary;

pub use dependency::{Dependency, DependencyKind};
pub use module::{dir_basename, module_label};
pub use runtime::{NodeRuntime, DEFAULT_NODE_MAJORS};
pub use summary::{ManifestOutcome, ManifestStatus, RunSummary};
