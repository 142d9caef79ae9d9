//! Manifest file discovery and parsing
//!
//! This module provides functionality to:
//! - Locate package.json files below a root directory
//! - Parse declared dependencies and label them with their module

mod locator;
mod package_json;

pub use locator::{
    default_excluded_dirs, locate_manifests, DEFAULT_EXCLUDED_DIRS, MANIFEST_FILENAME,
};
pub use package_json::{parse_manifest, PackageJsonParser};
