//! Manifest file discovery
//!
//! Features:
//! - Recursively walks the root directory for package.json files
//! - Skips dependency-cache directories (node_modules by default)
//! - Visits directory entries in name order so repeated runs agree

use crate::error::IoError;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// File name of the manifests we collect
pub const MANIFEST_FILENAME: &str = "package.json";

/// Directories never descended into unless configured otherwise
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["node_modules"];

/// Owned copy of the default exclusions
pub fn default_excluded_dirs() -> Vec<String> {
    DEFAULT_EXCLUDED_DIRS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Find every package.json below `root`
///
/// Symbolic links to directories are not followed.
pub fn locate_manifests(root: &Path, excluded_dirs: &[String]) -> Result<Vec<PathBuf>, IoError> {
    if !root.is_dir() {
        return Err(IoError::directory_not_found(root));
    }

    let mut manifests = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_excluded_dir(entry, excluded_dirs));

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            IoError::generic(path, e.into())
        })?;

        if !entry.file_type().is_dir() && entry.file_name() == MANIFEST_FILENAME {
            manifests.push(entry.into_path());
        }
    }

    Ok(manifests)
}

/// Check if an entry is an excluded directory below the root
fn is_excluded_dir(entry: &DirEntry, excluded_dirs: &[String]) -> bool {
    let excluded = entry.depth() > 0
        && entry.file_type().is_dir()
        && excluded_dirs
            .iter()
            .any(|name| entry.file_name() == name.as_str());
    if excluded {
        tracing::trace!(path = %entry.path().display(), "skipping excluded directory");
    }
    excluded
}
