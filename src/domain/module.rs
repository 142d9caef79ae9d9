//! Module labels for manifests
//!
//! A module label names the package a manifest belongs to, relative to the
//! scanned root: the root manifest is labelled with the root directory name,
//! every other manifest with `{root}/{directory}`.

use std::path::Path;

/// Returns the last path component as a string, if any
pub fn dir_basename(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

/// Compute the module label for a manifest
///
/// Only the basename of the manifest's directory is used, so
/// `myproj/pkgs/foo/package.json` under root `myproj` is `myproj/foo`.
pub fn module_label(root_name: &str, manifest_path: &Path) -> String {
    let dir_name = manifest_path
        .parent()
        .and_then(dir_basename)
        .unwrap_or_default();

    if dir_name == root_name {
        root_name.to_string()
    } else {
        format!("{}/{}", root_name, dir_name)
    }
}
