//! package.json parser
//!
//! Handles:
//! - dependencies
//! - devDependencies
//!
//! Other dependency groups are not part of the report.

use crate::domain::{module_label, Dependency, DependencyKind};
use crate::error::ManifestError;
use serde_json::{Map, Value};
use std::path::Path;

/// Parser for package.json files
pub struct PackageJsonParser;

impl PackageJsonParser {
    /// Parse the declared dependencies from manifest content
    ///
    /// `path` is only used for error messages. Missing groups are empty.
    pub fn parse(
        &self,
        content: &str,
        path: &Path,
        module: &str,
    ) -> Result<Vec<Dependency>, ManifestError> {
        let json: Value = serde_json::from_str(content)
            .map_err(|e| ManifestError::json_parse_error(path, e.to_string()))?;

        let mut dependencies = Vec::new();
        for kind in DependencyKind::all() {
            if let Some(deps) = json.get(kind.group_key()).and_then(|v| v.as_object()) {
                parse_dependency_object(deps, *kind, module, &mut dependencies);
            }
        }

        Ok(dependencies)
    }
}

fn parse_dependency_object(
    deps: &Map<String, Value>,
    kind: DependencyKind,
    module: &str,
    output: &mut Vec<Dependency>,
) {
    for (name, range_value) in deps {
        let range = match range_value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        output.push(Dependency::new(name.clone(), range, kind, module));
    }
}

/// Read a manifest from disk and parse it, labelling it relative to `root_name`
pub fn parse_manifest(path: &Path, root_name: &str) -> Result<Vec<Dependency>, ManifestError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))?;
    let module = module_label(root_name, path);
    PackageJsonParser.parse(&content, path, &module)
}
