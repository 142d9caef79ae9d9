//! Dependency declaration structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which dependency group of package.json a declaration came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    /// Declared under `dependencies`
    Production,
    /// Declared under `devDependencies`
    Development,
}

impl DependencyKind {
    /// Returns the package.json key for this group
    pub fn group_key(&self) -> &'static str {
        match self {
            DependencyKind::Production => "dependencies",
            DependencyKind::Development => "devDependencies",
        }
    }

    /// Returns all groups in the order they are read from a manifest
    pub fn all() -> &'static [DependencyKind] {
        &[DependencyKind::Production, DependencyKind::Development]
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.group_key())
    }
}

/// A dependency declared in one manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Package name
    pub name: String,
    /// Declared version range, verbatim
    pub range: String,
    /// Production or development
    pub kind: DependencyKind,
    /// Module label of the owning manifest
    pub module: String,
}

impl Dependency {
    /// Creates a new dependency
    pub fn new(
        name: impl Into<String>,
        range: impl Into<String>,
        kind: DependencyKind,
        module: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            range: range.into(),
            kind,
            module: module.into(),
        }
    }

    /// Creates a new production dependency
    pub fn production(
        name: impl Into<String>,
        range: impl Into<String>,
        module: impl Into<String>,
    ) -> Self {
        Self::new(name, range, DependencyKind::Production, module)
    }

    /// Creates a new development dependency
    pub fn development(
        name: impl Into<String>,
        range: impl Into<String>,
        module: impl Into<String>,
    ) -> Self {
        Self::new(name, range, DependencyKind::Development, module)
    }

    /// Returns true if this is a devDependency
    pub fn is_dev(&self) -> bool {
        self.kind == DependencyKind::Development
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.range)?;
        if self.is_dev() {
            write!(f, " (dev)")?;
        }
        write!(f, " [{}]", self.module)
    }
}
