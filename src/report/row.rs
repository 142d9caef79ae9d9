//! Report rows and the per-dependency join

use super::missing::Field;
use crate::analyzer::{DriftRecord, FreshnessRecord};
use crate::compat::{CompatibilityResult, RuntimeCompatibility};
use crate::domain::{Dependency, NodeRuntime};

/// One fully rendered report row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub module: String,
    pub dependency: String,
    pub kind: String,
    pub current_version: String,
    pub libyear_latest: String,
    pub npm_latest: String,
    pub wanted: String,
    pub easy_upgrade: String,
    pub unused: String,
    /// One cell per target runtime, in column order
    pub compatibility: Vec<String>,
    pub drift: String,
    pub pulse: String,
    pub releases: String,
    pub major: String,
    pub minor: String,
    pub patch: String,
}

impl ReportRow {
    /// Join one declaration with whatever analysis data matched it
    pub fn assemble(
        dependency: &Dependency,
        drift: Option<&DriftRecord>,
        freshness: Option<&FreshnessRecord>,
        compatibility: Option<&CompatibilityResult>,
        runtimes: &[NodeRuntime],
    ) -> Self {
        let compatibility = runtimes
            .iter()
            .map(|runtime| match compatibility.and_then(|c| c.get(*runtime)) {
                Some(found) => found.to_string(),
                None => RuntimeCompatibility::Unavailable.to_string(),
            })
            .collect();

        Self {
            module: dependency.module.clone(),
            dependency: dependency.name.clone(),
            kind: dependency.kind.group_key().to_string(),
            current_version: dependency.range.clone(),
            libyear_latest: Field::LibyearLatest
                .text(drift.and_then(|d| d.available.as_deref())),
            npm_latest: Field::NpmLatest.text(freshness.and_then(|f| f.latest.as_deref())),
            wanted: Field::Wanted.text(freshness.and_then(|f| f.package_wanted.as_deref())),
            easy_upgrade: Field::EasyUpgrade.flag(freshness.and_then(|f| f.easy_upgrade)),
            unused: Field::Unused.flag(freshness.and_then(|f| f.unused)),
            compatibility,
            drift: Field::Drift.decimal(drift.and_then(|d| d.drift)),
            pulse: Field::Pulse.decimal(drift.and_then(|d| d.pulse)),
            releases: Field::Releases.count(drift.and_then(|d| d.releases)),
            major: Field::Major.count(drift.and_then(|d| d.major)),
            minor: Field::Minor.count(drift.and_then(|d| d.minor)),
            patch: Field::Patch.count(drift.and_then(|d| d.patch)),
        }
    }

    /// Cells in column order
    pub fn cells(&self) -> Vec<&str> {
        let mut cells = vec![
            self.module.as_str(),
            self.dependency.as_str(),
            self.kind.as_str(),
            self.current_version.as_str(),
            self.libyear_latest.as_str(),
            self.npm_latest.as_str(),
            self.wanted.as_str(),
            self.easy_upgrade.as_str(),
            self.unused.as_str(),
        ];
        cells.extend(self.compatibility.iter().map(String::as_str));
        cells.extend([
            self.drift.as_str(),
            self.pulse.as_str(),
            self.releases.as_str(),
            self.major.as_str(),
            self.minor.as_str(),
            self.patch.as_str(),
        ]);
        cells
    }
}

/// Build one row per declaration, matching analysis data by exact name
///
/// The first matching record wins.
pub fn assemble_rows(
    dependencies: &[Dependency],
    drift: &[DriftRecord],
    freshness: &[FreshnessRecord],
    compatibility: &[CompatibilityResult],
    runtimes: &[NodeRuntime],
) -> Vec<ReportRow> {
    dependencies
        .iter()
        .map(|dep| {
            ReportRow::assemble(
                dep,
                drift.iter().find(|d| d.dependency == dep.name),
                freshness.iter().find(|f| f.module_name == dep.name),
                compatibility.iter().find(|c| c.dependency == dep.name),
                runtimes,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runtimes() -> Vec<NodeRuntime> {
        NodeRuntime::defaults()
    }

    fn full_drift() -> DriftRecord {
        DriftRecord {
            dependency: "express".to_string(),
            available: Some("4.19.2".to_string()),
            drift: Some(1.23456),
            pulse: Some(0.1),
            releases: Some(7),
            major: Some(0),
            minor: Some(1),
            patch: Some(4),
        }
    }

    fn full_freshness() -> FreshnessRecord {
        FreshnessRecord {
            module_name: "express".to_string(),
            latest: Some("4.19.2".to_string()),
            package_wanted: Some("4.18.3".to_string()),
            easy_upgrade: Some(true),
            unused: Some(false),
        }
    }

    fn compat() -> CompatibilityResult {
        CompatibilityResult {
            dependency: "express".to_string(),
            runtimes: vec![
                (NodeRuntime(14), RuntimeCompatibility::Version("4.18.2".to_string())),
                (NodeRuntime(16), RuntimeCompatibility::Version("4.19.2".to_string())),
                (NodeRuntime(18), RuntimeCompatibility::Version("4.19.2".to_string())),
                (NodeRuntime(20), RuntimeCompatibility::NotInformed),
            ],
        }
    }

    #[test]
    fn test_assemble_full_row() {
        let dep = Dependency::production("express", "^4.18.2", "shop/api");
        let row = ReportRow::assemble(
            &dep,
            Some(&full_drift()),
            Some(&full_freshness()),
            Some(&compat()),
            &runtimes(),
        );

        assert_eq!(
            row.cells(),
            vec![
                "shop/api",
                "express",
                "dependencies",
                "^4.18.2",
                "4.19.2",
                "4.19.2",
                "4.18.3",
                "true",
                "false",
                "4.18.2",
                "4.19.2",
                "4.19.2",
                "Not informed",
                "1,23",
                "0,10",
                "7",
                "0",
                "1",
                "4",
            ]
        );
    }

    #[test]
    fn test_assemble_without_matches_uses_defaults() {
        let dep = Dependency::development("jest", "^29.0.0", "shop");
        let row = ReportRow::assemble(&dep, None, None, None, &runtimes());

        assert_eq!(row.dependency, "jest");
        assert_eq!(row.kind, "devDependencies");
        assert_eq!(row.libyear_latest, "Unknown");
        assert_eq!(row.npm_latest, "Unknown");
        assert_eq!(row.wanted, "Unknown");
        assert_eq!(row.easy_upgrade, "false");
        assert_eq!(row.unused, "false");
        assert_eq!(row.compatibility, vec!["N/A"; 4]);
        assert_eq!(row.drift, "Unknown");
        assert_eq!(row.pulse, "Unknown");
        assert_eq!(row.releases, "0");
        assert_eq!(row.patch, "0");
    }

    #[test]
    fn test_assemble_rows_joins_by_name() {
        let deps = vec![
            Dependency::production("express", "^4.18.2", "shop"),
            Dependency::development("jest", "^29.0.0", "shop"),
        ];
        let drift = vec![DriftRecord::new("jest"), full_drift()];
        let freshness = vec![full_freshness()];
        let compat = vec![compat()];

        let rows = assemble_rows(&deps, &drift, &freshness, &compat, &runtimes());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].dependency, "express");
        assert_eq!(rows[0].drift, "1,23");
        assert_eq!(rows[0].wanted, "4.18.3");
        assert_eq!(rows[1].dependency, "jest");
        assert_eq!(rows[1].drift, "Unknown");
        assert_eq!(rows[1].npm_latest, "Unknown");
    }

    #[test]
    fn test_first_match_wins() {
        let deps = vec![Dependency::production("a", "1", "m")];
        let mut first = DriftRecord::new("a");
        first.major = Some(1);
        let mut second = DriftRecord::new("a");
        second.major = Some(9);

        let rows = assemble_rows(&deps, &[first, second], &[], &[], &runtimes());
        assert_eq!(rows[0].major, "1");
    }

    #[test]
    fn test_name_match_is_exact() {
        let deps = vec![Dependency::production("React", "^18.0.0", "m")];
        let rows = assemble_rows(&deps, &[DriftRecord::new("react")], &[], &[], &runtimes());
        assert_eq!(rows[0].releases, "0");
        assert_eq!(rows[0].dependency, "React");
    }
}
