//! Analysis orchestrator for coordinating the entire report workflow
//!
//! This module provides:
//! - Workflow coordination: locate → parse → drift → outdated → compat → join
//! - Manifest skipping when the drift analysis yields no data
//! - The single report write once every manifest is processed
//!
//! Every external call is awaited before the next one starts.

use crate::analyzer::{
    DriftAnalyzer, DriftOutcome, OutdatedChecker, SystemDriftAnalyzer, SystemOutdatedChecker,
};
use crate::compat::CompatibilityResolver;
use crate::config::Settings;
use crate::domain::{module_label, ManifestOutcome, RunSummary};
use crate::error::AppError;
use crate::manifest::{locate_manifests, parse_manifest};
use crate::progress::AnalysisProgress;
use crate::registry::{HttpClient, NpmRegistry, RegistryClient};
use crate::report::{assemble_rows, Report, ReportRow};
use std::path::Path;

/// Orchestrator for one analysis run
pub struct Orchestrator<'a> {
    settings: &'a Settings,
    registry: &'a dyn RegistryClient,
    drift: &'a dyn DriftAnalyzer,
    outdated: &'a dyn OutdatedChecker,
    show_progress: bool,
}

/// Result of running the orchestrator
#[derive(Debug)]
pub struct OrchestratorResult {
    /// What happened to each manifest, plus the report path
    pub summary: RunSummary,
    /// The report as written
    pub report: Report,
}

/// The npm registry and command-backed analyzers a real run uses
pub struct SystemAdapters {
    pub registry: NpmRegistry,
    pub drift: SystemDriftAnalyzer,
    pub outdated: SystemOutdatedChecker,
}

impl SystemAdapters {
    /// Build the adapters described by the settings
    pub fn from_settings(settings: &Settings) -> Result<Self, AppError> {
        let client = HttpClient::with_timeout(settings.timeout)?;
        Ok(Self {
            registry: NpmRegistry::with_base_url(client, settings.registry_url.as_str()),
            drift: SystemDriftAnalyzer::with_command(settings.drift_command.clone()),
            outdated: SystemOutdatedChecker::with_command(settings.outdated_command.clone()),
        })
    }

    /// Orchestrator wired to these adapters
    pub fn orchestrator<'a>(&'a self, settings: &'a Settings) -> Orchestrator<'a> {
        Orchestrator::new(settings, &self.registry, &self.drift, &self.outdated)
    }
}

/// Rows for one manifest, or the reason none were produced
enum ManifestRows {
    Rows(Vec<ReportRow>),
    Skipped(String),
}

impl<'a> Orchestrator<'a> {
    /// Create an orchestrator over the given adapters, without progress display
    pub fn new(
        settings: &'a Settings,
        registry: &'a dyn RegistryClient,
        drift: &'a dyn DriftAnalyzer,
        outdated: &'a dyn OutdatedChecker,
    ) -> Self {
        Self {
            settings,
            registry,
            drift,
            outdated,
            show_progress: false,
        }
    }

    /// Enable or disable the progress display
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Run the analysis and write the report
    pub async fn run(&self) -> Result<OrchestratorResult, AppError> {
        let settings = self.settings;
        let mut progress = AnalysisProgress::new(self.show_progress);
        let mut summary = RunSummary::new(&settings.root);
        let mut report = Report::new(settings.node_versions.clone());

        // Step 1: Locate manifest files
        progress.locating(&settings.root);
        let manifests = match locate_manifests(&settings.root, &settings.exclude_dirs) {
            Ok(manifests) => manifests,
            Err(e) => {
                progress.clear();
                return Err(e.into());
            }
        };
        tracing::info!(
            root = %settings.root.display(),
            count = manifests.len(),
            "located manifests"
        );

        // Step 2: Analyze each manifest in turn
        progress.begin_manifests(manifests.len());
        for path in &manifests {
            let module = module_label(&settings.root_name, path);
            progress.manifest_started(&module);

            let outcome = match self.analyze_manifest(path).await {
                Ok(ManifestRows::Rows(rows)) => {
                    let outcome = ManifestOutcome::analyzed(path, &module, rows.len());
                    report.extend(rows);
                    outcome
                }
                Ok(ManifestRows::Skipped(reason)) => {
                    tracing::warn!(path = %path.display(), reason = %reason, "skipping manifest");
                    ManifestOutcome::skipped(path, &module, reason)
                }
                Err(e) => {
                    progress.clear();
                    return Err(e);
                }
            };
            progress.manifest_finished(&outcome);
            summary.add(outcome);
        }
        progress.clear();
        tracing::debug!(tally = %progress.tally(), "manifests processed");

        // Step 3: Write the report
        let output = report.write_to(&settings.output_dir, &settings.root_name)?;
        tracing::info!(path = %output.display(), rows = report.rows().len(), "report written");
        summary.output = Some(output);

        Ok(OrchestratorResult { summary, report })
    }

    /// Produce the rows of one manifest
    ///
    /// A manifest that cannot be read or parsed is fatal; anything the drift
    /// analysis rejects only skips this manifest.
    async fn analyze_manifest(&self, path: &Path) -> Result<ManifestRows, AppError> {
        let dependencies = parse_manifest(path, &self.settings.root_name)?;
        tracing::debug!(path = %path.display(), count = dependencies.len(), "parsed manifest");

        let dir = path.parent().unwrap_or(Path::new("."));

        let drift = match self.drift.analyze(dir).await {
            Ok(DriftOutcome::Records(records)) => records,
            Ok(DriftOutcome::Diagnostic(text)) => {
                return Ok(ManifestRows::Skipped(format!(
                    "drift analysis reported: {}",
                    text
                )));
            }
            Ok(DriftOutcome::NotAList(kind)) => {
                return Ok(ManifestRows::Skipped(format!(
                    "drift analysis returned a JSON {} instead of a list",
                    kind
                )));
            }
            Err(e) => return Ok(ManifestRows::Skipped(e.to_string())),
        };

        let freshness = self.outdated.check_or_empty(dir).await;

        let runtimes = self.settings.node_versions.clone();
        let resolver = CompatibilityResolver::new(self.registry, runtimes);
        let mut compatibility = Vec::with_capacity(dependencies.len());
        for dep in &dependencies {
            tracing::trace!(package = %dep.name, "resolving compatibility");
            compatibility.push(resolver.resolve(&dep.name).await);
        }

        Ok(ManifestRows::Rows(assemble_rows(
            &dependencies,
            &drift,
            &freshness,
            &compatibility,
            resolver.runtimes(),
        )))
    }
}
