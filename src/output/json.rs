//! JSON output formatter for machine processing

use crate::domain::{ManifestOutcome, RunSummary};
use crate::output::SummaryFormatter;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

/// JSON representation of the full summary
#[derive(Serialize)]
struct JsonOutput<'a> {
    root: &'a Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<&'a Path>,
    totals: JsonTotals,
    manifests: &'a [ManifestOutcome],
}

/// Summary statistics
#[derive(Serialize)]
struct JsonTotals {
    manifests: usize,
    analyzed: usize,
    skipped: usize,
    rows: usize,
}

impl SummaryFormatter for JsonFormatter {
    fn format(&self, summary: &RunSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            root: &summary.root,
            output: summary.output.as_deref(),
            totals: JsonTotals {
                manifests: summary.manifests.len(),
                analyzed: summary.analyzed_count(),
                skipped: summary.skipped_count(),
                rows: summary.total_rows(),
            },
            manifests: &summary.manifests,
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
