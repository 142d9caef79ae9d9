//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Counts of located, analyzed and skipped manifests
//! - Skipped manifests with their reasons
//! - The report path

use crate::domain::{ManifestOutcome, ManifestStatus, RunSummary};
use crate::output::{SummaryFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self::with_color(verbosity, true)
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn format_manifest(
        &self,
        manifest: &ManifestOutcome,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        match &manifest.status {
            ManifestStatus::Analyzed => {
                let rows = format!("{} rows", manifest.rows);
                if self.color {
                    writeln!(
                        writer,
                        "  {} {} {}",
                        "✓".green(),
                        manifest.module.bold(),
                        rows.dimmed()
                    )
                } else {
                    writeln!(writer, "  + {} {}", manifest.module, rows)
                }
            }
            ManifestStatus::Skipped { reason } => {
                if self.color {
                    writeln!(
                        writer,
                        "  {} {} ({})\n      {}",
                        "✗".yellow(),
                        manifest.module.bold(),
                        manifest.path.display(),
                        reason.dimmed()
                    )
                } else {
                    writeln!(
                        writer,
                        "  - {} ({})\n      {}",
                        manifest.module,
                        manifest.path.display(),
                        reason
                    )
                }
            }
        }
    }

    fn format_output_path(
        &self,
        summary: &RunSummary,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let Some(output) = &summary.output else {
            return Ok(());
        };
        if self.color {
            writeln!(
                writer,
                "{} {}",
                "Report:".bold(),
                output.display().to_string().cyan()
            )
        } else {
            writeln!(writer, "Report: {}", output.display())
        }
    }
}

impl SummaryFormatter for TextFormatter {
    fn format(&self, summary: &RunSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            return self.format_output_path(summary, writer);
        }

        if summary.manifests.is_empty() {
            writeln!(
                writer,
                "No package.json found under {}",
                summary.root.display()
            )?;
            return self.format_output_path(summary, writer);
        }

        let counts = format!(
            "{} manifests: {} analyzed, {} skipped, {} rows",
            summary.manifests.len(),
            summary.analyzed_count(),
            summary.skipped_count(),
            summary.total_rows()
        );
        if self.color {
            writeln!(writer, "{}", counts.bold())?;
        } else {
            writeln!(writer, "{}", counts)?;
        }

        let listed: Vec<&ManifestOutcome> = if self.verbosity == Verbosity::Verbose {
            summary.manifests.iter().collect()
        } else {
            summary.skipped().collect()
        };
        for manifest in listed {
            self.format_manifest(manifest, writer)?;
        }

        self.format_output_path(summary, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RunSummary {
        let mut summary = RunSummary::new("/work/shop");
        summary.add(ManifestOutcome::analyzed(
            "/work/shop/package.json",
            "shop",
            3,
        ));
        summary.add(ManifestOutcome::skipped(
            "/work/shop/api/package.json",
            "shop/api",
            "libyear exited with 1",
        ));
        summary.output = Some("/out/analysis-result-shop.csv".into());
        summary
    }

    fn render(formatter: &TextFormatter, summary: &RunSummary) -> String {
        let mut out = Vec::new();
        formatter.format(summary, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_normal_lists_skipped_only() {
        let formatter = TextFormatter::with_color(Verbosity::Normal, false);
        let text = render(&formatter, &sample());
        assert!(text.contains("2 manifests: 1 analyzed, 1 skipped, 3 rows"));
        assert!(text.contains("- shop/api (/work/shop/api/package.json)"));
        assert!(text.contains("libyear exited with 1"));
        assert!(!text.contains("+ shop 3 rows"));
        assert!(text.contains("Report: /out/analysis-result-shop.csv"));
    }

    #[test]
    fn test_verbose_lists_every_manifest() {
        let formatter = TextFormatter::with_color(Verbosity::Verbose, false);
        let text = render(&formatter, &sample());
        assert!(text.contains("+ shop 3 rows"));
        assert!(text.contains("- shop/api"));
    }

    #[test]
    fn test_quiet_prints_report_path_only() {
        let formatter = TextFormatter::with_color(Verbosity::Quiet, false);
        let text = render(&formatter, &sample());
        assert_eq!(text, "Report: /out/analysis-result-shop.csv\n");
    }

    #[test]
    fn test_no_manifests() {
        let summary = RunSummary::new("/work/empty");
        let formatter = TextFormatter::with_color(Verbosity::Normal, false);
        let text = render(&formatter, &summary);
        assert!(text.contains("No package.json found under /work/empty"));
    }

    #[test]
    fn test_colored_output_still_has_content() {
        let text = render(&TextFormatter::new(Verbosity::Normal), &sample());
        assert!(text.contains("shop/api"));
        assert!(text.contains("analysis-result-shop.csv"));
    }
}
