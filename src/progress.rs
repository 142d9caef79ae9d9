//! Progress display for manifest analysis
//!
//! A spinner runs while the tree is walked, then a bar advances once per
//! manifest and keeps a running tally of analyzed and skipped manifests.

use crate::domain::ManifestOutcome;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

const LOCATE_TEMPLATE: &str = "{spinner:.cyan} Locating package.json under {msg}";
const ANALYZE_TEMPLATE: &str =
    "{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {prefix:.bold} {msg:.dim}";

/// Progress reporter for one analysis run
pub struct AnalysisProgress {
    /// Disabled in quiet and JSON mode
    enabled: bool,
    bar: Option<ProgressBar>,
    analyzed: usize,
    skipped: usize,
}

impl AnalysisProgress {
    /// Create a progress reporter
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            bar: None,
            analyzed: 0,
            skipped: 0,
        }
    }

    /// Create a reporter that draws nothing but still keeps the tally
    pub fn hidden() -> Self {
        Self::new(false)
    }

    /// Spinner shown while manifests are located below `root`
    pub fn locating(&mut self, root: &Path) {
        if !self.enabled {
            return;
        }

        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template(LOCATE_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.set_message(root.display().to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.replace_bar(Some(spinner));
    }

    /// Replace the spinner with a bar over `total` manifests
    ///
    /// An empty tree gets no bar at all.
    pub fn begin_manifests(&mut self, total: usize) {
        self.analyzed = 0;
        self.skipped = 0;
        if !self.enabled || total == 0 {
            self.replace_bar(None);
            return;
        }

        let bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template(ANALYZE_TEMPLATE)
            .map(|s| s.progress_chars("=> "))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        bar.set_message(self.tally());
        bar.enable_steady_tick(Duration::from_millis(100));
        self.replace_bar(Some(bar));
    }

    /// Show which module is being analyzed
    pub fn manifest_started(&self, module: &str) {
        if let Some(bar) = &self.bar {
            bar.set_prefix(module.to_string());
        }
    }

    /// Count a finished manifest and advance the bar
    pub fn manifest_finished(&mut self, outcome: &ManifestOutcome) {
        if outcome.is_skipped() {
            self.skipped += 1;
        } else {
            self.analyzed += 1;
        }
        if let Some(bar) = &self.bar {
            bar.set_message(self.tally());
            bar.inc(1);
        }
    }

    /// Running tally, e.g. `2 analyzed, 1 skipped`
    pub fn tally(&self) -> String {
        format!("{} analyzed, {} skipped", self.analyzed, self.skipped)
    }

    /// Remove whatever is on screen
    pub fn clear(&mut self) {
        self.replace_bar(None);
    }

    fn replace_bar(&mut self, bar: Option<ProgressBar>) {
        if let Some(old) = self.bar.take() {
            old.finish_and_clear();
        }
        self.bar = bar;
    }
}
