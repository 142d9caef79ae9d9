//! Semicolon-delimited report output
//!
//! The whole report is rendered in memory and written in one go once every
//! manifest has been processed.

use super::row::ReportRow;
use crate::domain::NodeRuntime;
use crate::error::IoError;
use std::path::{Path, PathBuf};

/// Column delimiter
pub const DELIMITER: char = ';';

const LEADING_COLUMNS: &[&str] = &[
    "Module",
    "Dependency",
    "Type",
    "Current version",
    "Libyear latest version",
    "NPM latest version",
    "Wanted version",
    "Easy upgrade",
    "Unused",
];

const TRAILING_COLUMNS: &[&str] = &["Drift", "Pulse", "Releases", "Major", "Minor", "Patch"];

/// File name of the report for a root directory name
pub fn report_file_name(root_name: &str) -> String {
    format!("analysis-result-{}.csv", root_name)
}

/// Header cells for the given runtime columns
pub fn header(runtimes: &[NodeRuntime]) -> Vec<String> {
    LEADING_COLUMNS
        .iter()
        .map(|c| c.to_string())
        .chain(runtimes.iter().map(NodeRuntime::column_name))
        .chain(TRAILING_COLUMNS.iter().map(|c| c.to_string()))
        .collect()
}

/// Quote a cell if it contains the delimiter, a quote or a line break
fn escape_cell(cell: &str) -> String {
    if cell.contains([DELIMITER, '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn push_line<'a>(out: &mut String, cells: impl IntoIterator<Item = &'a str>) {
    let line: Vec<String> = cells.into_iter().map(escape_cell).collect();
    out.push_str(&line.join(&DELIMITER.to_string()));
    out.push('\n');
}

/// Accumulated report rows for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    runtimes: Vec<NodeRuntime>,
    rows: Vec<ReportRow>,
}

impl Report {
    /// Create an empty report with the given runtime columns
    pub fn new(runtimes: Vec<NodeRuntime>) -> Self {
        Self {
            runtimes,
            rows: Vec::new(),
        }
    }

    /// Append rows
    pub fn extend(&mut self, rows: impl IntoIterator<Item = ReportRow>) {
        self.rows.extend(rows);
    }

    /// Rows collected so far
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Render header and rows
    pub fn render(&self) -> String {
        let mut out = String::new();
        let header = header(&self.runtimes);
        push_line(&mut out, header.iter().map(String::as_str));
        for row in &self.rows {
            push_line(&mut out, row.cells());
        }
        out
    }

    /// Write the report to `dir`, returning the file path
    pub fn write_to(&self, dir: &Path, root_name: &str) -> Result<PathBuf, IoError> {
        let path = dir.join(report_file_name(root_name));
        std::fs::write(&path, self.render()).map_err(|e| IoError::generic(&path, e))?;
        Ok(path)
    }
}
