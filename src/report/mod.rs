//! Report assembly and output
//!
//! This module provides:
//! - The missing-data policy shared by every column
//! - Row assembly joining declarations with analysis results
//! - Semicolon-delimited rendering and the final file write

mod missing;
mod row;
mod writer;

pub use missing::{format_decimal, Field, UNKNOWN};
pub use row::{assemble_rows, ReportRow};
pub use writer::{header, report_file_name, Report, DELIMITER};
