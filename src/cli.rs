//! CLI argument parsing module for depreport

use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::Duration;

/// Parse a timeout given in whole seconds
fn parse_timeout(s: &str) -> Result<Duration, String> {
    let secs: u64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid number of seconds: {}", s))?;
    if secs == 0 {
        return Err("timeout must be at least 1 second".to_string());
    }
    Ok(Duration::from_secs(secs))
}

/// Split a command line given as a single argument on whitespace
pub fn split_command(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_string).collect()
}

/// Dependency drift and Node.js compatibility report for npm projects
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depreport",
    version,
    about = "Dependency drift and Node.js compatibility report for npm projects"
)]
pub struct CliArgs {
    /// Root directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Directory the report is written to (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Config file (default: depreport.toml in the scanned root, if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Node.js major version to report compatibility for (can be specified multiple times)
    #[arg(long = "node", value_name = "MAJOR", action = ArgAction::Append)]
    pub node_versions: Vec<u64>,

    /// Directory name never descended into (can be specified multiple times)
    #[arg(long, value_name = "NAME", action = ArgAction::Append)]
    pub exclude_dir: Vec<String>,

    /// npm registry base URL
    #[arg(long, value_name = "URL")]
    pub registry_url: Option<String>,

    /// Registry request timeout in seconds (default: no explicit timeout)
    #[arg(long, value_name = "SECS", value_parser = parse_timeout)]
    pub timeout: Option<Duration>,

    /// Drift analysis command, split on whitespace
    #[arg(long, value_name = "CMD")]
    pub drift_command: Option<String>,

    /// Outdated check command, split on whitespace
    #[arg(long, value_name = "CMD")]
    pub outdated_command: Option<String>,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the summary without colors or status glyphs
    #[arg(long)]
    pub no_color: bool,
}
