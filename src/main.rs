//! depreport - Dependency drift and Node.js compatibility report
//!
//! Scans a directory tree for package.json files and writes one
//! semicolon-delimited report row per declared dependency.

use clap::Parser;
use depreport::cli::CliArgs;
use depreport::config::Settings;
use depreport::logging;
use depreport::orchestrator::SystemAdapters;
use depreport::output::{create_formatter, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    logging::init(args.verbose, args.quiet);

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let settings = Settings::resolve(&args)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        root = %settings.root.display(),
        "starting analysis"
    );

    let adapters = SystemAdapters::from_settings(&settings)?;
    let result = adapters
        .orchestrator(&settings)
        .with_progress(!args.quiet && !args.json)
        .run()
        .await?;

    let config = OutputConfig::from_cli(args.json, args.verbose, args.quiet, args.no_color);
    let formatter = create_formatter(config);
    let mut stdout = io::stdout().lock();
    formatter.format(&result.summary, &mut stdout)?;
    stdout.flush()?;

    if result.summary.skipped_count() > 0 {
        // Report written, but some manifests contributed no rows
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
