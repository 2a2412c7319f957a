//! Throughput file analyser binary
//!
//! Analyses one or more comma-delimited measurement files and prints a
//! statistics report per file. Progress and errors go to stderr; stdout
//! carries only the reports.

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use anyhow::Result;

use throughput_core::analysis::analyze_values;
use throughput_core::parser::load_values;
use throughput_core::reporter::{OutputFormat, Reporter};

#[derive(Parser, Debug)]
#[command(name = "throughput-cli")]
#[command(version, about = "Compute trimmed statistics over throughput measurement files")]
struct Args {
    /// Throughput file(s) to be analysed
    #[arg(required = true)]
    filenames: Vec<PathBuf>,

    /// Output format: console or json
    #[arg(long, default_value = "console")]
    format: String,
}

fn main() {
    let args = Args::parse();

    // All logging goes to stderr so stdout stays parseable
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let format = match args.format.as_str() {
        "console" => OutputFormat::Console,
        "json" => OutputFormat::Json,
        "json-pretty" => OutputFormat::JsonPretty,
        other => {
            eprintln!("Unknown format: {}. Use 'console', 'json' or 'json-pretty'", other);
            std::process::exit(2);
        }
    };
    let reporter = Reporter::new(format);

    // Per-file failures are reported and must not stop the remaining files
    let mut failed = false;
    for filename in &args.filenames {
        if let Err(err) = process_file(filename, &reporter) {
            tracing::error!("{:#}", err);
            failed = true;
        }
    }

    if failed {
        std::process::exit(1);
    }
}

fn process_file(filename: &Path, reporter: &Reporter) -> Result<()> {
    tracing::info!("Loading {} ...", filename.display());
    let values = load_values(filename)?;

    tracing::info!("Analysing {} ...", filename.display());
    let report = analyze_values(&values)?;
    reporter.report(&report)?;
    Ok(())
}
