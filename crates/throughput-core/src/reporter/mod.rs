//! Analysis report output
//!
//! Formats a [`FileReport`] for consumption: the fixed-layout console block
//! the original tooling printed, or JSON for machine consumers.
//!
//! # Example
//!
//! ```no_run
//! use throughput_core::analysis::analyze_file;
//! use throughput_core::reporter::{OutputFormat, Reporter};
//!
//! # fn example() -> anyhow::Result<()> {
//! let report = analyze_file("throughput.csv")?;
//!
//! let reporter = Reporter::new(OutputFormat::Console);
//! reporter.report(&report)?;
//!
//! // Or write to a file
//! Reporter::new(OutputFormat::Json).write_to_file(&report, "report.json")?;
//! # Ok(())
//! # }
//! ```

mod console;
mod json;

use anyhow::Result;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::analysis::FileReport;

pub use console::ConsoleReporter;
pub use json::JsonReporter;

/// Output format for analysis reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON format for machine parsing
    Json,
    /// Pretty-printed JSON
    JsonPretty,
    /// Fixed-layout console output
    #[default]
    Console,
}

/// Reporter for analysis results
pub struct Reporter {
    format: OutputFormat,
}

impl Reporter {
    /// Create a new reporter with the specified output format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Report results to stdout
    pub fn report(&self, report: &FileReport) -> Result<()> {
        let output = self.format_report(report)?;
        print!("{}", output);
        io::stdout().flush()?;
        Ok(())
    }

    /// Write results to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, report: &FileReport, path: P) -> Result<()> {
        let output = self.format_report(report)?;
        fs::write(path, output)?;
        Ok(())
    }

    /// Format results as a string
    pub fn format_report(&self, report: &FileReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => JsonReporter::format(report, false),
            OutputFormat::JsonPretty => JsonReporter::format(report, true),
            OutputFormat::Console => ConsoleReporter::format(report),
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}
