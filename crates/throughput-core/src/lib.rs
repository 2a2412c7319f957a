//! Statistics over delimited throughput/latency measurement files
//!
//! This crate implements the analysis pipeline behind the `throughput-cli`
//! binary: parse a comma-delimited measurement file, trim the sorted
//! distribution to its central 99% and 68%, and report min/max/mean/std-dev
//! plus adaptive outlier counts.
//!
//! # Example
//!
//! ```
//! use throughput_core::{analysis::analyze_values, reporter::{OutputFormat, Reporter}};
//!
//! # fn example() -> anyhow::Result<()> {
//! let values = vec![10.0, 20.0, 30.0, 1000.0, 40.0];
//! let report = analyze_values(&values)?;
//!
//! let reporter = Reporter::new(OutputFormat::Console);
//! reporter.report(&report)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Input format
//!
//! One record per line, three comma-separated floats (timestamp, sequence id,
//! value in milliseconds). Empty lines, comment lines and malformed lines are
//! silently skipped; only the third field is analysed.

pub mod analysis;
pub mod error;
pub mod parser;
pub mod reporter;
pub mod stats;

// Re-export main types for convenience
pub use analysis::{analyze_file, analyze_values, FileReport, OutlierCount};
pub use error::AnalysisError;
pub use parser::{extract_values, load_samples, load_values, parse_line, Sample};
pub use reporter::{OutputFormat, Reporter};
pub use stats::{count_above, middle_slice, StatsSummary};
