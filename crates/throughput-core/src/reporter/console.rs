//! Console reporter for analysis results
//!
//! Reproduces the fixed report layout of the original analysis tooling,
//! character for character, so existing scripts that scrape the output keep
//! working.

use anyhow::Result;
use std::fmt::Write;

use crate::analysis::FileReport;
use crate::stats::StatsSummary;

/// Console format reporter
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Format an analysis report for console output
    pub fn format(report: &FileReport) -> Result<String> {
        let mut output = String::new();

        Self::format_summary(&mut output, &report.total)?;
        writeln!(output, "==== 99% values ====")?;
        Self::format_summary(&mut output, &report.central_99)?;
        writeln!(output, "==== 68% values ====")?;
        Self::format_summary(&mut output, &report.central_68)?;

        writeln!(output)?;
        writeln!(
            output,
            "Values above 99% (avg+std):          {:.0} % ({}/{})",
            report.above_99.percent(),
            report.above_99.count,
            report.above_99.total
        )?;
        writeln!(
            output,
            "Values above 68% (avg+std):          {:.0} % ({}/{})",
            report.above_68.percent(),
            report.above_68.count,
            report.above_68.total
        )?;

        Ok(output)
    }

    fn format_summary(output: &mut String, summary: &StatsSummary) -> Result<()> {
        writeln!(output, "Min:           {:.2} ms", summary.min)?;
        writeln!(output, "Max:           {:.2} ms", summary.max)?;
        writeln!(
            output,
            "Average:       {:.2} +/- {:.2} ms",
            summary.mean, summary.std_dev
        )?;
        Ok(())
    }
}
