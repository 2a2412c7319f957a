//! JSON reporter for analysis results

use crate::analysis::FileReport;
use anyhow::Result;

/// JSON format reporter
pub struct JsonReporter;

impl JsonReporter {
    /// Format an analysis report as JSON
    ///
    /// # Arguments
    ///
    /// * `report` - The analysis report to format
    /// * `pretty` - Whether to pretty-print the JSON
    pub fn format(report: &FileReport, pretty: bool) -> Result<String> {
        let output = if pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_values;

    fn create_test_report() -> FileReport {
        analyze_values(&[10.0, 20.0, 30.0, 1000.0, 40.0]).unwrap()
    }

    #[test]
    fn test_json_format_compact() {
        let output = JsonReporter::format(&create_test_report(), false).unwrap();

        assert!(!output.contains('\n'));
        assert!(output.contains("\"count\":5"));
    }

    #[test]
    fn test_json_format_pretty() {
        let output = JsonReporter::format(&create_test_report(), true).unwrap();

        assert!(output.contains('\n'));
        assert!(output.contains("  "));
    }

    #[test]
    fn test_json_roundtrip() {
        let report = create_test_report();
        let json = JsonReporter::format(&report, false).unwrap();
        let parsed: FileReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.total.count, report.total.count);
        assert_eq!(parsed.above_99, report.above_99);
    }
}
