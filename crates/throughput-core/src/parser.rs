//! Tolerant parsing of throughput measurement files.
//!
//! The input format is one record per line: three comma-separated floats
//! (timestamp, sequence id, measured value). Files routinely carry comments,
//! shell prompts and other annotation noise, so anything that does not parse
//! as a record is skipped rather than treated as an error.

use std::fs;
use std::path::Path;

use crate::error::AnalysisError;

/// Leading characters that mark a line as annotation rather than data.
const SKIP_PREFIXES: &[char] = &['#', '$', ':', '<', '.', ';', '\''];

/// One parsed measurement record.
///
/// Only `value` (the third field) is used by the analysis; the other two are
/// kept so a record round-trips losslessly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub timestamp: f64,
    pub sequence: f64,
    pub value: f64,
}

/// Classify one input line.
///
/// Returns `Some(sample)` for a well-formed record and `None` for anything
/// else: blank lines, lines starting with a marker character, lines that do
/// not split into exactly three comma-separated fields, and lines with a
/// field that is not a float. Never fails.
///
/// # Examples
///
/// ```
/// use throughput_core::parser::parse_line;
///
/// let sample = parse_line("1.0, 2, 15.5").unwrap();
/// assert_eq!(sample.value, 15.5);
///
/// assert!(parse_line("# comment").is_none());
/// assert!(parse_line("1,2").is_none());
/// ```
pub fn parse_line(line: &str) -> Option<Sample> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(SKIP_PREFIXES) {
        return None;
    }

    let mut fields = line.split(',');
    let timestamp: f64 = fields.next()?.trim().parse().ok()?;
    let sequence: f64 = fields.next()?.trim().parse().ok()?;
    let value: f64 = fields.next()?.trim().parse().ok()?;
    if fields.next().is_some() {
        return None;
    }

    Some(Sample {
        timestamp,
        sequence,
        value,
    })
}

/// Load all valid samples from a file, in file order.
///
/// Skipped lines are counted and traced but otherwise ignored.
///
/// # Errors
///
/// Returns [`AnalysisError::Io`] naming the file if it cannot be read.
pub fn load_samples<P: AsRef<Path>>(path: P) -> Result<Vec<Sample>, AnalysisError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| AnalysisError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut samples = Vec::new();
    let mut skipped = 0usize;
    for line in content.lines() {
        match parse_line(line) {
            Some(sample) => samples.push(sample),
            None => skipped += 1,
        }
    }

    tracing::debug!(
        "{}: {} samples, {} lines skipped",
        path.display(),
        samples.len(),
        skipped
    );
    Ok(samples)
}

/// Extract the measured values (third field) from a sample set, in order.
pub fn extract_values(samples: &[Sample]) -> Vec<f64> {
    samples.iter().map(|s| s.value).collect()
}

/// Load a measurement file and extract its values, in file order.
///
/// # Errors
///
/// Returns [`AnalysisError::Io`] if the file cannot be read and
/// [`AnalysisError::NoValidSamples`] naming the file if no line parses as a
/// record.
pub fn load_values<P: AsRef<Path>>(path: P) -> Result<Vec<f64>, AnalysisError> {
    let path = path.as_ref();
    let samples = load_samples(path)?;
    if samples.is_empty() {
        return Err(AnalysisError::NoValidSamples(path.to_path_buf()));
    }
    Ok(extract_values(&samples))
}
