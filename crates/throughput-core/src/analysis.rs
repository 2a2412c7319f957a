//! Per-file analysis pipeline.
//!
//! Ties the pieces together: load samples, trim the distribution to its
//! central 99% and 68%, summarise each view and count how many of the
//! original values sit above each trimmed mean + std-dev threshold.
//!
//! The outlier counters deliberately test the *full* population against the
//! *trimmed* estimates: the trimmed mean and std-dev are robust against tail
//! events, so the counts answer "what fraction of all samples are tail
//! events relative to a robust expectation".

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::parser::load_values;
use crate::stats::{count_above, middle_slice, StatsSummary};

/// Fraction of the sorted distribution retained by the wide trim.
const WIDE_TRIM: f64 = 0.99;
/// Fraction retained by the narrow trim (roughly one standard deviation).
const NARROW_TRIM: f64 = 0.68;

/// Number of values above an adaptive threshold, out of the full population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlierCount {
    pub count: usize,
    pub total: usize,
}

impl OutlierCount {
    /// Share of the population above the threshold, in percent.
    pub fn percent(&self) -> f64 {
        self.count as f64 * 100.0 / self.total as f64
    }
}

/// The complete analysis of one input file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    /// Statistics over every valid sample.
    pub total: StatsSummary,
    /// Statistics over the central 99% of the sorted distribution.
    pub central_99: StatsSummary,
    /// Statistics over the central 68% of the sorted distribution.
    pub central_68: StatsSummary,
    /// Samples above the 99%-trimmed mean + std-dev.
    pub above_99: OutlierCount,
    /// Samples above the 68%-trimmed mean + std-dev.
    pub above_68: OutlierCount,
}

/// Analyse a vector of measured values.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptySummary`] for an empty input and
/// [`AnalysisError::DegenerateTrim`] when the input is too small for a trim
/// to leave anything behind.
pub fn analyze_values(values: &[f64]) -> Result<FileReport, AnalysisError> {
    let total = StatsSummary::from_values(values).ok_or(AnalysisError::EmptySummary)?;

    let wide = middle_slice(values, WIDE_TRIM)?;
    let narrow = middle_slice(values, NARROW_TRIM)?;
    let central_99 = StatsSummary::from_values(&wide).ok_or(AnalysisError::EmptySummary)?;
    let central_68 = StatsSummary::from_values(&narrow).ok_or(AnalysisError::EmptySummary)?;

    let n = values.len();
    let above_99 = OutlierCount {
        count: count_above(values, central_99.mean + central_99.std_dev),
        total: n,
    };
    let above_68 = OutlierCount {
        count: count_above(values, central_68.mean + central_68.std_dev),
        total: n,
    };

    Ok(FileReport {
        total,
        central_99,
        central_68,
        above_99,
        above_68,
    })
}

/// Load a measurement file and analyse it.
///
/// # Errors
///
/// Returns [`AnalysisError::Io`] if the file cannot be read,
/// [`AnalysisError::NoValidSamples`] if no line parses as a record, plus
/// anything [`analyze_values`] reports.
pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<FileReport, AnalysisError> {
    analyze_values(&load_values(path)?)
}
