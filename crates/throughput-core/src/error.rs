use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No valid samples in {0}")]
    NoValidSamples(PathBuf),

    #[error("Trimming to the central {percent:.0}% of {len} samples leaves nothing to analyse")]
    DegenerateTrim { percent: f64, len: usize },

    #[error("Cannot summarise an empty value set")]
    EmptySummary,
}
