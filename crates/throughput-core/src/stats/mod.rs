//! Statistical reductions over measurement values
//!
//! This module provides the building blocks of the analysis: summary
//! statistics, central-slice trimming and threshold counting.
//!
//! # Examples
//!
//! ```
//! use throughput_core::stats::{count_above, middle_slice, StatsSummary};
//!
//! let values = vec![10.0, 20.0, 30.0, 1000.0, 40.0];
//!
//! // Central 99% of the sorted distribution
//! let central = middle_slice(&values, 0.99).unwrap();
//!
//! let summary = StatsSummary::from_values(&central).unwrap();
//! let outliers = count_above(&values, summary.mean + summary.std_dev);
//! assert_eq!(outliers, 2);
//! ```

pub mod summary;
pub mod trim;

// Re-export main types and functions
pub use summary::StatsSummary;
pub use trim::{count_above, middle_slice};
