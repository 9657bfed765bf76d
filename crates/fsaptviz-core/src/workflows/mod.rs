//! High-level entry points that tie the data model and the classifier together.
//!
//! - [`analyze`] - One call from an analysis payload to summary, report, color map and legend
//! - [`export`] - CSV and JSON writers for a finished analysis

pub mod analyze;
pub mod export;
