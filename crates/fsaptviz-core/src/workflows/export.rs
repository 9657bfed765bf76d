//! Writers for a finished color assignment.
//!
//! Two formats are supported. CSV carries one row per classified atom and is
//! meant for spreadsheets or simple viewer scripts. JSON carries the whole
//! analysis (summary, report, legend and per-atom rows) for programmatic use.

use super::analyze::InteractionAnalysis;
use crate::core::models::color::Color;
use crate::core::models::sample::AtomIndex;
use crate::engine::classifier::{EnergyColorMap, InteractionSummary};
use crate::engine::legend::Legend;
use crate::engine::report::InteractionReport;
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown export format '{0}'. Expected 'csv' or 'json'.")]
    UnknownFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    /// Infers the format from a file extension, if it is a known one.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct AtomRow {
    atom_index: AtomIndex,
    energy: f64,
    tier: String,
    hex: String,
    r: u8,
    g: u8,
    b: u8,
}

#[derive(Debug, Serialize)]
struct AtomEntry {
    atom_index: AtomIndex,
    energy: f64,
    tier: String,
    color: Color,
}

#[derive(Debug, Serialize)]
struct AnalysisDocument<'a> {
    interaction_type: &'a str,
    threshold: f64,
    summary: &'a InteractionSummary,
    report: &'a InteractionReport,
    legend: &'a Legend,
    atoms: Vec<AtomEntry>,
}

pub fn write_csv(map: &EnergyColorMap, writer: impl Write) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (atom_index, coloring) in map.iter() {
        csv_writer.serialize(AtomRow {
            atom_index,
            energy: coloring.energy,
            tier: coloring.tier.to_string(),
            hex: coloring.color.to_hex(),
            r: coloring.color.r,
            g: coloring.color.g,
            b: coloring.color.b,
        })?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_json(analysis: &InteractionAnalysis, writer: impl Write) -> Result<(), ExportError> {
    let atoms = analysis
        .color_map
        .iter()
        .map(|(atom_index, coloring)| AtomEntry {
            atom_index,
            energy: coloring.energy,
            tier: coloring.tier.to_string(),
            color: coloring.color,
        })
        .collect();
    let document = AnalysisDocument {
        interaction_type: &analysis.interaction_type,
        threshold: analysis.threshold,
        summary: &analysis.summary,
        report: &analysis.report,
        legend: &analysis.legend,
        atoms,
    };
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(())
}

pub fn write_to_path(
    analysis: &InteractionAnalysis,
    path: &Path,
    format: ExportFormat,
) -> Result<(), ExportError> {
    debug!("Writing {} export to {:?}", format, path);
    let io_error = |e: std::io::Error| ExportError::Io {
        path: path.display().to_string(),
        source: e,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    match format {
        ExportFormat::Csv => write_csv(&analysis.color_map, &mut writer)?,
        ExportFormat::Json => write_json(analysis, &mut writer)?,
    }
    writer.flush().map_err(io_error)
}
