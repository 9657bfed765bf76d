//! # Engine Module
//!
//! The classification logic that turns FSAPT energies into viewer colors.
//!
//! - [`classifier`] - Summary statistics, tier classification and the per-atom color map
//! - [`config`] - Explicit classifier settings (cutoffs, tier bounds, palette)
//! - [`legend`] - The Attractive / Repulsive / Background legend derived from a palette
//! - [`provider`] - The [`provider::ColorProvider`] capability consumed by viewer adapters
//! - [`report`] - Extended per-pair statistics
//! - [`error`] - The error type shared by the analysis workflow

pub mod classifier;
pub mod config;
pub mod error;
pub mod legend;
pub mod provider;
pub mod report;
