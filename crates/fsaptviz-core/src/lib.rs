//! # fsaptviz
//!
//! Classification of FSAPT (functional symmetry-adapted perturbation theory)
//! per-atom interaction energies into display colors for a molecular structure
//! viewer.
//!
//! ## Architecture
//!
//! - **[`core`]: The Data Model.** Interaction samples, RGB colors and the JSON
//!   documents exchanged with the FSAPT analysis service.
//!
//! - **[`engine`]: The Classifier.** Summary statistics, the three-tier
//!   attractive/repulsive gradient, the legend, and the
//!   [`ColorProvider`](engine::provider::ColorProvider) capability that a viewer
//!   adapter consumes.
//!
//! - **[`workflows`]: The Public API.** A single [`analyze::run`](workflows::analyze::run)
//!   call from payload to color theme, plus CSV/JSON export.
//!
//! Rendering, structure parsing and the viewer integration itself are left to
//! the embedding application.

pub mod core;
pub mod engine;
pub mod workflows;
