//! # Core Module
//!
//! Stateless building blocks for FSAPT interaction visualization.
//!
//! - **Data Model** ([`models`]) - Interaction samples, validated sample sets and RGB colors
//! - **Interchange** ([`io`]) - Analysis service payloads and color-map export formats
//!
//! Nothing in this module talks to the network or to a viewer engine; it only
//! describes the data that flows between them.

pub mod io;
pub mod models;
