use super::classifier::{Classifier, energy_range};
use crate::core::io::api::RemoteSummary;
use crate::core::models::sample::InteractionSample;
use serde::Serialize;

/// Extended statistics for one analysed ligand/protein pair.
///
/// Mirrors the fields reported by the analysis service's summary endpoint so
/// that locally classified payloads can be compared with server-side numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionReport {
    pub interaction_type: String,
    pub total_interactions: usize,
    pub total_energy: f64,
    pub attractive_interactions: usize,
    pub repulsive_interactions: usize,
    pub neutral_interactions: usize,
    /// Most negative energy, or 0.0 for an empty set.
    pub strongest_attractive: f64,
    /// Most positive energy, or 0.0 for an empty set.
    pub strongest_repulsive: f64,
    pub average_energy: f64,
    /// Largest energy magnitude used to normalize tier intensities.
    pub energy_range: Option<f64>,
}

impl InteractionReport {
    pub fn build(
        classifier: &Classifier,
        samples: &[InteractionSample],
        interaction_type: &str,
    ) -> Self {
        let summary = classifier.summarize(samples);
        let total = samples.len();
        let neutral = samples
            .iter()
            .filter(|s| classifier.is_neutral(s.energy))
            .count();
        let strongest_attractive = samples
            .iter()
            .map(|s| s.energy)
            .reduce(f64::min)
            .unwrap_or(0.0);
        let strongest_repulsive = samples
            .iter()
            .map(|s| s.energy)
            .reduce(f64::max)
            .unwrap_or(0.0);
        let average_energy = if total == 0 {
            0.0
        } else {
            summary.total_energy / total as f64
        };

        Self {
            interaction_type: interaction_type.to_string(),
            total_interactions: total,
            total_energy: summary.total_energy,
            attractive_interactions: summary.attractive_count,
            repulsive_interactions: summary.repulsive_count,
            neutral_interactions: neutral,
            strongest_attractive,
            strongest_repulsive,
            average_energy,
            energy_range: energy_range(samples),
        }
    }
}

impl From<RemoteSummary> for InteractionReport {
    fn from(remote: RemoteSummary) -> Self {
        let neutral = remote
            .total_interactions
            .saturating_sub(remote.attractive_interactions + remote.repulsive_interactions);
        let range = remote
            .strongest_attractive
            .abs()
            .max(remote.strongest_repulsive.abs());
        Self {
            interaction_type: remote.interaction_type,
            total_interactions: remote.total_interactions,
            total_energy: remote.total_energy,
            attractive_interactions: remote.attractive_interactions,
            repulsive_interactions: remote.repulsive_interactions,
            neutral_interactions: neutral,
            strongest_attractive: remote.strongest_attractive,
            strongest_repulsive: remote.strongest_repulsive,
            average_energy: remote.average_energy,
            energy_range: (remote.total_interactions > 0).then_some(range),
        }
    }
}
