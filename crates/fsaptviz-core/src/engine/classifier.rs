//! The interaction energy classifier.
//!
//! Turns a set of per-atom FSAPT energies into aggregate statistics and a
//! per-atom color assignment. Colors come from a three-tier gradient chosen by
//! the sign of the energy (attractive or repulsive) and its magnitude relative
//! to the largest magnitude in the set.
//!
//! Every operation here is pure: calling it twice on the same input yields the
//! same output, and nothing is cached between calls.

use super::config::ClassifierConfig;
use crate::core::models::color::Color;
use crate::core::models::sample::{AtomIndex, InteractionSample};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Relative strength of a non-neutral interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    fn tier_index(self) -> usize {
        match self {
            Strength::Weak => 0,
            Strength::Moderate => 1,
            Strength::Strong => 2,
        }
    }
}

/// The display tier an energy falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "strength")]
pub enum EnergyTier {
    Neutral,
    Attractive(Strength),
    Repulsive(Strength),
}

impl fmt::Display for EnergyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strength_name = |s: &Strength| match s {
            Strength::Weak => "weak",
            Strength::Moderate => "moderate",
            Strength::Strong => "strong",
        };
        match self {
            EnergyTier::Neutral => write!(f, "neutral"),
            EnergyTier::Attractive(s) => write!(f, "attractive-{}", strength_name(s)),
            EnergyTier::Repulsive(s) => write!(f, "repulsive-{}", strength_name(s)),
        }
    }
}

/// Aggregate statistics of a sample set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InteractionSummary {
    /// Sum of every energy, neutral samples included (kcal/mol).
    pub total_energy: f64,
    pub attractive_count: usize,
    pub repulsive_count: usize,
}

/// The classification result for one atom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AtomColoring {
    pub energy: f64,
    pub tier: EnergyTier,
    pub color: Color,
}

/// Mapping from atom index to its assigned color, ordered by atom index.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct EnergyColorMap {
    entries: BTreeMap<AtomIndex, AtomColoring>,
}

impl EnergyColorMap {
    pub fn get(&self, atom_index: AtomIndex) -> Option<Color> {
        self.entries.get(&atom_index).map(|c| c.color)
    }

    pub fn coloring(&self, atom_index: AtomIndex) -> Option<&AtomColoring> {
        self.entries.get(&atom_index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (AtomIndex, &AtomColoring)> {
        self.entries.iter().map(|(&idx, c)| (idx, c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Largest energy magnitude in the set, or `None` for an empty set.
pub fn energy_range(samples: &[InteractionSample]) -> Option<f64> {
    let (min, max) = samples.iter().fold(None, |acc: Option<(f64, f64)>, s| {
        Some(match acc {
            None => (s.energy, s.energy),
            Some((lo, hi)) => (lo.min(s.energy), hi.max(s.energy)),
        })
    })?;
    Some(min.abs().max(max.abs()))
}

/// Classifies energies using an explicit [`ClassifierConfig`].
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// An energy of exactly zero is neutral even with a zero cutoff, so every
    /// sample lands in exactly one of the three tiers.
    pub fn is_neutral(&self, energy: f64) -> bool {
        energy == 0.0 || energy.abs() < self.config.neutral_cutoff
    }

    pub fn summarize(&self, samples: &[InteractionSample]) -> InteractionSummary {
        samples
            .iter()
            .fold(InteractionSummary::default(), |mut summary, s| {
                summary.total_energy += s.energy;
                if self.is_neutral(s.energy) {
                    return summary;
                }
                if s.energy < 0.0 {
                    summary.attractive_count += 1;
                } else {
                    summary.repulsive_count += 1;
                }
                summary
            })
    }

    /// Places a single energy into its tier given the set's energy range.
    ///
    /// Tier boundaries use strict `<`, so an intensity exactly on a boundary
    /// falls into the higher tier. A non-positive range makes every energy
    /// neutral.
    pub fn classify(&self, energy: f64, energy_range: f64) -> EnergyTier {
        if self.is_neutral(energy) || !(energy_range > 0.0) {
            return EnergyTier::Neutral;
        }
        let intensity = (energy.abs() / energy_range).min(1.0);
        let strength = if intensity < self.config.moderate_intensity {
            Strength::Weak
        } else if intensity < self.config.strong_intensity {
            Strength::Moderate
        } else {
            Strength::Strong
        };
        if energy < 0.0 {
            EnergyTier::Attractive(strength)
        } else {
            EnergyTier::Repulsive(strength)
        }
    }

    pub fn tier_color(&self, tier: EnergyTier) -> Color {
        let palette = &self.config.palette;
        match tier {
            EnergyTier::Neutral => palette.neutral,
            EnergyTier::Attractive(s) => palette.attractive[s.tier_index()],
            EnergyTier::Repulsive(s) => palette.repulsive[s.tier_index()],
        }
    }

    pub fn color_map(&self, samples: &[InteractionSample]) -> EnergyColorMap {
        let Some(range) = energy_range(samples) else {
            return EnergyColorMap::default();
        };
        let entries = samples
            .iter()
            .map(|s| {
                let tier = self.classify(s.energy, range);
                (
                    s.atom_index,
                    AtomColoring {
                        energy: s.energy,
                        tier,
                        color: self.tier_color(tier),
                    },
                )
            })
            .collect();
        EnergyColorMap { entries }
    }

    pub fn lookup(&self, map: &EnergyColorMap, atom_index: AtomIndex) -> Color {
        lookup_color(map, atom_index, self.config.default_color)
    }
}

/// Summary statistics with the default classifier settings.
pub fn compute_summary(samples: &[InteractionSample]) -> InteractionSummary {
    Classifier::default().summarize(samples)
}

/// Color assignment with the default classifier settings.
pub fn build_color_map(samples: &[InteractionSample]) -> EnergyColorMap {
    Classifier::default().color_map(samples)
}

pub fn lookup_color(map: &EnergyColorMap, atom_index: AtomIndex, default_color: Color) -> Color {
    map.get(atom_index).unwrap_or(default_color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::ClassifierConfigBuilder;

    fn samples(pairs: &[(AtomIndex, f64)]) -> Vec<InteractionSample> {
        pairs
            .iter()
            .map(|&(idx, e)| InteractionSample::new(idx, e))
            .collect()
    }

    #[test]
    fn summary_of_empty_set_is_zero() {
        assert_eq!(compute_summary(&[]), InteractionSummary::default());
    }

    #[test]
    fn summary_excludes_neutral_samples_from_counts_but_not_from_total() {
        let summary = compute_summary(&samples(&[(0, -2.0), (1, 1.0), (2, 0.01)]));
        assert!((summary.total_energy - (-0.99)).abs() < 1e-12);
        assert_eq!(summary.attractive_count, 1);
        assert_eq!(summary.repulsive_count, 1);
    }

    #[test]
    fn counts_plus_neutral_always_equal_sample_count() {
        let set = samples(&[
            (0, -3.0),
            (1, -0.05),
            (2, -0.049),
            (3, 0.0),
            (4, 0.049),
            (5, 0.05),
            (6, 2.5),
            (7, -0.8),
        ]);
        let classifier = Classifier::default();
        let summary = classifier.summarize(&set);
        let neutral = set.iter().filter(|s| classifier.is_neutral(s.energy)).count();
        assert_eq!(
            summary.attractive_count + summary.repulsive_count + neutral,
            set.len()
        );
        assert_eq!(summary.attractive_count, 3);
        assert_eq!(summary.repulsive_count, 2);
    }

    #[test]
    fn extremes_map_to_pure_blue_and_pure_red() {
        let map = build_color_map(&samples(&[(0, -10.0), (1, 10.0)]));
        assert_eq!(map.get(0), Some(Color::BLUE));
        assert_eq!(map.get(1), Some(Color::RED));
    }

    #[test]
    fn lone_attractive_sample_is_strong_and_absent_atoms_get_default() {
        let map = build_color_map(&samples(&[(0, -3.0)]));
        assert_eq!(map.get(0), Some(Color::BLUE));
        assert_eq!(lookup_color(&map, 5, Color::GRAY), Color::GRAY);
        assert_eq!(Classifier::default().lookup(&map, 5), Color::GRAY);
    }

    #[test]
    fn empty_input_yields_empty_map() {
        let map = build_color_map(&[]);
        assert!(map.is_empty());
        assert_eq!(energy_range(&[]), None);
    }

    #[test]
    fn neutral_boundary_is_strict() {
        let classifier = Classifier::default();
        assert_eq!(classifier.classify(-0.049, 1.0), EnergyTier::Neutral);
        assert_eq!(
            classifier.classify(-0.05, 1.0),
            EnergyTier::Attractive(Strength::Weak)
        );
        assert_eq!(
            classifier.classify(0.05, 1.0),
            EnergyTier::Repulsive(Strength::Weak)
        );
    }

    #[test]
    fn intensity_on_tier_boundary_takes_the_higher_tier() {
        let map = build_color_map(&samples(&[(0, -10.0), (1, -3.0), (2, 6.0), (3, 2.9)]));
        assert_eq!(map.get(1), Some(Color::CORNFLOWER_BLUE));
        assert_eq!(map.get(2), Some(Color::RED));
        assert_eq!(map.get(3), Some(Color::LIGHT_PINK));
    }

    #[test]
    fn middle_tiers_use_cornflower_and_tomato() {
        let map = build_color_map(&samples(&[(0, -4.0), (1, -2.0), (2, 2.0), (3, 0.5)]));
        assert_eq!(map.get(0), Some(Color::BLUE));
        assert_eq!(map.get(1), Some(Color::CORNFLOWER_BLUE));
        assert_eq!(map.get(2), Some(Color::TOMATO));
        assert_eq!(map.get(3), Some(Color::LIGHT_PINK));
    }

    #[test]
    fn near_zero_energies_are_light_gray() {
        let map = build_color_map(&samples(&[(0, -2.0), (1, 0.01), (2, 0.0)]));
        assert_eq!(map.get(1), Some(Color::LIGHT_GRAY));
        assert_eq!(map.get(2), Some(Color::LIGHT_GRAY));
    }

    #[test]
    fn zero_range_makes_every_atom_neutral() {
        let classifier = Classifier::default();
        assert_eq!(classifier.classify(1.0, 0.0), EnergyTier::Neutral);
        let map = build_color_map(&samples(&[(0, 0.0), (1, 0.0)]));
        assert!(map.iter().all(|(_, c)| c.tier == EnergyTier::Neutral));
    }

    #[test]
    fn color_map_is_idempotent() {
        let input = samples(&[(3, -1.2), (1, 0.7), (9, 2.4), (4, 0.02)]);
        assert_eq!(build_color_map(&input), build_color_map(&input));
    }

    #[test]
    fn color_map_is_ordered_by_atom_index() {
        let map = build_color_map(&samples(&[(30, -1.0), (2, 1.0), (17, -0.5)]));
        let order: Vec<_> = map.iter().map(|(idx, _)| idx).collect();
        assert_eq!(order, vec![2, 17, 30]);
    }

    #[test]
    fn custom_thresholds_shift_tiers() {
        let config = ClassifierConfigBuilder::new()
            .neutral_cutoff(0.5)
            .moderate_intensity(0.5)
            .strong_intensity(0.9)
            .build()
            .unwrap();
        let classifier = Classifier::new(config);
        assert_eq!(classifier.classify(-0.4, 1.0), EnergyTier::Neutral);
        assert_eq!(
            classifier.classify(-0.6, 1.0),
            EnergyTier::Attractive(Strength::Moderate)
        );
        assert_eq!(
            classifier.classify(0.95, 1.0),
            EnergyTier::Repulsive(Strength::Strong)
        );
    }

    #[test]
    fn zero_cutoff_still_treats_exact_zero_as_neutral() {
        let config = ClassifierConfigBuilder::new()
            .neutral_cutoff(0.0)
            .build()
            .unwrap();
        let classifier = Classifier::new(config);
        let set = samples(&[(0, -1.0), (1, 0.0), (2, 0.001)]);

        let summary = classifier.summarize(&set);
        let neutral = set.iter().filter(|s| classifier.is_neutral(s.energy)).count();
        assert_eq!(summary.attractive_count, 1);
        assert_eq!(summary.repulsive_count, 1);
        assert_eq!(
            summary.attractive_count + summary.repulsive_count + neutral,
            set.len()
        );

        let map = classifier.color_map(&set);
        assert_eq!(map.coloring(1).unwrap().tier, EnergyTier::Neutral);
        assert_eq!(map.get(1), Some(Color::LIGHT_GRAY));
        assert_eq!(
            map.coloring(2).unwrap().tier,
            EnergyTier::Repulsive(Strength::Weak)
        );
    }

    #[test]
    fn tier_display_names() {
        assert_eq!(EnergyTier::Neutral.to_string(), "neutral");
        assert_eq!(
            EnergyTier::Attractive(Strength::Strong).to_string(),
            "attractive-strong"
        );
        assert_eq!(
            EnergyTier::Repulsive(Strength::Weak).to_string(),
            "repulsive-weak"
        );
    }
}
