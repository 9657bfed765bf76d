use super::classifier::{Classifier, EnergyColorMap};
use super::config::ClassifierConfig;
use super::legend::Legend;
use crate::core::models::color::Color;
use crate::core::models::sample::{AtomIndex, InteractionSample};

/// A per-atom coloring that a structure viewer adapter can apply.
///
/// Implementations must be cheap to query and free of side effects; a viewer
/// may call [`ColorProvider::color_of`] once per atom per redraw.
pub trait ColorProvider: Send + Sync {
    /// Stable identifier used when registering the provider with a viewer.
    fn name(&self) -> &str;

    /// Human-readable label shown in the viewer's theme list.
    fn label(&self) -> &str;

    fn color_of(&self, atom_index: AtomIndex) -> Color;

    fn legend(&self) -> Legend;
}

/// Color theme backed by a classified set of FSAPT interaction energies.
///
/// Atoms that carry a sample receive their tier color; every other atom is
/// drawn in the configured default color.
#[derive(Debug, Clone)]
pub struct EnergyColorTheme {
    map: EnergyColorMap,
    config: ClassifierConfig,
}

impl EnergyColorTheme {
    pub const NAME: &'static str = "fsapt-interaction";
    pub const LABEL: &'static str = "FSAPT Interaction Energy";

    pub fn new(map: EnergyColorMap, config: ClassifierConfig) -> Self {
        Self { map, config }
    }

    pub fn from_samples(samples: &[InteractionSample], config: ClassifierConfig) -> Self {
        let map = Classifier::new(config.clone()).color_map(samples);
        Self { map, config }
    }

    pub fn color_map(&self) -> &EnergyColorMap {
        &self.map
    }
}

impl ColorProvider for EnergyColorTheme {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn label(&self) -> &str {
        Self::LABEL
    }

    fn color_of(&self, atom_index: AtomIndex) -> Color {
        self.map.get(atom_index).unwrap_or(self.config.default_color)
    }

    fn legend(&self) -> Legend {
        Legend::from_config(&self.config)
    }
}
