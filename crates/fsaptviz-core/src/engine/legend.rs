use super::config::ClassifierConfig;
use crate::core::models::color::Color;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendBand {
    Attractive,
    Repulsive,
    Background,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub band: LegendBand,
    pub label: String,
    /// Representative swatch color for the band.
    pub color: Color,
    /// Tier colors from weakest to strongest. Empty for the background band.
    pub gradient: Vec<Color>,
}

/// Color legend describing how the classifier's output should be read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn from_config(config: &ClassifierConfig) -> Self {
        let palette = &config.palette;
        Self {
            entries: vec![
                LegendEntry {
                    band: LegendBand::Attractive,
                    label: "Attractive".to_string(),
                    color: palette.attractive[2],
                    gradient: palette.attractive.to_vec(),
                },
                LegendEntry {
                    band: LegendBand::Repulsive,
                    label: "Repulsive".to_string(),
                    color: palette.repulsive[2],
                    gradient: palette.repulsive.to_vec(),
                },
                LegendEntry {
                    band: LegendBand::Background,
                    label: "Background".to_string(),
                    color: config.default_color,
                    gradient: Vec::new(),
                },
            ],
        }
    }

    pub fn entry(&self, band: LegendBand) -> Option<&LegendEntry> {
        self.entries.iter().find(|e| e.band == band)
    }
}

impl Default for Legend {
    fn default() -> Self {
        Self::from_config(&ClassifierConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_legend_has_three_bands_in_order() {
        let legend = Legend::default();
        let labels: Vec<_> = legend.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Attractive", "Repulsive", "Background"]);
    }

    #[test]
    fn gradients_run_from_weak_to_strong() {
        let legend = Legend::default();
        let attractive = legend.entry(LegendBand::Attractive).unwrap();
        assert_eq!(
            attractive.gradient,
            vec![Color::LIGHT_BLUE, Color::CORNFLOWER_BLUE, Color::BLUE]
        );
        assert_eq!(attractive.color, Color::BLUE);

        let repulsive = legend.entry(LegendBand::Repulsive).unwrap();
        assert_eq!(
            repulsive.gradient,
            vec![Color::LIGHT_PINK, Color::TOMATO, Color::RED]
        );
    }

    #[test]
    fn background_follows_configured_default_color() {
        let config = ClassifierConfig {
            default_color: Color::from_rgb(10, 20, 30),
            ..ClassifierConfig::default()
        };
        let legend = Legend::from_config(&config);
        let background = legend.entry(LegendBand::Background).unwrap();
        assert_eq!(background.color, Color::from_rgb(10, 20, 30));
        assert!(background.gradient.is_empty());
    }
}
