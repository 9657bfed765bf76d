use crate::core::models::color::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_NEUTRAL_CUTOFF: f64 = 0.05;
pub const DEFAULT_MODERATE_INTENSITY: f64 = 0.3;
pub const DEFAULT_STRONG_INTENSITY: f64 = 0.6;
pub const DEFAULT_ANALYSIS_THRESHOLD: f64 = 0.5;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// The colors used for each classification tier.
///
/// Tier arrays are ordered weak, moderate, strong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub neutral: Color,
    pub attractive: [Color; 3],
    pub repulsive: [Color; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            neutral: Color::LIGHT_GRAY,
            attractive: [Color::LIGHT_BLUE, Color::CORNFLOWER_BLUE, Color::BLUE],
            repulsive: [Color::LIGHT_PINK, Color::TOMATO, Color::RED],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierConfig {
    /// Energies with magnitude strictly below this value are neutral (kcal/mol).
    pub neutral_cutoff: f64,
    /// Normalized intensity at which the moderate tier begins.
    pub moderate_intensity: f64,
    /// Normalized intensity at which the strong tier begins.
    pub strong_intensity: f64,
    pub palette: Palette,
    /// Color for atoms without any FSAPT sample.
    pub default_color: Color,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            neutral_cutoff: DEFAULT_NEUTRAL_CUTOFF,
            moderate_intensity: DEFAULT_MODERATE_INTENSITY,
            strong_intensity: DEFAULT_STRONG_INTENSITY,
            palette: Palette::default(),
            default_color: Color::GRAY,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub classifier: ClassifierConfig,
    /// Samples with magnitude below this value are dropped before classification.
    /// Zero keeps every sample.
    pub threshold: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig::default(),
            threshold: 0.0,
        }
    }
}

#[derive(Default)]
pub struct ClassifierConfigBuilder {
    neutral_cutoff: Option<f64>,
    moderate_intensity: Option<f64>,
    strong_intensity: Option<f64>,
    palette: Option<Palette>,
    default_color: Option<Color>,
}

impl ClassifierConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn neutral_cutoff(mut self, cutoff: f64) -> Self {
        self.neutral_cutoff = Some(cutoff);
        self
    }
    pub fn moderate_intensity(mut self, intensity: f64) -> Self {
        self.moderate_intensity = Some(intensity);
        self
    }
    pub fn strong_intensity(mut self, intensity: f64) -> Self {
        self.strong_intensity = Some(intensity);
        self
    }
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }
    pub fn default_color(mut self, color: Color) -> Self {
        self.default_color = Some(color);
        self
    }

    pub fn build(self) -> Result<ClassifierConfig, ConfigError> {
        let defaults = ClassifierConfig::default();
        let config = ClassifierConfig {
            neutral_cutoff: self.neutral_cutoff.unwrap_or(defaults.neutral_cutoff),
            moderate_intensity: self
                .moderate_intensity
                .unwrap_or(defaults.moderate_intensity),
            strong_intensity: self.strong_intensity.unwrap_or(defaults.strong_intensity),
            palette: self.palette.unwrap_or(defaults.palette),
            default_color: self.default_color.unwrap_or(defaults.default_color),
        };
        config.validate()?;
        Ok(config)
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.threshold.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "threshold",
                reason: format!("must be a finite number (got {})", self.threshold),
            });
        }
        self.classifier.validate()
    }
}

impl ClassifierConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.neutral_cutoff.is_finite() || self.neutral_cutoff < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "neutral_cutoff",
                reason: format!(
                    "must be a finite, non-negative number (got {})",
                    self.neutral_cutoff
                ),
            });
        }
        if !(self.moderate_intensity > 0.0 && self.moderate_intensity < 1.0) {
            return Err(ConfigError::InvalidParameter {
                name: "moderate_intensity",
                reason: format!("must lie in (0, 1) (got {})", self.moderate_intensity),
            });
        }
        if !(self.strong_intensity > self.moderate_intensity && self.strong_intensity <= 1.0) {
            return Err(ConfigError::InvalidParameter {
                name: "strong_intensity",
                reason: format!(
                    "must lie in ({}, 1] (got {})",
                    self.moderate_intensity, self.strong_intensity
                ),
            });
        }
        Ok(())
    }
}
