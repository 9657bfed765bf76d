use fsaptviz::core::models::color::Color;
use fsaptviz::engine::config::{
    DEFAULT_ANALYSIS_THRESHOLD, DEFAULT_MODERATE_INTENSITY, DEFAULT_NEUTRAL_CUTOFF,
    DEFAULT_STRONG_INTENSITY,
};

pub struct DefaultsConfig {
    pub api_url: String,
    pub timeout_secs: u64,
    pub threshold: f64,
    pub neutral_cutoff: f64,
    pub moderate_intensity: f64,
    pub strong_intensity: f64,
    pub default_color: Color,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000".to_string(),
            timeout_secs: 30,
            threshold: DEFAULT_ANALYSIS_THRESHOLD,
            neutral_cutoff: DEFAULT_NEUTRAL_CUTOFF,
            moderate_intensity: DEFAULT_MODERATE_INTENSITY,
            strong_intensity: DEFAULT_STRONG_INTENSITY,
            default_color: Color::GRAY,
        }
    }
}
