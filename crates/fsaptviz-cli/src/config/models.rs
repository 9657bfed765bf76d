use fsaptviz::engine::config::ClassifierConfig;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout: Duration,
}

/// Fully merged configuration for one CLI invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiSettings,
    /// Threshold sent with analysis requests and applied before classification.
    pub threshold: f64,
    pub classifier: ClassifierConfig,
}
