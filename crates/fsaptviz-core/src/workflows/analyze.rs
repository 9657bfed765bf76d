use crate::core::io::payload::FsaptPayload;
use crate::core::models::sample::SampleSet;
use crate::engine::classifier::{Classifier, EnergyColorMap, InteractionSummary};
use crate::engine::config::AnalysisConfig;
use crate::engine::error::AnalysisError;
use crate::engine::legend::Legend;
use crate::engine::provider::EnergyColorTheme;
use crate::engine::report::InteractionReport;
use tracing::{debug, info, instrument};

/// Everything derived from one analysis payload.
#[derive(Debug, Clone)]
pub struct InteractionAnalysis {
    pub interaction_type: String,
    /// Threshold that was applied before classification (0.0 means none).
    pub threshold: f64,
    /// Samples that survived the threshold filter.
    pub samples: SampleSet,
    pub summary: InteractionSummary,
    pub report: InteractionReport,
    pub color_map: EnergyColorMap,
    pub legend: Legend,
    /// Number of samples in the payload before filtering.
    pub received: usize,
}

impl InteractionAnalysis {
    /// Packages the color map as a theme for a viewer adapter.
    pub fn color_theme(&self, config: &AnalysisConfig) -> EnergyColorTheme {
        EnergyColorTheme::new(self.color_map.clone(), config.classifier.clone())
    }
}

/// Validates, filters and classifies a single analysis payload.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidInput`] when the payload columns are
/// malformed and [`AnalysisError::Config`] when the classifier settings are
/// inconsistent. An empty payload is not an error.
#[instrument(skip_all, name = "analyze", fields(interaction_type = %payload.interaction_type))]
pub fn run(
    payload: &FsaptPayload,
    config: &AnalysisConfig,
) -> Result<InteractionAnalysis, AnalysisError> {
    config.validate()?;

    let all_samples = payload.to_sample_set()?;
    let received = all_samples.len();
    debug!("Validated {} samples from payload.", received);

    let samples = all_samples.filter_significant(config.threshold);
    if samples.len() < received {
        debug!(
            "Threshold {} kept {} of {} samples.",
            config.threshold,
            samples.len(),
            received
        );
    }

    let classifier = Classifier::new(config.classifier.clone());
    let summary = classifier.summarize(samples.as_slice());
    let report =
        InteractionReport::build(&classifier, samples.as_slice(), &payload.interaction_type);
    let color_map = classifier.color_map(samples.as_slice());
    let legend = Legend::from_config(classifier.config());

    info!(
        "Classified {} interactions: total {:.2} kcal/mol, {} attractive, {} repulsive.",
        samples.len(),
        summary.total_energy,
        summary.attractive_count,
        summary.repulsive_count
    );

    Ok(InteractionAnalysis {
        interaction_type: payload.interaction_type.clone(),
        threshold: config.threshold,
        samples,
        summary,
        report,
        color_map,
        legend,
        received,
    })
}
