use crate::cli::{AnalyzeArgs, SettingsArgs};
use crate::client::AnalysisClient;
use crate::commands::output;
use crate::config::build_config;
use crate::error::{CliError, Result};
use crate::utils::progress::with_spinner;
use fsaptviz::core::io::api::AnalysisRequest;
use fsaptviz::engine::config::AnalysisConfig;
use fsaptviz::workflows::analyze;
use tracing::info;

pub async fn run(args: AnalyzeArgs, settings: &SettingsArgs, quiet: bool) -> Result<()> {
    let config = build_config(settings)?;
    let threshold = args.threshold.unwrap_or(config.threshold);
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(CliError::Argument(format!(
            "--threshold must be a finite, non-negative number (got {})",
            threshold
        )));
    }

    let client = AnalysisClient::new(&config.api)?;
    let request = AnalysisRequest::new(&args.pair.ligand, &args.pair.protein)
        .with_threshold(threshold);

    info!(
        "Requesting FSAPT analysis for {}/{} at threshold {}",
        request.ligand_id, request.protein_id, threshold
    );
    let payload = with_spinner(
        "Running FSAPT analysis",
        quiet,
        client.fsapt_analysis(&request),
    )
    .await?;

    let analysis_config = AnalysisConfig {
        classifier: config.classifier,
        threshold,
    };
    let analysis = analyze::run(&payload, &analysis_config)?;

    println!("FSAPT analysis for {} / {}", args.pair.ligand, args.pair.protein);
    output::present(&analysis, &analysis_config, &args.output)
}
