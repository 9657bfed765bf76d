use crate::cli::SettingsArgs;
use crate::client::AnalysisClient;
use crate::config::build_config;
use crate::error::Result;
use crate::utils::progress::with_spinner;
use tracing::info;

pub async fn run(settings: &SettingsArgs, quiet: bool) -> Result<()> {
    let config = build_config(settings)?;
    let client = AnalysisClient::new(&config.api)?;

    info!("Checking service health at {}", client.base_url());
    let health = with_spinner("Contacting analysis service", quiet, client.health()).await?;

    println!(
        "{} is {} (version {})",
        health.service.as_deref().unwrap_or("Analysis service"),
        health.status,
        health.version.as_deref().unwrap_or("unknown")
    );
    Ok(())
}
