use crate::cli::SettingsArgs;
use crate::client::AnalysisClient;
use crate::config::build_config;
use crate::error::Result;
use crate::utils::progress::with_spinner;
use fsaptviz::core::io::api::split_pair_key;
use tracing::warn;

pub async fn run(settings: &SettingsArgs, quiet: bool) -> Result<()> {
    let config = build_config(settings)?;
    let client = AnalysisClient::new(&config.api)?;

    let pairs = with_spinner("Fetching available pairs", quiet, client.available_pairs()).await?;
    if pairs.is_empty() {
        println!("The analysis service has no ligand/protein pairs.");
        return Ok(());
    }

    println!("{}", format_pairs(&pairs));
    Ok(())
}

fn format_pairs(pairs: &[String]) -> String {
    let mut lines = vec![format!("{:<16}  {}", "Ligand", "Protein")];
    for key in pairs {
        match split_pair_key(key) {
            Some((ligand, protein)) => lines.push(format!("{:<16}  {}", ligand, protein)),
            None => {
                warn!("Skipping malformed pair key '{}'", key);
            }
        }
    }
    lines.join("\n")
}
