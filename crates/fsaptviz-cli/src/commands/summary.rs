use crate::cli::{PairArgs, SettingsArgs};
use crate::client::AnalysisClient;
use crate::config::build_config;
use crate::display;
use crate::error::Result;
use crate::utils::progress::with_spinner;
use fsaptviz::engine::report::InteractionReport;

pub async fn run(args: PairArgs, settings: &SettingsArgs, quiet: bool) -> Result<()> {
    let config = build_config(settings)?;
    let client = AnalysisClient::new(&config.api)?;

    let remote = with_spinner(
        "Fetching interaction summary",
        quiet,
        client.interaction_summary(&args.ligand, &args.protein),
    )
    .await?;

    println!("Interaction summary for {} / {}", args.ligand, args.protein);
    println!("{}", display::format_report(&InteractionReport::from(remote)));
    Ok(())
}
