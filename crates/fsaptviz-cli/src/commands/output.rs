use crate::cli::{FormatArg, OutputArgs};
use crate::display;
use crate::error::Result;
use fsaptviz::engine::config::AnalysisConfig;
use fsaptviz::workflows::analyze::InteractionAnalysis;
use fsaptviz::workflows::export::{self, ExportFormat};
use std::path::Path;
use tracing::{info, warn};

/// Picks the export format: an explicit `--format` wins, then the file
/// extension, then CSV.
pub fn resolve_format(path: &Path, explicit: Option<FormatArg>) -> ExportFormat {
    if let Some(format) = explicit {
        return format.into();
    }
    ExportFormat::from_path(path).unwrap_or_else(|| {
        warn!(
            "Could not infer export format from {:?}, falling back to {}.",
            path,
            ExportFormat::default()
        );
        ExportFormat::default()
    })
}

/// Prints the classified analysis and writes the optional export.
pub fn present(
    analysis: &InteractionAnalysis,
    config: &AnalysisConfig,
    output: &OutputArgs,
) -> Result<()> {
    let ansi = display::stdout_supports_color();
    let theme = analysis.color_theme(config);

    if analysis.samples.len() < analysis.received {
        println!(
            "Kept {} of {} interactions at threshold {} kcal/mol.",
            analysis.samples.len(),
            analysis.received,
            analysis.threshold
        );
    }
    println!("{}", display::format_report(&analysis.report));
    println!();
    println!("{}", display::format_summary(&analysis.summary));
    println!();
    println!("{}", display::format_legend(&theme, ansi));

    if analysis.color_map.is_empty() {
        warn!("No interactions to color; every atom keeps the default color.");
        println!("No interactions to color.");
    } else {
        println!();
        println!(
            "{}",
            display::format_atom_table(&analysis.color_map, &theme, ansi)
        );
    }

    if let Some(path) = &output.output {
        let format = resolve_format(path, output.format);
        export::write_to_path(analysis, path, format)?;
        info!("Exported {} atom colors to {:?}", analysis.color_map.len(), path);
        println!("✓ Color assignment ({}) written to: {}", format, path.display());
    }
    Ok(())
}
