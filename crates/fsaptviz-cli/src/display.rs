use fsaptviz::core::models::color::Color;
use fsaptviz::engine::classifier::{EnergyColorMap, InteractionSummary};
use fsaptviz::engine::provider::ColorProvider;
use fsaptviz::engine::report::InteractionReport;
use std::fmt::Write;
use std::io::IsTerminal;

/// Whether stdout should receive ANSI color swatches.
pub fn stdout_supports_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

/// Two-cell truecolor block, or nothing when colors are off.
pub fn swatch(color: Color, ansi: bool) -> String {
    if ansi {
        format!("\x1b[48;2;{};{};{}m  \x1b[0m ", color.r, color.g, color.b)
    } else {
        String::new()
    }
}

pub fn format_summary(summary: &InteractionSummary) -> String {
    format!(
        "Total Energy: {:.2} kcal/mol | Attractive: {} | Repulsive: {}",
        summary.total_energy, summary.attractive_count, summary.repulsive_count
    )
}

pub fn format_report(report: &InteractionReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Interaction Type:      {}", report.interaction_type);
    let _ = writeln!(out, "Total Interactions:    {}", report.total_interactions);
    let _ = writeln!(
        out,
        "Total Energy:          {:.2} kcal/mol",
        report.total_energy
    );
    let _ = writeln!(
        out,
        "Attractive:            {}",
        report.attractive_interactions
    );
    let _ = writeln!(out, "Repulsive:             {}", report.repulsive_interactions);
    let _ = writeln!(out, "Neutral:               {}", report.neutral_interactions);
    let _ = writeln!(
        out,
        "Strongest Attractive:  {:.2} kcal/mol",
        report.strongest_attractive
    );
    let _ = writeln!(
        out,
        "Strongest Repulsive:   {:.2} kcal/mol",
        report.strongest_repulsive
    );
    let _ = write!(
        out,
        "Average Energy:        {:.2} kcal/mol",
        report.average_energy
    );
    if let Some(range) = report.energy_range {
        let _ = write!(out, "\nEnergy Range:          {:.2} kcal/mol", range);
    }
    out
}

pub fn format_legend(provider: &dyn ColorProvider, ansi: bool) -> String {
    let mut out = String::new();
    let _ = write!(out, "{} ({})", provider.label(), provider.name());
    for entry in provider.legend().entries {
        let _ = write!(out, "\n  {}{:<11}", swatch(entry.color, ansi), entry.label);
        if entry.gradient.is_empty() {
            let _ = write!(out, " {}", entry.color);
        } else {
            let ramp: Vec<String> = entry.gradient.iter().map(|c| c.to_hex()).collect();
            let _ = write!(out, " {}", ramp.join(" -> "));
        }
    }
    out
}

/// One line per classified atom, ordered by atom index.
pub fn format_atom_table(map: &EnergyColorMap, provider: &dyn ColorProvider, ansi: bool) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "{:>8}  {:>12}  {:<20}  {}",
        "Atom", "Energy", "Tier", "Color"
    );
    for (atom_index, coloring) in map.iter() {
        let color = provider.color_of(atom_index);
        let _ = write!(
            out,
            "\n{:>8}  {:>12.4}  {:<20}  {}{}",
            atom_index,
            coloring.energy,
            coloring.tier.to_string(),
            swatch(color, ansi),
            color
        );
    }
    out
}
