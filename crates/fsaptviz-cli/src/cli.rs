use clap::{Args, Parser, Subcommand, ValueEnum};
use fsaptviz::workflows::export::ExportFormat;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "FSAPT Visualization Contributors",
    version,
    about = "fsaptviz - Fetch FSAPT interaction energies and turn them into per-atom viewer colors.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

/// Options that feed the layered configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Path to a configuration file in TOML format.
    /// Defaults to the per-user config file when it exists.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base URL of the FSAPT analysis service (e.g., 'http://localhost:5000').
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S classifier.neutral-cutoff=0.1
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", global = true)]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that the analysis service is reachable and healthy.
    Health,
    /// List the ligand/protein pairs the analysis service knows about.
    Pairs,
    /// Show the service-side interaction summary for a ligand/protein pair.
    Summary(PairArgs),
    /// Fetch FSAPT data for a ligand/protein pair and classify it into atom colors.
    Analyze(AnalyzeArgs),
    /// Classify a saved FSAPT payload (JSON) without contacting the service.
    Classify(ClassifyArgs),
    /// Inspect the effective configuration.
    Config(ConfigArgs),
}

#[derive(Args, Debug, Clone)]
pub struct PairArgs {
    /// Ligand identifier (e.g., 'LIG').
    #[arg(short, long, required = true, value_name = "ID")]
    pub ligand: String,

    /// Protein identifier (e.g., 'PROT_001').
    #[arg(short, long, required = true, value_name = "ID")]
    pub protein: String,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub pair: PairArgs,

    /// Minimum energy magnitude (kcal/mol) for an interaction to be kept.
    /// Overrides `analysis.threshold` from the config file.
    #[arg(short, long, value_name = "FLOAT")]
    pub threshold: Option<f64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    /// Path to a payload JSON file, either bare or wrapped in the service envelope.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Minimum energy magnitude (kcal/mol) for an interaction to be kept.
    /// Defaults to keeping every sample.
    #[arg(short, long, value_name = "FLOAT")]
    pub threshold: Option<f64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Write the per-atom color assignment to this file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Export format. Inferred from the output extension when omitted.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<FormatArg>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Csv,
    Json,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Json => ExportFormat::Json,
        }
    }
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the path of the per-user configuration file.
    Path,
    /// Print the configuration after merging defaults, file, --set and flags.
    Show,
}
