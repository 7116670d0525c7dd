use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "aptscore",
    version,
    about = "Weighted desirability scoring for NYC residential listings"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a single listing JSON file
    Score(ScoreCommand),
    /// Score every listing JSON file under a directory
    Batch(BatchCommand),
    /// Print the effective weights and bands after config merging
    Weights(WeightsCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Text,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ScaleArg {
    Ten,
    Hundred,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Listing JSON file
    pub path: PathBuf,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    #[arg(long, value_enum, default_value = "ten")]
    pub scale: ScaleArg,

    /// Reference year for renovation recency (defaults to the current year)
    #[arg(long)]
    pub as_of_year: Option<i32>,
}

#[derive(Args)]
pub struct BatchCommand {
    /// Directory containing listing JSON files
    pub path: PathBuf,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    #[arg(long, value_enum, default_value = "ten")]
    pub scale: ScaleArg,

    /// Reference year for renovation recency (defaults to the current year)
    #[arg(long)]
    pub as_of_year: Option<i32>,
}

#[derive(Args)]
pub struct WeightsCommand {
    /// Directory whose aptscore.toml should be resolved (defaults to ".")
    pub path: Option<PathBuf>,
}
