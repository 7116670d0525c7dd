use aptscore::cli::{self, Cli, Commands, ReportFormat, ScaleArg};
use aptscore::config;
use aptscore::error::{Result, ScoreError};
use aptscore::report::{self, ListingReport, OutputFormat, Scale};
use aptscore::types::config::AptConfig;
use aptscore::types::property::PropertyData;
use aptscore::{compute_score_with, ScoringContext, ScoringWeights};
use chrono::Datelike;
use clap::Parser;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 2;
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Score(cmd) => run_score(cmd),
        Commands::Batch(cmd) => run_batch(cmd),
        Commands::Weights(cmd) => run_weights(cmd),
    }
}

fn run_score(cmd: cli::ScoreCommand) -> Result<i32> {
    if !cmd.path.exists() {
        return Err(ScoreError::PathNotFound(cmd.path.display().to_string()));
    }
    let root = cmd.path.parent().unwrap_or_else(|| Path::new("."));
    let (weights, context) = effective_scoring(root, cmd.as_of_year)?;

    let listing = read_listing(&cmd.path)?;
    tracing::debug!(address = %listing.address, "scoring listing");
    let breakdown = compute_score_with(&listing, &weights, &context);
    let report = ListingReport::new(&listing.address, breakdown, scale(cmd.scale));

    println!("{}", report::render(&[report], format(cmd.format))?);
    Ok(exit_code::SUCCESS)
}

fn run_batch(cmd: cli::BatchCommand) -> Result<i32> {
    if !cmd.path.exists() {
        return Err(ScoreError::PathNotFound(cmd.path.display().to_string()));
    }
    let (weights, context) = effective_scoring(&cmd.path, cmd.as_of_year)?;

    let files = list_listing_files(&cmd.path);
    let mut reports = Vec::new();
    let mut skipped = 0usize;
    for file in &files {
        match read_listing(file) {
            Ok(listing) => {
                let breakdown = compute_score_with(&listing, &weights, &context);
                reports.push(ListingReport::new(
                    &listing.address,
                    breakdown,
                    scale(cmd.scale),
                ));
            }
            Err(e) => {
                skipped += 1;
                eprintln!("warning: skipping {}: {}", file.display(), e);
            }
        }
    }

    reports.sort_by(|a, b| {
        b.breakdown
            .overall
            .cmp(&a.breakdown.overall)
            .then_with(|| a.address.cmp(&b.address))
    });
    tracing::info!(scored = reports.len(), skipped, "batch complete");

    println!("{}", report::render(&reports, format(cmd.format))?);

    if skipped > 0 || reports.is_empty() {
        Ok(exit_code::WARNINGS)
    } else {
        Ok(exit_code::SUCCESS)
    }
}

fn run_weights(cmd: cli::WeightsCommand) -> Result<i32> {
    let root = cmd.path.unwrap_or_else(|| PathBuf::from("."));
    if !root.exists() {
        return Err(ScoreError::PathNotFound(root.display().to_string()));
    }

    let loaded = config::load_config(&root)?;
    let missing_config = loaded.is_none();
    let config = loaded.unwrap_or_default();
    config.validate()?;

    let weights = config.weights();
    let context = config.context(ScoringContext::default().as_of_year);

    println!("weights:");
    for (name, weight) in [
        ("price_value", weights.price_value),
        ("location", weights.location),
        ("schools", weights.schools),
        ("building", weights.building),
        ("amenities", weights.amenities),
        ("neighborhood", weights.neighborhood),
        ("market_context", weights.market_context),
        ("lifestyle", weights.lifestyle),
    ] {
        println!("  {name}: {weight:.2}");
    }
    println!("bands:");
    println!(
        "  price_per_sqft: {:.0}-{:.0}",
        context.price_per_sqft.min, context.price_per_sqft.max
    );
    println!(
        "  monthly_cost: {:.0}-{:.0}",
        context.monthly_cost.min, context.monthly_cost.max
    );

    if missing_config {
        eprintln!("warning: no aptscore.toml found in {}", root.display());
        Ok(exit_code::WARNINGS)
    } else {
        Ok(exit_code::SUCCESS)
    }
}

fn effective_scoring(
    root: &Path,
    as_of_year: Option<i32>,
) -> Result<(ScoringWeights, ScoringContext)> {
    let config = config::load_config(root)?.unwrap_or_else(AptConfig::default);
    config.validate()?;
    let year = as_of_year.unwrap_or_else(current_year);
    Ok((config.weights(), config.context(year)))
}

fn read_listing(path: &Path) -> Result<PropertyData> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| ScoreError::ListingParse(format!("{}: {}", path.display(), e)))
}

fn list_listing_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| path.extension().map(|ext| ext == "json").unwrap_or(false))
        .collect();
    files.sort();
    files
}

fn current_year() -> i32 {
    chrono::Utc::now().year()
}

fn scale(arg: ScaleArg) -> Scale {
    match arg {
        ScaleArg::Ten => Scale::Ten,
        ScaleArg::Hundred => Scale::Hundred,
    }
}

fn format(arg: ReportFormat) -> OutputFormat {
    match arg {
        ReportFormat::Json => OutputFormat::Json,
        ReportFormat::Text => OutputFormat::Text,
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
