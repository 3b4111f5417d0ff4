//! SetupLab CLI: analyze candle series and print trade setups as JSON.
//!
//! Commands:
//! - `analyze`: one series from CSV (or a seeded synthetic walk)
//! - `batch`: many CSV files, analyzed in parallel
//! - `indicators`: only the indicator bundle and its fallbacks
//!
//! JSON goes to stdout; logs go to stderr (`RUST_LOG`, default `info`).

mod loader;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use setuplab_core::{Analysis, AnalysisConfig, Analyzer, IndicatorBundle, IndicatorEngine, Series};
use tracing::info;
use tracing_subscriber::EnvFilter;

use loader::{load_csv, symbol_from_path, synthetic_series};

#[derive(Parser)]
#[command(
    name = "setuplab",
    about = "SetupLab CLI: technical indicators and rule-based trade setups"
)]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one series and print its trade setup.
    Analyze {
        /// CSV file with columns timestamp,open,high,low,close,volume.
        #[arg(long, conflicts_with = "synthetic")]
        csv: Option<PathBuf>,

        /// Use a seeded synthetic random walk instead of a file.
        #[arg(long, default_value_t = false)]
        synthetic: bool,

        /// Number of synthetic bars.
        #[arg(long, default_value_t = 200)]
        bars: usize,

        /// Seed for the synthetic walk.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Symbol label. Defaults to the CSV file stem.
        #[arg(long)]
        symbol: Option<String>,

        /// Current ticker price. Defaults to the latest close.
        #[arg(long)]
        price: Option<f64>,
    },
    /// Analyze several CSV files in parallel.
    Batch {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print only the indicator bundle for a CSV file.
    Indicators {
        #[arg(long)]
        csv: PathBuf,
    },
}

/// One analysis plus its BLAKE3 fingerprint.
#[derive(Serialize)]
struct Report<'a> {
    fingerprint: String,
    #[serde(flatten)]
    analysis: &'a Analysis,
}

impl<'a> Report<'a> {
    fn new(analysis: &'a Analysis) -> Self {
        Self {
            fingerprint: analysis.fingerprint().to_string(),
            analysis,
        }
    }
}

#[derive(Serialize)]
struct IndicatorReport {
    symbol: String,
    bars: usize,
    indicators: IndicatorBundle,
    fallbacks: Vec<&'static str>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze {
            csv,
            synthetic,
            bars,
            seed,
            symbol,
            price,
        } => run_analyze(&config, csv, synthetic, bars, seed, symbol, price),
        Commands::Batch { files } => run_batch(&config, &files),
        Commands::Indicators { csv } => run_indicators(&config, &csv),
    }
}

fn load_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    match path {
        Some(path) => {
            let config = AnalysisConfig::from_toml_file(path)
                .with_context(|| format!("loading config {}", path.display()))?;
            info!(path = %path.display(), "config loaded");
            Ok(config)
        }
        None => Ok(AnalysisConfig::default()),
    }
}

fn run_analyze(
    config: &AnalysisConfig,
    csv: Option<PathBuf>,
    synthetic: bool,
    bars: usize,
    seed: u64,
    symbol: Option<String>,
    price: Option<f64>,
) -> Result<()> {
    let (default_symbol, series) = match (csv, synthetic) {
        (Some(path), _) => (symbol_from_path(&path), load_csv(&path)?),
        (None, true) => ("SYNTHETIC".to_string(), synthetic_series(bars, seed)?),
        (None, false) => bail!("one of --csv or --synthetic is required"),
    };
    let symbol = symbol.unwrap_or(default_symbol);

    let analyzer = Analyzer::new(config)?;
    let analysis = match price {
        Some(price) => analyzer.analyze_at(&symbol, &series, price)?,
        None => analyzer.analyze(&symbol, &series),
    };
    print_json(&Report::new(&analysis))
}

fn run_batch(config: &AnalysisConfig, files: &[PathBuf]) -> Result<()> {
    let inputs = files
        .iter()
        .map(|path| Ok((symbol_from_path(path), load_csv(path)?)))
        .collect::<Result<Vec<(String, Series)>>>()?;

    let analyses = Analyzer::new(config)?.analyze_batch(&inputs);
    info!(symbols = analyses.len(), "batch complete");

    let reports: Vec<Report<'_>> = analyses.iter().map(Report::new).collect();
    print_json(&reports)
}

fn run_indicators(config: &AnalysisConfig, csv: &Path) -> Result<()> {
    let series = load_csv(csv)?;
    let readings = IndicatorEngine::new(config.engine.clone())?.compute_readings(&series);
    print_json(&IndicatorReport {
        symbol: symbol_from_path(csv),
        bars: series.len(),
        indicators: readings.bundle(),
        fallbacks: readings.fallbacks(),
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
