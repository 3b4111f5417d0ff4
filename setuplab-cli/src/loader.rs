//! Series sources for the CLI: CSV files and a seeded synthetic walk.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use setuplab_core::{Candle, Series};
use tracing::{debug, warn};

/// Read `timestamp,open,high,low,close,volume` rows (header required).
pub fn load_csv(path: &Path) -> Result<Series> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut candles = Vec::new();
    for (row, record) in reader.deserialize::<Candle>().enumerate() {
        // +2: one for the header, one for 1-based line numbers
        let candle = record.with_context(|| format!("{}: line {}", path.display(), row + 2))?;
        candles.push(candle);
    }
    debug!(path = %path.display(), rows = candles.len(), "csv loaded");

    Series::new(candles).with_context(|| format!("invalid series in {}", path.display()))
}

/// Symbol name for a CSV file: its stem, upper-cased.
pub fn symbol_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_uppercase())
        .unwrap_or_else(|| "UNKNOWN".to_string())
}

/// Hourly random walk from 100.0, fully determined by `seed`.
///
/// Stands in for missing market data; the output is clearly fake and the
/// caller logs that it used it.
pub fn synthetic_series(bars: usize, seed: u64) -> Result<Series> {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .context("synthetic start date")?
        .and_utc();

    let mut price = 100.0_f64;
    let candles = (0..bars.max(1))
        .map(|i| {
            let ret: f64 = rng.gen_range(-0.02..0.02);
            let open = price;
            let close = price * (1.0 + ret);
            let high = open.max(close) * (1.0 + rng.gen_range(0.0..0.005));
            let low = open.min(close) * (1.0 - rng.gen_range(0.0..0.005));
            let volume = rng.gen_range(1_000.0..50_000.0);
            price = close;
            Candle {
                timestamp: (start + Duration::hours(i as i64)).timestamp_millis(),
                open,
                high,
                low,
                close,
                volume,
            }
        })
        .collect();

    warn!(bars, seed, "using SYNTHETIC candles");
    Ok(Series::new(candles)?)
}
