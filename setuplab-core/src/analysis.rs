//! Analysis pipeline: candles → indicators → trade setup for one symbol.
//!
//! This is the unit an orchestration layer persists or renders. Batches run
//! one task per symbol on the rayon pool; symbols share nothing, so output
//! order always matches input order and results do not depend on thread count.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::config::{AnalysisConfig, ConfigError};
use crate::domain::{IndicatorBundle, Series, TradeSetup};
use crate::fingerprint::Fingerprint;
use crate::indicators::IndicatorEngine;
use crate::setup::SetupGenerator;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("current price must be finite and positive, got {0}")]
    InvalidPrice(f64),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Indicators and setup for one symbol at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub symbol: String,
    /// Timestamp of the latest candle in the analyzed series.
    pub timestamp: i64,
    pub price: f64,
    pub indicators: IndicatorBundle,
    pub setup: TradeSetup,
}

impl Analysis {
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(self)
    }
}

/// Engine + generator pair built from one validated config.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    engine: IndicatorEngine,
    generator: SetupGenerator,
}

impl Analyzer {
    pub fn new(config: &AnalysisConfig) -> Result<Self, AnalysisError> {
        Ok(Self {
            engine: IndicatorEngine::new(config.engine.clone())?,
            generator: SetupGenerator::new(config.setup.clone())?,
        })
    }

    /// Analyze at the latest close.
    pub fn analyze(&self, symbol: &str, series: &Series) -> Analysis {
        self.run(symbol, series, series.last_close())
    }

    /// Analyze at an externally supplied ticker price.
    pub fn analyze_at(
        &self,
        symbol: &str,
        series: &Series,
        price: f64,
    ) -> Result<Analysis, AnalysisError> {
        if !(price.is_finite() && price > 0.0) {
            return Err(AnalysisError::InvalidPrice(price));
        }
        Ok(self.run(symbol, series, price))
    }

    /// Analyze every `(symbol, series)` pair in parallel.
    pub fn analyze_batch(&self, inputs: &[(String, Series)]) -> Vec<Analysis> {
        inputs
            .par_iter()
            .map(|(symbol, series)| self.analyze(symbol, series))
            .collect()
    }

    fn run(&self, symbol: &str, series: &Series, price: f64) -> Analysis {
        let indicators = self.engine.compute(series);
        let setup = self.generator.generate(price, &indicators);
        info!(
            symbol,
            bars = series.len(),
            trend = %setup.trend,
            confidence = setup.confidence,
            "analysis complete"
        );
        Analysis {
            symbol: symbol.to_string(),
            timestamp: series.last().timestamp,
            price,
            indicators,
            setup,
        }
    }
}

/// Analyze one series at its latest close with `config`.
pub fn analyze(
    symbol: &str,
    series: &Series,
    config: &AnalysisConfig,
) -> Result<Analysis, AnalysisError> {
    Ok(Analyzer::new(config)?.analyze(symbol, series))
}

/// Analyze one series at a supplied price with `config`.
pub fn analyze_at(
    symbol: &str,
    series: &Series,
    price: f64,
    config: &AnalysisConfig,
) -> Result<Analysis, AnalysisError> {
    Analyzer::new(config)?.analyze_at(symbol, series, price)
}

/// Analyze many symbols in parallel with `config`.
pub fn analyze_batch(
    inputs: &[(String, Series)],
    config: &AnalysisConfig,
) -> Result<Vec<Analysis>, AnalysisError> {
    Ok(Analyzer::new(config)?.analyze_batch(inputs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Candle, Trend};

    fn series(closes: impl Iterator<Item = f64>) -> Series {
        let candles = closes
            .enumerate()
            .map(|(i, close)| Candle {
                timestamp: 1_700_000_000_000 + i as i64 * 60_000,
                open: close,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: 10.0,
            })
            .collect();
        Series::new(candles).unwrap()
    }

    #[test]
    fn analyze_uses_latest_close() {
        let s = series((0..60).map(|i| 100.0 + i as f64));
        let a = analyze("BTCUSDT", &s, &AnalysisConfig::default()).unwrap();
        assert_eq!(a.price, 159.0);
        assert_eq!(a.timestamp, 1_700_000_000_000 + 59 * 60_000);
        assert_eq!(a.setup.trend, Trend::Bullish);
    }

    #[test]
    fn analyze_at_rejects_bad_price() {
        let s = series((0..30).map(|i| 100.0 + i as f64));
        let cfg = AnalysisConfig::default();
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                analyze_at("X", &s, bad, &cfg),
                Err(AnalysisError::InvalidPrice(_))
            ));
        }
        assert!(analyze_at("X", &s, 120.0, &cfg).is_ok());
    }

    #[test]
    fn batch_preserves_input_order() {
        let inputs: Vec<(String, Series)> = (0..16)
            .map(|k| {
                let sym = format!("SYM{k}");
                let s = series((0..80).map(move |i| 50.0 + k as f64 + (i as f64 * 0.1).sin()));
                (sym, s)
            })
            .collect();
        let cfg = AnalysisConfig::default();
        let results = analyze_batch(&inputs, &cfg).unwrap();
        assert_eq!(results.len(), inputs.len());
        for ((sym, s), a) in inputs.iter().zip(&results) {
            assert_eq!(&a.symbol, sym);
            assert_eq!(a, &analyze(sym, s, &cfg).unwrap());
        }
    }

    #[test]
    fn invalid_config_is_reported() {
        let mut cfg = AnalysisConfig::default();
        cfg.engine.sma_slow = 0;
        let s = series((0..5).map(|i| 10.0 + i as f64));
        assert!(matches!(
            analyze("X", &s, &cfg),
            Err(AnalysisError::Config(ConfigError::ZeroPeriod { .. }))
        ));
    }
}
