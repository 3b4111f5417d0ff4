//! Indicator engine: one Series in, one IndicatorBundle out.
//!
//! Stateless: every call extracts closes/highs/lows from the series it is
//! given and runs each policy function once. Safe to share across threads.

use tracing::debug;

use super::{bollinger, ema, macd, resistance, rsi, sma, support, Reading};
use crate::config::{ConfigError, EngineConfig};
use crate::domain::{BollingerBands, IndicatorBundle, Macd, Series};

/// Every indicator with its computed/fallback tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorReadings {
    pub rsi: Reading,
    pub macd: Reading<Macd>,
    pub sma20: Reading,
    pub sma50: Reading,
    pub ema20: Reading,
    pub bollinger: Reading<BollingerBands>,
    pub support: Reading,
    pub resistance: Reading,
}

impl IndicatorReadings {
    /// Strip the tags.
    pub fn bundle(&self) -> IndicatorBundle {
        IndicatorBundle {
            rsi: self.rsi.value(),
            macd: self.macd.value(),
            sma20: self.sma20.value(),
            sma50: self.sma50.value(),
            ema20: self.ema20.value(),
            bollinger: self.bollinger.value(),
            support: self.support.value(),
            resistance: self.resistance.value(),
        }
    }

    /// Names of the indicators that fell back, in bundle field order.
    pub fn fallbacks(&self) -> Vec<&'static str> {
        let tags = [
            ("rsi", self.rsi.is_fallback()),
            ("macd_signal", self.macd.is_fallback()),
            ("sma20", self.sma20.is_fallback()),
            ("sma50", self.sma50.is_fallback()),
            ("ema20", self.ema20.is_fallback()),
            ("bollinger", self.bollinger.is_fallback()),
            ("support", self.support.is_fallback()),
            ("resistance", self.resistance.is_fallback()),
        ];
        tags.into_iter()
            .filter(|(_, fallback)| *fallback)
            .map(|(name, _)| name)
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct IndicatorEngine {
    config: EngineConfig,
}

impl IndicatorEngine {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn compute(&self, series: &Series) -> IndicatorBundle {
        self.compute_readings(series).bundle()
    }

    pub fn compute_readings(&self, series: &Series) -> IndicatorReadings {
        let cfg = &self.config;
        let closes = series.closes();
        let highs = series.highs();
        let lows = series.lows();

        let readings = IndicatorReadings {
            rsi: rsi(&closes, cfg.rsi_period),
            macd: macd(
                &closes,
                cfg.macd_fast,
                cfg.macd_slow,
                cfg.macd_signal,
                cfg.macd_signal_mode,
            ),
            sma20: sma(&closes, cfg.sma_fast),
            sma50: sma(&closes, cfg.sma_slow),
            ema20: ema(&closes, cfg.ema_period),
            bollinger: bollinger(&closes, cfg.bollinger_period, cfg.bollinger_width),
            support: support(&lows, cfg.level_lookback),
            resistance: resistance(&highs, cfg.level_lookback),
        };

        let fallbacks = readings.fallbacks();
        if !fallbacks.is_empty() {
            debug!(
                bars = series.len(),
                fallbacks = ?fallbacks,
                "indicators degraded to fallback values"
            );
        }

        readings
    }
}

/// Compute the bundle with the default parameter set.
pub fn compute_indicators(series: &Series) -> IndicatorBundle {
    IndicatorEngine::default().compute(series)
}
