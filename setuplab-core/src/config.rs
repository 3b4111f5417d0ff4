//! Serializable engine and setup configuration.
//!
//! Every field has a default that reproduces the standard parameter set
//! (RSI 14, SMA 20/50, EMA 20, MACD 12/26/9, Bollinger 20x2, 20-bar levels).
//! A TOML file only needs to name the fields it overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::indicators::MacdSignalMode;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{field} must be >= 1")]
    ZeroPeriod { field: &'static str },

    #[error("bollinger_width must be positive and finite, got {0}")]
    InvalidWidth(f64),

    #[error("confidence_floor {floor} exceeds confidence_cap {cap}")]
    ConfidenceRange { floor: u8, cap: u8 },

    #[error("sideways_confidence {value} outside [{floor}, {cap}]")]
    SidewaysConfidence { value: u8, floor: u8, cap: u8 },
}

/// Indicator periods for the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rsi_period: usize,
    pub sma_fast: usize,
    pub sma_slow: usize,
    pub ema_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub macd_signal_mode: MacdSignalMode,
    pub bollinger_period: usize,
    pub bollinger_width: f64,
    /// Bars scanned for support (lowest low) and resistance (highest high).
    pub level_lookback: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            sma_fast: 20,
            sma_slow: 50,
            ema_period: 20,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            macd_signal_mode: MacdSignalMode::SingleValue,
            bollinger_period: 20,
            bollinger_width: 2.0,
            level_lookback: 20,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let periods = [
            ("rsi_period", self.rsi_period),
            ("sma_fast", self.sma_fast),
            ("sma_slow", self.sma_slow),
            ("ema_period", self.ema_period),
            ("macd_fast", self.macd_fast),
            ("macd_slow", self.macd_slow),
            ("macd_signal", self.macd_signal),
            ("bollinger_period", self.bollinger_period),
            ("level_lookback", self.level_lookback),
        ];
        if let Some((field, _)) = periods.iter().find(|(_, p)| *p == 0) {
            return Err(ConfigError::ZeroPeriod { field });
        }
        if !(self.bollinger_width.is_finite() && self.bollinger_width > 0.0) {
            return Err(ConfigError::InvalidWidth(self.bollinger_width));
        }
        Ok(())
    }
}

/// Scoring bounds and RSI thresholds for the setup generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    pub confidence_floor: u8,
    pub confidence_cap: u8,
    pub sideways_confidence: u8,
    pub rsi_overbought: f64,
    pub rsi_oversold: f64,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            confidence_floor: 25,
            confidence_cap: 95,
            sideways_confidence: 45,
            rsi_overbought: 70.0,
            rsi_oversold: 30.0,
        }
    }
}

impl SetupConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (floor, cap) = (self.confidence_floor, self.confidence_cap);
        if floor > cap {
            return Err(ConfigError::ConfidenceRange { floor, cap });
        }
        let value = self.sideways_confidence;
        if value < floor || value > cap {
            return Err(ConfigError::SidewaysConfidence { value, floor, cap });
        }
        Ok(())
    }
}

/// Full analysis configuration, as read from a TOML file.
///
/// ```toml
/// [engine]
/// rsi_period = 14
/// macd_signal_mode = "rolling"
///
/// [setup]
/// confidence_cap = 90
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub engine: EngineConfig,
    pub setup: SetupConfig,
}

impl AnalysisConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()?;
        self.setup.validate()
    }
}
