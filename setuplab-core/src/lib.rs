//! SetupLab Core: technical indicators and rule-based trade setups.
//!
//! Data flows one way: candles → indicators → trade setup.
//! - Domain types (candles, validated series, indicator bundle, trade setup)
//! - Indicator policy functions with explicit computed/fallback tagging
//! - Indicator engine: one series in, one bundle out
//! - Setup generator: trend classification, levels, checklist confidence,
//!   reward-to-risk, reasoning
//! - Analysis pipeline and batch runner
//! - Output fingerprinting
//!
//! Everything here is a pure function of its inputs: no I/O in the numeric
//! path, no wall clock, no shared mutable state.

pub mod analysis;
pub mod config;
pub mod domain;
pub mod fingerprint;
pub mod indicators;
pub mod setup;

pub use analysis::{analyze, analyze_at, analyze_batch, Analysis, AnalysisError, Analyzer};
pub use config::{AnalysisConfig, ConfigError, EngineConfig, SetupConfig};
pub use domain::{
    BollingerBands, Candle, IndicatorBundle, Macd, RiskReward, Series, SeriesError, TradeSetup,
    Trend,
};
pub use fingerprint::Fingerprint;
pub use indicators::{compute_indicators, IndicatorEngine, MacdSignalMode, Reading};
pub use setup::{generate_setup, SetupGenerator};
