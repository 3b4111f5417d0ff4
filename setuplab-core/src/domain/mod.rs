//! Domain types for SetupLab

pub mod bundle;
pub mod candle;
pub mod setup;

pub use bundle::{BollingerBands, IndicatorBundle, Macd};
pub use candle::{Candle, Series, SeriesError};
pub use setup::{RiskReward, TradeSetup, Trend};
