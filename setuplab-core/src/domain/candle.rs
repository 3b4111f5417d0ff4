//! Candle and Series: the input market data unit.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// OHLCV summary of one interval.
///
/// `timestamp` is an opaque integer (the CLI uses epoch milliseconds); the
/// engine only relies on its ordering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    /// Basic OHLCV sanity check: finite fields, positive prices,
    /// `low <= {open, close} <= high`, non-negative volume.
    pub fn check(&self) -> Result<(), &'static str> {
        let fields = [self.open, self.high, self.low, self.close, self.volume];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err("non-finite field");
        }
        if self.open <= 0.0 || self.high <= 0.0 || self.low <= 0.0 || self.close <= 0.0 {
            return Err("non-positive price");
        }
        if self.volume < 0.0 {
            return Err("negative volume");
        }
        if self.high < self.low {
            return Err("high below low");
        }
        if self.open < self.low || self.open > self.high {
            return Err("open outside high/low range");
        }
        if self.close < self.low || self.close > self.high {
            return Err("close outside high/low range");
        }
        Ok(())
    }
}

/// Input validation failures. Malformed data is rejected, never repaired.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    #[error("series is empty")]
    Empty,

    #[error("timestamp {timestamp} at index {index} does not follow {previous}")]
    NonMonotonic {
        index: usize,
        previous: i64,
        timestamp: i64,
    },

    #[error("invalid candle at index {index}: {reason}")]
    InvalidCandle { index: usize, reason: &'static str },
}

/// Ordered, validated candle sequence, oldest first.
///
/// Guaranteed non-empty with strictly increasing timestamps, so every
/// indicator has at least one close to fall back on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    candles: Vec<Candle>,
}

impl Series {
    pub fn new(candles: Vec<Candle>) -> Result<Self, SeriesError> {
        if candles.is_empty() {
            return Err(SeriesError::Empty);
        }
        for (index, candle) in candles.iter().enumerate() {
            candle
                .check()
                .map_err(|reason| SeriesError::InvalidCandle { index, reason })?;
            if index > 0 {
                let previous = candles[index - 1].timestamp;
                if candle.timestamp <= previous {
                    return Err(SeriesError::NonMonotonic {
                        index,
                        previous,
                        timestamp: candle.timestamp,
                    });
                }
            }
        }
        Ok(Self { candles })
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.close).collect()
    }

    pub fn highs(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.high).collect()
    }

    pub fn lows(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.low).collect()
    }

    pub fn last(&self) -> &Candle {
        // Non-empty by construction.
        &self.candles[self.candles.len() - 1]
    }

    pub fn last_close(&self) -> f64 {
        self.last().close
    }
}

impl<'de> Deserialize<'de> for Series {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            candles: Vec<Candle>,
        }
        let raw = Raw::deserialize(deserializer)?;
        Series::new(raw.candles).map_err(serde::de::Error::custom)
    }
}
