//! IndicatorBundle: the fixed set of indicator readings for one series.

use serde::{Deserialize, Serialize};

/// MACD triple: line value, signal line, histogram (`value - signal`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Macd {
    pub value: f64,
    pub signal: f64,
    pub histogram: f64,
}

impl Macd {
    pub fn new(value: f64, signal: f64) -> Self {
        Self {
            value,
            signal,
            histogram: value - signal,
        }
    }

    /// Line above signal, or sitting on a collapsed signal line above zero.
    pub fn is_bullish(&self) -> bool {
        self.value > self.signal || (self.value == self.signal && self.value > 0.0)
    }

    /// Line below signal, or sitting on a collapsed signal line below zero.
    pub fn is_bearish(&self) -> bool {
        self.value < self.signal || (self.value == self.signal && self.value < 0.0)
    }
}

/// Bollinger envelope, `lower <= middle <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

impl BollingerBands {
    /// Zero-width bands collapsed on a single price.
    pub fn flat(price: f64) -> Self {
        Self {
            upper: price,
            middle: price,
            lower: price,
        }
    }
}

/// Snapshot of every indicator the setup generator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorBundle {
    pub rsi: f64,
    pub macd: Macd,
    pub sma20: f64,
    pub sma50: f64,
    pub ema20: f64,
    pub bollinger: BollingerBands,
    pub support: f64,
    pub resistance: f64,
}
