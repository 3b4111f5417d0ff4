//! Simple Moving Average (SMA).
//!
//! Arithmetic mean of the last `period` closes.
//! Fallback: fewer than `period` closes → latest close.

use super::{latest, Reading};

pub fn sma(closes: &[f64], period: usize) -> Reading {
    assert!(period >= 1, "SMA period must be >= 1");
    let n = closes.len();
    if n < period {
        return Reading::Fallback(latest(closes));
    }
    let sum: f64 = closes[n - period..].iter().sum();
    Reading::Computed(sum / period as f64)
}
