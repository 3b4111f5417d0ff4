//! Moving Average Convergence Divergence (MACD).
//!
//! MACD = EMA(closes, fast) - EMA(closes, slow).
//!
//! Two signal-line modes:
//! - `SingleValue` (default): signal = EMA of the one-element sequence
//!   `[macd]`. With a signal period above 1 this always falls back to `macd`
//!   itself, so `signal == macd` and `histogram == 0`.
//! - `Rolling`: the MACD line is built over the whole series from the two EMA
//!   lines and the signal is its EMA. The history comes from the closes the
//!   caller passes in; nothing is carried between calls.

use serde::{Deserialize, Serialize};

use super::ema::{ema, ema_series};
use super::Reading;
use crate::domain::Macd;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacdSignalMode {
    #[default]
    SingleValue,
    Rolling,
}

/// MACD triple for the latest close.
///
/// Tagged `Fallback` when the signal line had fewer than `signal` MACD values
/// to average over (always the case in `SingleValue` mode).
pub fn macd(
    closes: &[f64],
    fast: usize,
    slow: usize,
    signal: usize,
    mode: MacdSignalMode,
) -> Reading<Macd> {
    let value = ema(closes, fast).value() - ema(closes, slow).value();

    let signal_line = match mode {
        MacdSignalMode::SingleValue => ema(&[value], signal),
        MacdSignalMode::Rolling => {
            let history = macd_line(closes, fast, slow);
            if history.is_empty() {
                ema(&[value], signal)
            } else {
                ema(&history, signal)
            }
        }
    };

    signal_line.map(|s| Macd::new(value, s))
}

/// MACD value at every bar where both EMAs are past warmup.
fn macd_line(closes: &[f64], fast: usize, slow: usize) -> Vec<f64> {
    let fast_line = ema_series(closes, fast);
    let slow_line = ema_series(closes, slow);
    fast_line
        .iter()
        .zip(&slow_line)
        .filter(|(f, s)| !f.is_nan() && !s.is_nan())
        .map(|(f, s)| f - s)
        .collect()
}
