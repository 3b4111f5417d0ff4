//! Exponential Moving Average (EMA).
//!
//! Seed: SMA of the FIRST `period` values (not the latest window).
//! Recursive: EMA = value * k + EMA_prev * (1 - k), k = 2 / (period + 1).
//! Fallback: fewer than `period` values → latest value.

use super::{latest, Reading};

fn multiplier(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

fn seed(values: &[f64], period: usize) -> f64 {
    values[..period].iter().sum::<f64>() / period as f64
}

/// One EMA update. Shared by `ema` and `ema_series` so both produce
/// bit-identical results for the same input.
#[inline]
fn step(prev: f64, value: f64, k: f64) -> f64 {
    value * k + prev * (1.0 - k)
}

/// EMA value at the last element of `values`.
pub fn ema(values: &[f64], period: usize) -> Reading {
    assert!(period >= 1, "EMA period must be >= 1");
    if values.len() < period {
        return Reading::Fallback(latest(values));
    }
    let k = multiplier(period);
    let value = values[period..]
        .iter()
        .fold(seed(values, period), |prev, &v| step(prev, v, k));
    Reading::Computed(value)
}

/// Full EMA line, same length as `values`; the first `period - 1`
/// entries are NaN (warmup).
pub fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    assert!(period >= 1, "EMA period must be >= 1");
    let n = values.len();
    let mut result = vec![f64::NAN; n];
    if n < period {
        return result;
    }

    let k = multiplier(period);
    let mut prev = seed(values, period);
    result[period - 1] = prev;
    for i in period..n {
        prev = step(prev, values[i], k);
        result[i] = prev;
    }
    result
}
