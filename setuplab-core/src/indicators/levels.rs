//! Support and resistance: lowest low / highest high over the recent window.
//!
//! Window: last `lookback` bars, or every bar when fewer exist (tagged
//! `Fallback` in that case).

use super::Reading;

pub fn support(lows: &[f64], lookback: usize) -> Reading {
    extreme(lows, lookback, f64::INFINITY, f64::min)
}

pub fn resistance(highs: &[f64], lookback: usize) -> Reading {
    extreme(highs, lookback, f64::NEG_INFINITY, f64::max)
}

fn extreme(values: &[f64], lookback: usize, init: f64, pick: fn(f64, f64) -> f64) -> Reading {
    assert!(lookback >= 1, "level lookback must be >= 1");
    let n = values.len();
    if n == 0 {
        return Reading::Fallback(f64::NAN);
    }
    let start = n.saturating_sub(lookback);
    let value = values[start..].iter().copied().fold(init, pick);
    if n < lookback {
        Reading::Fallback(value)
    } else {
        Reading::Computed(value)
    }
}
