//! Indicator policy functions.
//!
//! Each indicator is a pure function over ordered price slices (oldest
//! first) that returns the value for the most recent bar. None of them fail:
//! when the slice is shorter than the indicator's lookback they return a
//! documented fallback, tagged as such so the degraded path can be told apart
//! from a real computation.
//!
//! | Indicator | Fallback when history is short |
//! |-----------|--------------------------------|
//! | SMA / EMA | latest close                   |
//! | RSI       | 50 (neutral)                   |
//! | MACD      | signal line collapses onto the MACD value |
//! | Bollinger | zero-width bands on the latest close |
//! | Support / resistance | extrema over all available bars |

pub mod bollinger;
pub mod ema;
pub mod engine;
pub mod levels;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use bollinger::bollinger;
pub use ema::{ema, ema_series};
pub use engine::{compute_indicators, IndicatorEngine, IndicatorReadings};
pub use levels::{resistance, support};
pub use macd::{macd, MacdSignalMode};
pub use rsi::{rsi, RSI_NEUTRAL};
pub use sma::sma;

/// Indicator output tagged with how it was produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading<T = f64> {
    /// Enough history for the full formula.
    Computed(T),
    /// History shorter than the lookback; the documented substitute.
    Fallback(T),
}

impl<T: Copy> Reading<T> {
    pub fn value(&self) -> T {
        match self {
            Reading::Computed(v) | Reading::Fallback(v) => *v,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Reading::Fallback(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Reading<U> {
        match self {
            Reading::Computed(v) => Reading::Computed(f(v)),
            Reading::Fallback(v) => Reading::Fallback(f(v)),
        }
    }
}

/// Latest element of a price slice, NaN for an empty slice.
pub(crate) fn latest(values: &[f64]) -> f64 {
    values.last().copied().unwrap_or(f64::NAN)
}

/// Ascending closes `start, start+1, ...` for tests.
#[cfg(test)]
pub fn rising(start: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| start + i as f64).collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
