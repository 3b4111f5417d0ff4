//! Relative Strength Index (RSI).
//!
//! Simple average of the last `period` price changes, taken from the
//! `period + 1` most recent closes (newest change first).
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss)
//! Fallback: fewer than `period + 1` closes → 50.
//! Edge cases: avg_loss == 0 → 100; both averages zero → 50 (no movement).

use super::Reading;

/// Neutral RSI, returned when there is not enough history.
pub const RSI_NEUTRAL: f64 = 50.0;

pub fn rsi(closes: &[f64], period: usize) -> Reading {
    assert!(period >= 1, "RSI period must be >= 1");
    let n = closes.len();
    if n < period + 1 {
        return Reading::Fallback(RSI_NEUTRAL);
    }

    let mut gains = 0.0;
    let mut losses = 0.0;
    for i in 0..period {
        let change = closes[n - 1 - i] - closes[n - 2 - i];
        if change > 0.0 {
            gains += change;
        } else if change < 0.0 {
            losses -= change;
        }
    }
    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;

    Reading::Computed(compute_rsi(avg_gain, avg_loss))
}

fn compute_rsi(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 && avg_gain == 0.0 {
        RSI_NEUTRAL
    } else if avg_loss == 0.0 {
        100.0
    } else if avg_gain == 0.0 {
        0.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}
