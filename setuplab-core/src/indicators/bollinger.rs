//! Bollinger Bands: moving average +/- standard deviation multiple.
//!
//! - Middle: SMA(close, period)
//! - Upper: middle + width * stddev
//! - Lower: middle - width * stddev
//!
//! Uses population stddev (divide by N) over the last `period` closes.
//! Fallback: fewer than `period` closes → zero-width bands on the latest close.

use super::sma::sma;
use super::{latest, Reading};
use crate::domain::BollingerBands;

pub fn bollinger(closes: &[f64], period: usize, width: f64) -> Reading<BollingerBands> {
    assert!(period >= 1, "Bollinger period must be >= 1");
    let n = closes.len();
    if n < period {
        return Reading::Fallback(BollingerBands::flat(latest(closes)));
    }

    let middle = sma(closes, period).value();
    let variance = closes[n - period..]
        .iter()
        .map(|close| {
            let diff = close - middle;
            diff * diff
        })
        .sum::<f64>()
        / period as f64;
    let stddev = variance.sqrt();

    Reading::Computed(BollingerBands {
        upper: middle + width * stddev,
        middle,
        lower: middle - width * stddev,
    })
}
