//! Trend classification. First match wins; anything else is sideways.

use crate::domain::{IndicatorBundle, Trend};

pub fn classify_trend(price: f64, indicators: &IndicatorBundle) -> Trend {
    let IndicatorBundle {
        sma20, sma50, macd, ..
    } = *indicators;

    if price > sma20 && sma20 > sma50 && macd.is_bullish() {
        Trend::Bullish
    } else if price < sma20 && sma20 < sma50 && macd.is_bearish() {
        Trend::Bearish
    } else {
        Trend::Sideways
    }
}
