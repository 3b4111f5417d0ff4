//! Entry, stop-loss and take-profit levels per trend.

use serde::{Deserialize, Serialize};

use crate::domain::{IndicatorBundle, Trend};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceLevels {
    pub entry: f64,
    pub stop_loss: f64,
    pub take_profit1: f64,
    pub take_profit2: f64,
}

/// Bullish: stop at the tightest of support, lower band and -5%; first target
/// at the nearest of resistance, upper band and +8%. Bearish mirrors it.
/// Sideways trades the range: stop at support, target at resistance.
pub fn price_levels(trend: Trend, price: f64, indicators: &IndicatorBundle) -> PriceLevels {
    let IndicatorBundle {
        bollinger,
        support,
        resistance,
        ..
    } = *indicators;

    match trend {
        Trend::Bullish => PriceLevels {
            entry: price * 1.002,
            stop_loss: support.max(bollinger.lower).max(price * 0.95),
            take_profit1: resistance.min(bollinger.upper).min(price * 1.08),
            take_profit2: price * 1.15,
        },
        Trend::Bearish => PriceLevels {
            entry: price * 0.998,
            stop_loss: resistance.min(bollinger.upper).min(price * 1.05),
            take_profit1: support.max(bollinger.lower).max(price * 0.92),
            take_profit2: price * 0.85,
        },
        Trend::Sideways => PriceLevels {
            entry: price,
            stop_loss: support,
            take_profit1: resistance,
            take_profit2: resistance * 1.02,
        },
    }
}
