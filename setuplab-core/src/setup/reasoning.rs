//! Human-readable justification lines.
//!
//! Fixed order per setup: trend verdict, RSI, MACD, Bollinger position,
//! stop placement, targets. Numbers use fixed precision so identical
//! inputs always render identical text.

use super::levels::PriceLevels;
use crate::config::SetupConfig;
use crate::domain::{IndicatorBundle, Trend};

/// Two decimals for ordinary prices, six for sub-unit prices.
fn px(value: f64) -> String {
    if value.abs() >= 1.0 {
        format!("{value:.2}")
    } else {
        format!("{value:.6}")
    }
}

pub fn reasoning(
    trend: Trend,
    price: f64,
    indicators: &IndicatorBundle,
    levels: &PriceLevels,
    config: &SetupConfig,
) -> Vec<String> {
    vec![
        trend_line(trend, price, indicators),
        rsi_line(indicators.rsi, config),
        macd_line(indicators),
        bollinger_line(price, indicators),
        stop_line(trend, indicators, levels),
        target_line(trend, levels),
    ]
}

fn trend_line(trend: Trend, price: f64, ind: &IndicatorBundle) -> String {
    let (p, fast, slow) = (px(price), px(ind.sma20), px(ind.sma50));
    match trend {
        Trend::Bullish => format!(
            "Bullish structure: price {p} above SMA20 {fast}, SMA20 above SMA50 {slow}"
        ),
        Trend::Bearish => format!(
            "Bearish structure: price {p} below SMA20 {fast}, SMA20 below SMA50 {slow}"
        ),
        Trend::Sideways => format!(
            "No aligned trend: price {p}, SMA20 {fast} and SMA50 {slow} disagree with MACD or each other"
        ),
    }
}

fn rsi_line(rsi: f64, config: &SetupConfig) -> String {
    if rsi > config.rsi_overbought {
        format!(
            "RSI {rsi:.1} is overbought (above {:.0}), upside may be limited",
            config.rsi_overbought
        )
    } else if rsi < config.rsi_oversold {
        format!(
            "RSI {rsi:.1} is oversold (below {:.0}), downside may be limited",
            config.rsi_oversold
        )
    } else {
        format!("RSI {rsi:.1} is in neutral territory")
    }
}

fn macd_line(ind: &IndicatorBundle) -> String {
    let m = ind.macd;
    let verdict = if m.is_bullish() {
        "bullish momentum"
    } else if m.is_bearish() {
        "bearish momentum"
    } else {
        "no momentum edge"
    };
    format!(
        "MACD {:.4} vs signal {:.4} (histogram {:.4}): {verdict}",
        m.value, m.signal, m.histogram
    )
}

fn bollinger_line(price: f64, ind: &IndicatorBundle) -> String {
    let b = ind.bollinger;
    let p = px(price);
    if price > b.upper {
        format!("Price {p} is above the upper Bollinger band {}, stretched", px(b.upper))
    } else if price < b.lower {
        format!("Price {p} is below the lower Bollinger band {}, stretched", px(b.lower))
    } else if price > b.middle {
        format!("Price {p} sits in the upper half of the Bollinger bands (middle {})", px(b.middle))
    } else if price < b.middle {
        format!("Price {p} sits in the lower half of the Bollinger bands (middle {})", px(b.middle))
    } else {
        format!("Price {p} is on the Bollinger middle band")
    }
}

fn stop_line(trend: Trend, ind: &IndicatorBundle, levels: &PriceLevels) -> String {
    let stop = px(levels.stop_loss);
    match trend {
        Trend::Bullish => format!(
            "Stop-loss {stop}: highest of support {}, lower band {} and 5% below price",
            px(ind.support),
            px(ind.bollinger.lower)
        ),
        Trend::Bearish => format!(
            "Stop-loss {stop}: lowest of resistance {}, upper band {} and 5% above price",
            px(ind.resistance),
            px(ind.bollinger.upper)
        ),
        Trend::Sideways => format!("Range trade: stop-loss at support {stop}"),
    }
}

fn target_line(trend: Trend, levels: &PriceLevels) -> String {
    let (tp1, tp2) = (px(levels.take_profit1), px(levels.take_profit2));
    match trend {
        Trend::Bullish => format!(
            "Targets {tp1} (nearest of resistance, upper band and +8%) and {tp2} (+15%)"
        ),
        Trend::Bearish => format!(
            "Targets {tp1} (nearest of support, lower band and -8%) and {tp2} (-15%)"
        ),
        Trend::Sideways => {
            format!("Range targets: resistance {tp1}, extension {tp2} (2% above resistance)")
        }
    }
}
