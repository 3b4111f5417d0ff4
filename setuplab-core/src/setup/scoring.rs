//! Confidence scoring as a weighted checklist.
//!
//! Each trend has a fixed table of `(predicate, weight)` checks. Passing
//! checks add their weight; the sum is clamped to the configured floor/cap.
//! Sideways setups skip the table and get a fixed confidence.

use crate::config::SetupConfig;
use crate::domain::{IndicatorBundle, Trend};

/// Inputs visible to a check.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub price: f64,
    pub indicators: &'a IndicatorBundle,
    pub config: &'a SetupConfig,
}

/// One weighted condition.
#[derive(Clone, Copy)]
pub struct Check {
    pub label: &'static str,
    pub weight: u8,
    pub holds: fn(&Context<'_>) -> bool,
}

impl std::fmt::Debug for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Check")
            .field("label", &self.label)
            .field("weight", &self.weight)
            .finish()
    }
}

fn rsi_not_overbought(c: &Context<'_>) -> bool {
    c.indicators.rsi < c.config.rsi_overbought
}

fn rsi_not_oversold(c: &Context<'_>) -> bool {
    c.indicators.rsi > c.config.rsi_oversold
}

fn macd_bullish(c: &Context<'_>) -> bool {
    c.indicators.macd.is_bullish()
}

fn macd_bearish(c: &Context<'_>) -> bool {
    c.indicators.macd.is_bearish()
}

fn price_above_sma20(c: &Context<'_>) -> bool {
    c.price > c.indicators.sma20
}

fn price_below_sma20(c: &Context<'_>) -> bool {
    c.price < c.indicators.sma20
}

fn sma20_above_sma50(c: &Context<'_>) -> bool {
    c.indicators.sma20 > c.indicators.sma50
}

fn sma20_below_sma50(c: &Context<'_>) -> bool {
    c.indicators.sma20 < c.indicators.sma50
}

fn price_above_middle_band(c: &Context<'_>) -> bool {
    c.price > c.indicators.bollinger.middle
}

fn price_below_middle_band(c: &Context<'_>) -> bool {
    c.price < c.indicators.bollinger.middle
}

pub const BULLISH_CHECKS: [Check; 5] = [
    Check { label: "rsi_not_overbought", weight: 20, holds: rsi_not_overbought },
    Check { label: "macd_bullish", weight: 25, holds: macd_bullish },
    Check { label: "price_above_sma20", weight: 20, holds: price_above_sma20 },
    Check { label: "sma20_above_sma50", weight: 15, holds: sma20_above_sma50 },
    Check { label: "price_above_middle_band", weight: 20, holds: price_above_middle_band },
];

pub const BEARISH_CHECKS: [Check; 5] = [
    Check { label: "rsi_not_oversold", weight: 20, holds: rsi_not_oversold },
    Check { label: "macd_bearish", weight: 25, holds: macd_bearish },
    Check { label: "price_below_sma20", weight: 20, holds: price_below_sma20 },
    Check { label: "sma20_below_sma50", weight: 15, holds: sma20_below_sma50 },
    Check { label: "price_below_middle_band", weight: 20, holds: price_below_middle_band },
];

/// Checklist for a trend; empty for sideways.
pub fn checks_for(trend: Trend) -> &'static [Check] {
    match trend {
        Trend::Bullish => &BULLISH_CHECKS,
        Trend::Bearish => &BEARISH_CHECKS,
        Trend::Sideways => &[],
    }
}

/// Raw checklist total before clamping.
pub fn raw_score(trend: Trend, ctx: &Context<'_>) -> u32 {
    checks_for(trend)
        .iter()
        .filter(|check| (check.holds)(ctx))
        .map(|check| u32::from(check.weight))
        .sum()
}

pub fn confidence(trend: Trend, ctx: &Context<'_>) -> u8 {
    let SetupConfig {
        confidence_floor: floor,
        confidence_cap: cap,
        sideways_confidence,
        ..
    } = *ctx.config;

    if trend == Trend::Sideways {
        return sideways_confidence;
    }
    // floor <= cap, checked by SetupConfig::validate
    raw_score(trend, ctx).min(u32::from(cap)).max(u32::from(floor)) as u8
}
