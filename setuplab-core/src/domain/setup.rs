//! TradeSetup: the recommendation produced from an IndicatorBundle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Directional bias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Bullish,
    Bearish,
    Sideways,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Trend::Bullish => "bullish",
            Trend::Bearish => "bearish",
            Trend::Sideways => "sideways",
        };
        f.write_str(s)
    }
}

/// Reward-to-risk ratio, or an explicit marker when the stop distance is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RiskReward {
    Ratio(f64),
    Undefined,
}

impl RiskReward {
    pub fn ratio(&self) -> Option<f64> {
        match self {
            RiskReward::Ratio(r) => Some(*r),
            RiskReward::Undefined => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, RiskReward::Undefined)
    }
}

impl fmt::Display for RiskReward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskReward::Ratio(r) => write!(f, "1:{r:.2}"),
            RiskReward::Undefined => f.write_str("undefined"),
        }
    }
}

/// Point-in-time trade recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeSetup {
    pub trend: Trend,
    pub entry: f64,
    pub stop_loss: f64,
    pub take_profit1: f64,
    pub take_profit2: f64,
    /// Always within the configured floor/cap (25..=95 by default).
    pub confidence: u8,
    pub risk_reward: RiskReward,
    /// Evaluation order, not importance order.
    pub reasoning: Vec<String>,
}
