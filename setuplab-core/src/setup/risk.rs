//! Reward-to-risk ratio.

use crate::domain::RiskReward;

/// `|target - entry| / |entry - stop|`, or `Undefined` when the stop sits on
/// the entry.
pub fn risk_reward(entry: f64, stop_loss: f64, target: f64) -> RiskReward {
    let risk = (entry - stop_loss).abs();
    if risk == 0.0 {
        return RiskReward::Undefined;
    }
    let ratio = (target - entry).abs() / risk;
    if ratio.is_finite() {
        RiskReward::Ratio(ratio)
    } else {
        RiskReward::Undefined
    }
}
