//! Setup generator: (current price, indicator bundle) → TradeSetup.
//!
//! Evaluation order:
//! 1. classify the trend (`trend`)
//! 2. derive price levels for that trend (`levels`)
//! 3. score the trend's checklist (`scoring`)
//! 4. reward-to-risk on the first target (`risk`)
//! 5. render the justification lines (`reasoning`)

pub mod levels;
pub mod reasoning;
pub mod risk;
pub mod scoring;
pub mod trend;

pub use levels::{price_levels, PriceLevels};
pub use risk::risk_reward;
pub use scoring::{checks_for, confidence, Check, Context};
pub use trend::classify_trend;

use tracing::debug;

use crate::config::{ConfigError, SetupConfig};
use crate::domain::{IndicatorBundle, TradeSetup};

#[derive(Debug, Clone, Default)]
pub struct SetupGenerator {
    config: SetupConfig,
}

impl SetupGenerator {
    pub fn new(config: SetupConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SetupConfig {
        &self.config
    }

    pub fn generate(&self, price: f64, indicators: &IndicatorBundle) -> TradeSetup {
        let trend = classify_trend(price, indicators);
        let levels = price_levels(trend, price, indicators);
        let ctx = Context {
            price,
            indicators,
            config: &self.config,
        };
        let confidence = confidence(trend, &ctx);
        let risk_reward = risk_reward(levels.entry, levels.stop_loss, levels.take_profit1);
        let reasoning = reasoning::reasoning(trend, price, indicators, &levels, &self.config);

        debug!(%trend, confidence, %risk_reward, "trade setup generated");

        TradeSetup {
            trend,
            entry: levels.entry,
            stop_loss: levels.stop_loss,
            take_profit1: levels.take_profit1,
            take_profit2: levels.take_profit2,
            confidence,
            risk_reward,
            reasoning,
        }
    }
}

/// Generate a setup with the default scoring bounds.
pub fn generate_setup(price: f64, indicators: &IndicatorBundle) -> TradeSetup {
    SetupGenerator::default().generate(price, indicators)
}
