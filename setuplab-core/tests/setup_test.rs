//! End-to-end scenarios: candles → indicators → trade setup.

mod common;

use common::{assert_approx, series_from_closes};
use setuplab_core::{
    analyze, compute_indicators, generate_setup, Analysis, AnalysisConfig, IndicatorEngine,
    RiskReward, TradeSetup, Trend,
};

fn rising() -> Vec<f64> {
    (0..60).map(|i| 100.0 + i as f64).collect()
}

fn falling() -> Vec<f64> {
    (0..60).map(|i| 200.0 - i as f64).collect()
}

// ── Rising series ────────────────────────────────────────────────────

#[test]
fn rising_series_indicators() {
    let bundle = compute_indicators(&series_from_closes(&rising(), 1.0));
    assert_approx(bundle.sma20, 149.5, 1e-10);
    assert_approx(bundle.sma50, 134.5, 1e-10);
    // 14 deltas of +1, no losses → RSI pinned at 100
    assert_eq!(bundle.rsi, 100.0);
    assert_approx(bundle.macd.value, 7.0, 1e-9);
    assert_eq!(bundle.macd.signal, bundle.macd.value);
    assert_eq!(bundle.macd.histogram, 0.0);
    assert_eq!(bundle.support, 139.0);
    assert_eq!(bundle.resistance, 160.0);
}

#[test]
fn rising_series_is_bullish() {
    let bundle = compute_indicators(&series_from_closes(&rising(), 1.0));
    let setup = generate_setup(159.0, &bundle);

    assert_eq!(setup.trend, Trend::Bullish);
    // RSI 100 fails the overbought check: 25 + 20 + 15 + 20
    assert_eq!(setup.confidence, 80);
    assert_approx(setup.entry, 159.318, 1e-9);
    assert_approx(setup.stop_loss, 151.05, 1e-9);
    assert_eq!(setup.take_profit1, 160.0);
    assert_approx(setup.take_profit2, 182.85, 1e-9);
    let rr = setup.risk_reward.ratio().unwrap();
    assert_approx(rr, 0.08248669569424112, 1e-9);
    assert_eq!(setup.reasoning.len(), 6);
    assert!(setup.reasoning[0].starts_with("Bullish structure"));
}

// ── Falling series ───────────────────────────────────────────────────

#[test]
fn falling_series_is_bearish() {
    let bundle = compute_indicators(&series_from_closes(&falling(), 1.0));
    assert_eq!(bundle.rsi, 0.0);
    assert_approx(bundle.macd.value, -7.0, 1e-9);

    let setup = generate_setup(141.0, &bundle);
    assert_eq!(setup.trend, Trend::Bearish);
    assert_eq!(setup.confidence, 80);
    assert_approx(setup.entry, 140.718, 1e-9);
    assert_approx(setup.stop_loss, 148.05, 1e-9);
    assert_eq!(setup.take_profit1, 140.0);
    assert_approx(setup.take_profit2, 119.85, 1e-9);
    assert!(setup.reasoning[0].starts_with("Bearish structure"));
}

// ── Flat series ──────────────────────────────────────────────────────

#[test]
fn flat_series_is_sideways_with_undefined_ratio() {
    let bundle = compute_indicators(&series_from_closes(&[100.0; 60], 0.0));
    assert_eq!(bundle.sma20, 100.0);
    assert_eq!(bundle.sma50, 100.0);
    assert_eq!(bundle.ema20, 100.0);
    assert_eq!(bundle.bollinger.upper, 100.0);
    assert_eq!(bundle.bollinger.middle, 100.0);
    assert_eq!(bundle.bollinger.lower, 100.0);
    assert_eq!(bundle.rsi, 50.0);

    let setup = generate_setup(100.0, &bundle);
    assert_eq!(setup.trend, Trend::Sideways);
    assert_eq!(setup.confidence, 45);
    assert_eq!(setup.entry, 100.0);
    assert_eq!(setup.stop_loss, 100.0);
    assert_eq!(setup.take_profit1, 100.0);
    assert_eq!(setup.risk_reward, RiskReward::Undefined);
}

#[test]
fn flat_series_with_range_trades_support_to_resistance() {
    let bundle = compute_indicators(&series_from_closes(&[100.0; 60], 1.0));
    let setup = generate_setup(100.0, &bundle);
    assert_eq!(setup.trend, Trend::Sideways);
    assert_eq!(setup.stop_loss, 99.0);
    assert_eq!(setup.take_profit1, 101.0);
    assert_approx(setup.take_profit2, 103.02, 1e-9);
    assert_eq!(setup.risk_reward, RiskReward::Ratio(1.0));
}

// ── Degraded history ─────────────────────────────────────────────────

#[test]
fn ten_candles_rsi_is_exactly_neutral() {
    let closes: Vec<f64> = (0..10).map(|i| 100.0 + i as f64 * 3.0).collect();
    let bundle = compute_indicators(&series_from_closes(&closes, 1.0));
    assert_eq!(bundle.rsi, 50.0);
    assert_eq!(bundle.sma20, 127.0);
    assert_eq!(bundle.sma50, 127.0);
    assert_eq!(bundle.ema20, 127.0);
    assert_eq!(bundle.macd.value, 0.0);
}

#[test]
fn single_candle_still_yields_setup() {
    let bundle = compute_indicators(&series_from_closes(&[50.0], 2.0));
    let setup = generate_setup(50.0, &bundle);
    assert_eq!(setup.trend, Trend::Sideways);
    assert_eq!(setup.stop_loss, 48.0);
    assert_eq!(setup.take_profit1, 52.0);
    assert_eq!(setup.risk_reward, RiskReward::Ratio(1.0));
}

#[test]
fn fallback_tags_visible_through_engine() {
    let series = series_from_closes(&[10.0, 11.0, 12.0], 0.5);
    let readings = IndicatorEngine::default().compute_readings(&series);
    assert!(readings.rsi.is_fallback());
    assert!(readings.sma20.is_fallback());
    assert!(readings.bollinger.is_fallback());
}

// ── Serialization ────────────────────────────────────────────────────

#[test]
fn trade_setup_json_round_trip_is_exact() {
    let closes: Vec<f64> = (0..90)
        .map(|i| 100.0 + (i as f64 * 0.17).sin() * 9.3)
        .collect();
    let series = series_from_closes(&closes, 0.7);
    for price in [closes[89], closes[89] * 1.013, 97.123456789] {
        let setup = generate_setup(price, &compute_indicators(&series));
        let json = serde_json::to_string(&setup).unwrap();
        let back: TradeSetup = serde_json::from_str(&json).unwrap();
        assert_eq!(setup, back);
        assert_eq!(setup.entry.to_bits(), back.entry.to_bits());
        assert_eq!(setup.stop_loss.to_bits(), back.stop_loss.to_bits());
    }
}

#[test]
fn trade_setup_json_field_names() {
    let bundle = compute_indicators(&series_from_closes(&rising(), 1.0));
    let value = serde_json::to_value(generate_setup(159.0, &bundle)).unwrap();
    for key in [
        "trend",
        "entry",
        "stopLoss",
        "takeProfit1",
        "takeProfit2",
        "confidence",
        "riskReward",
        "reasoning",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    assert_eq!(value["trend"], "bullish");
    assert_eq!(value["riskReward"]["kind"], "ratio");
}

#[test]
fn analysis_round_trip_and_fingerprint() {
    let series = series_from_closes(&rising(), 1.0);
    let analysis = analyze("ETHUSDT", &series, &AnalysisConfig::default()).unwrap();
    let json = serde_json::to_string(&analysis).unwrap();
    let back: Analysis = serde_json::from_str(&json).unwrap();
    assert_eq!(analysis, back);
    assert_eq!(analysis.fingerprint(), back.fingerprint());
}
