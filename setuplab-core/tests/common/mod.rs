//! Shared series builders for integration tests.

#![allow(dead_code)]

use setuplab_core::{Candle, Series};

/// Candles with open = close, high/low = close ± spread, one minute apart.
pub fn series_from_closes(closes: &[f64], spread: f64) -> Series {
    let candles = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Candle {
            timestamp: 1_704_067_200_000 + i as i64 * 60_000,
            open: close,
            high: close + spread,
            low: close - spread,
            close,
            volume: 1_000.0 + i as f64,
        })
        .collect();
    Series::new(candles).unwrap()
}

/// Deterministic pseudo-random walk using a simple LCG.
pub fn random_walk(n: usize, seed: u64) -> Series {
    let mut state = seed;
    let mut price: f64 = 100.0;
    let mut candles = Vec::with_capacity(n);
    for i in 0..n {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let change = ((state >> 33) % 200) as f64 / 100.0 - 1.0; // -1.0 to +0.99
        let open = price;
        price = (price + change).max(1.0);
        let close = price;
        candles.push(Candle {
            timestamp: i as i64,
            open,
            high: open.max(close) + 0.5,
            low: (open.min(close) - 0.5).max(0.01),
            close,
            volume: 500.0,
        });
    }
    Series::new(candles).unwrap()
}

pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, epsilon={epsilon}"
    );
}
