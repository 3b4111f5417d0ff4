//! Criterion benchmarks for SetupLab hot paths.
//!
//! Benchmarks:
//! 1. Indicator bundle computation across series lengths
//! 2. Setup generation from a precomputed bundle
//! 3. Rolling vs single-value MACD signal line
//! 4. Parallel batch analysis

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use setuplab_core::{
    compute_indicators, generate_setup, AnalysisConfig, Analyzer, Candle, EngineConfig,
    IndicatorEngine, MacdSignalMode, Series,
};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_series(n: usize) -> Series {
    let candles = (0..n)
        .map(|i| {
            let close = 100.0 + (i as f64 * 0.1).sin() * 10.0;
            let open = close - 0.3;
            Candle {
                timestamp: i as i64 * 60_000,
                open,
                high: close + 1.5,
                low: open - 1.5,
                close,
                volume: 1_000_000.0 + (i % 500_000) as f64,
            }
        })
        .collect();
    Series::new(candles).expect("benchmark series is valid")
}

// ── 1. Indicators ────────────────────────────────────────────────────

fn bench_indicators(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_indicators");
    for n in [100, 1_000, 10_000] {
        let series = make_series(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &series, |b, s| {
            b.iter(|| compute_indicators(black_box(s)))
        });
    }
    group.finish();
}

// ── 2. Setup ─────────────────────────────────────────────────────────

fn bench_setup(c: &mut Criterion) {
    let series = make_series(500);
    let bundle = compute_indicators(&series);
    let price = series.last_close();
    c.bench_function("generate_setup", |b| {
        b.iter(|| generate_setup(black_box(price), black_box(&bundle)))
    });
}

// ── 3. MACD signal modes ─────────────────────────────────────────────

fn bench_macd_modes(c: &mut Criterion) {
    let series = make_series(1_000);
    let mut group = c.benchmark_group("macd_signal_mode");
    for mode in [MacdSignalMode::SingleValue, MacdSignalMode::Rolling] {
        let engine = IndicatorEngine::new(EngineConfig {
            macd_signal_mode: mode,
            ..EngineConfig::default()
        })
        .expect("default periods are valid");
        group.bench_function(format!("{mode:?}"), |b| {
            b.iter(|| engine.compute(black_box(&series)))
        });
    }
    group.finish();
}

// ── 4. Batch ─────────────────────────────────────────────────────────

fn bench_batch(c: &mut Criterion) {
    let inputs: Vec<(String, Series)> = (0..64)
        .map(|i| (format!("SYM{i}"), make_series(500 + i)))
        .collect();
    let analyzer = Analyzer::new(&AnalysisConfig::default()).expect("default config is valid");
    c.bench_function("analyze_batch_64", |b| {
        b.iter(|| analyzer.analyze_batch(black_box(&inputs)))
    });
}

criterion_group!(
    benches,
    bench_indicators,
    bench_setup,
    bench_macd_modes,
    bench_batch
);
criterion_main!(benches);
