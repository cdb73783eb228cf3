//! Benchmarks for the indicator table.
//!
//! Run with: `cargo bench`

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use price_frame::{ema, generate_frame, rolling_mean, true_range};

const ROWS: usize = 10_000;

fn bench_series_helpers(c: &mut Criterion) {
    let mut group = c.benchmark_group("series_helpers");

    for size in [1_000_usize, 10_000, 100_000] {
        let frame = generate_frame(size, 100.0, 2.0).unwrap();
        let close = frame.close().to_vec();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("rolling_mean", size),
            &close,
            |b, close| {
                b.iter(|| rolling_mean(black_box(close), black_box(14)));
            },
        );
        group.bench_with_input(BenchmarkId::new("ema", size), &close, |b, close| {
            b.iter(|| ema(black_box(close), black_box(14)));
        });
    }

    group.finish();
}

fn bench_true_range(c: &mut Criterion) {
    let frame = generate_frame(ROWS, 100.0, 2.0).unwrap();

    c.bench_function("true_range", |b| {
        b.iter(|| {
            true_range(
                black_box(frame.high()),
                black_box(frame.low()),
                black_box(frame.close()),
            )
        });
    });
}

fn bench_frame_operations(c: &mut Criterion) {
    let frame = generate_frame(ROWS, 100.0, 2.0).unwrap();
    let mut group = c.benchmark_group("frame_operations");

    group.bench_function("set_macd", |b| {
        b.iter_batched(
            || frame.clone(),
            |mut f| f.set_macd().unwrap(),
            BatchSize::LargeInput,
        );
    });
    group.bench_function("set_adx_14", |b| {
        b.iter_batched(
            || frame.clone(),
            |mut f| f.set_adx(14).unwrap(),
            BatchSize::LargeInput,
        );
    });
    group.bench_function("set_mfi_14", |b| {
        b.iter_batched(
            || frame.clone(),
            |mut f| f.set_mfi(14).unwrap(),
            BatchSize::LargeInput,
        );
    });
    group.bench_function("set_supertrend_14", |b| {
        b.iter_batched(
            || frame.clone(),
            |mut f| f.set_supertrend(3.0, 14).unwrap(),
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_series_helpers,
    bench_true_range,
    bench_frame_operations
);
criterion_main!(benches);
