//! Criterion benchmarks for tether-clock.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tether_clock::LogicalClock;

fn bench_merge(c: &mut Criterion) {
    let a = LogicalClock::from_raw(1_000);
    let b = LogicalClock::from_raw(2_000);
    c.bench_function("logical_clock_merge", |bench| {
        bench.iter(|| black_box(a).merge(black_box(b)))
    });

    let clocks: Vec<LogicalClock> = (0..1_000u32).map(LogicalClock::from_raw).collect();
    c.bench_function("logical_clock_fold_latest_1000", |bench| {
        bench.iter(|| LogicalClock::fold_latest(black_box(&clocks).iter().copied()))
    });
}

fn bench_codec(c: &mut Criterion) {
    let clocks: Vec<LogicalClock> = (0..256u32).map(LogicalClock::from_raw).collect();
    let mut encoded = Vec::new();
    for clock in &clocks {
        clock.write_to(&mut encoded);
    }

    c.bench_function("logical_clock_encode_256", |bench| {
        bench.iter(|| {
            let mut out = Vec::with_capacity(encoded.len());
            for clock in black_box(&clocks) {
                clock.write_to(&mut out);
            }
            out
        })
    });

    c.bench_function("logical_clock_decode_256", |bench| {
        bench.iter(|| {
            let mut input = black_box(encoded.as_slice());
            let mut latest = LogicalClock::DISTANT_PAST;
            while let Ok(clock) = LogicalClock::read_from(&mut input) {
                latest = latest.merge(clock);
            }
            latest
        })
    });
}

criterion_group!(benches, bench_merge, bench_codec);
criterion_main!(benches);
