//! Benchmarks for the sunburst layout pipeline.
//!
//! Run with: `cargo bench --package ftui-sunburst --bench sunburst_bench`
//!
//! Inputs are synthetic directory trees (fan-out 8, depth up to 4) with
//! deterministic weights, so runs are comparable across machines.
//!
//! # Criterion Output
//!
//! Results are written to `target/criterion/` per group:
//! - `sunburst/complete/*`: ancestor aggregation only
//! - `sunburst/structure/*`: ordering, path completion and grouping
//! - `sunburst/layout/*`: the full pipeline per order policy

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ftui_sunburst::{
    ConstantWidth, NoGap, OrderSpec, Path, PathValues, SunburstConfig, SunburstLayout, complete,
    complete_paths, structure,
};
use std::hint::black_box;

// ============================================================================
// Test Data Generation
// ============================================================================

const FAN_OUT: usize = 8;

/// `count` leaf paths spread over a tree of depth up to 4.
fn generate_tree(count: usize) -> PathValues {
    let mut values = PathValues::with_capacity(count);
    for n in 0..count {
        let depth = 1 + n % 4;
        let mut rest = n;
        let segments: Vec<String> = (0..depth)
            .map(|_| {
                let segment = format!("d{}", rest % FAN_OUT);
                rest /= FAN_OUT;
                segment
            })
            .collect();
        let path = Path::new(segments).unwrap();
        let weight = ((n * 7919) % 1000) as f64 + 1.0;
        values.insert(path, weight).unwrap();
    }
    values
}

const SIZES: [usize; 3] = [100, 1_000, 10_000];

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_complete(c: &mut Criterion) {
    let mut group = c.benchmark_group("sunburst/complete");
    for size in SIZES {
        let input = generate_tree(size);
        group.throughput(Throughput::Elements(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| complete(black_box(input)).unwrap());
        });
    }
    group.finish();
}

fn bench_structure(c: &mut Criterion) {
    let mut group = c.benchmark_group("sunburst/structure");
    let order = OrderSpec::largest_first();
    for size in SIZES {
        let input = generate_tree(size);
        let completed = complete(&input).unwrap();
        group.throughput(Throughput::Elements(completed.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let ordered = order.apply(black_box(&input), black_box(&completed));
                structure(&complete_paths(&ordered))
            });
        });
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("sunburst/layout");
    for order in ["keep", "key", "value reverse"] {
        let config = SunburstConfig {
            order: order.parse().unwrap(),
            ..SunburstConfig::default()
        };
        for size in SIZES {
            let input = generate_tree(size);
            group.throughput(Throughput::Elements(input.len() as u64));
            group.bench_with_input(BenchmarkId::new(order, size), &input, |b, input| {
                b.iter(|| {
                    SunburstLayout::compute(
                        black_box(input),
                        &config,
                        &ConstantWidth(config.ring_width),
                        &NoGap,
                    )
                    .unwrap()
                });
            });
        }
    }
    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(benches, bench_complete, bench_structure, bench_layout);

criterion_main!(benches);
