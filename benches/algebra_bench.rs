//! Benchmark for the symbolic set-algebra engine.
//!
//! Measures the cost of the symbolic short-circuits against the
//! equivalent eager standard-library set operations, and the canonical
//! content hash against plain per-element hashing, to confirm the
//! symbolic layer stays allocation-free and effectively free.

use std::collections::HashSet;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use symset::prelude::*;

// =============================================================================
// 1. Symbolic short-circuits vs eager set operations
// =============================================================================

fn benchmark_intersection_short_circuit(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("intersection_short_circuit");

    for size in [8usize, 256, 4096] {
        let set: HashSet<u64> = (0..size as u64).collect();

        group.bench_with_input(
            BenchmarkId::new("universe_and_set", size),
            &set,
            |bencher, set| {
                bencher.iter(|| {
                    let result = UNIVERSE & black_box(set);
                    black_box(result)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("empty_and_set", size),
            &set,
            |bencher, set| {
                bencher.iter(|| {
                    let result = EMPTY & black_box(set);
                    black_box(result)
                });
            },
        );

        // Baseline: materializing the same intersection eagerly.
        group.bench_with_input(
            BenchmarkId::new("eager_self_intersection", size),
            &set,
            |bencher, set| {
                bencher.iter(|| {
                    let result: HashSet<u64> =
                        black_box(set).intersection(black_box(set)).copied().collect();
                    black_box(result)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// 2. Runtime dispatch overhead
// =============================================================================

fn benchmark_symbolic_dispatch(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("symbolic_dispatch");
    let set: HashSet<u64> = (0..256).collect();

    group.bench_function("static_marker_union", |bencher| {
        bencher.iter(|| {
            let result = EMPTY | black_box(&set);
            black_box(result)
        });
    });

    group.bench_function("enum_dispatch_union", |bencher| {
        bencher.iter(|| {
            let result = black_box(SymbolicSet::EMPTY).union(black_box(&set));
            black_box(result)
        });
    });

    group.bench_function("enum_dispatch_disjoint", |bencher| {
        bencher.iter(|| {
            let result = black_box(SymbolicSet::UNIVERSE).is_disjoint(black_box(&set));
            black_box(result)
        });
    });

    group.finish();
}

// =============================================================================
// 3. Content hashing
// =============================================================================

fn benchmark_set_hash(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_hash");

    for size in [0usize, 64, 1024] {
        let set: HashSet<u64> = (0..size as u64).collect();

        group.bench_with_input(BenchmarkId::new("content_hash", size), &set, |bencher, set| {
            bencher.iter(|| black_box(set_hash(black_box(set))));
        });
    }

    group.bench_function("singleton_hash", |bencher| {
        bencher.iter(|| {
            let empty_hash = black_box(EMPTY).set_hash();
            let universe_hash = black_box(UNIVERSE).set_hash();
            black_box((empty_hash, universe_hash))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_intersection_short_circuit,
    benchmark_symbolic_dispatch,
    benchmark_set_hash
);
criterion_main!(benches);
