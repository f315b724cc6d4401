//! Benchmark for the stack-safe runtime: trampoline driver, continuation
//! binds, list append/reverse and tree traversal.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use stackless::control::{Bounce, ContinuationMonad, run_trampoline};
use stackless::persistent::{PersistentList, Tree, empty_tree, node};
use stackless::recursion::{factorial, preorder};
use std::hint::black_box;

// =============================================================================
// Trampoline Benchmarks
// =============================================================================

fn count_down(n: u64) -> Bounce<u64> {
    if n == 0 {
        Bounce::done(0)
    } else {
        Bounce::more(move || count_down(n - 1))
    }
}

fn benchmark_trampoline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("trampoline");

    for depth in [1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("count_down", depth), &depth, |bencher, &depth| {
            bencher.iter(|| run_trampoline(count_down(black_box(depth))));
        });
    }

    group.finish();
}

// =============================================================================
// Continuation Benchmarks
// =============================================================================

fn count_up(n: u64) -> ContinuationMonad<u64, u64> {
    if n == 0 {
        ContinuationMonad::pure(0)
    } else {
        ContinuationMonad::pure(n - 1).bind(count_up).map(|x| x + 1)
    }
}

fn benchmark_continuation(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("continuation");

    for depth in [1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("recursive_bind", depth), &depth, |bencher, &depth| {
            bencher.iter(|| count_up(black_box(depth)).run());
        });
    }

    group.bench_function("factorial_20", |bencher| {
        bencher.iter(|| factorial(black_box(20)));
    });

    group.finish();
}

// =============================================================================
// PersistentList Benchmarks
// =============================================================================

fn benchmark_list(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("persistent_list");

    for size in [100, 1_000, 10_000] {
        let list: PersistentList<u64> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("append", size), &list, |bencher, list| {
            bencher.iter(|| black_box(list).append(list));
        });
    }

    for size in [10, 100, 500] {
        let list: PersistentList<u64> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("reverse", size), &list, |bencher, list| {
            bencher.iter(|| black_box(list).reverse());
        });
    }

    group.finish();
}

// =============================================================================
// Tree Benchmarks
// =============================================================================

fn skewed_tree(depth: u64) -> Tree<u64> {
    (0..depth).fold(empty_tree(), |tree, value| node(tree, value, empty_tree()))
}

fn benchmark_preorder(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("preorder");

    for depth in [100, 1_000, 10_000] {
        let tree = skewed_tree(depth);
        group.bench_with_input(BenchmarkId::new("left_skewed", depth), &tree, |bencher, tree| {
            bencher.iter(|| preorder(black_box(tree)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_trampoline,
    benchmark_continuation,
    benchmark_list,
    benchmark_preorder
);
criterion_main!(benches);
