//! Criterion micro-benchmarks for object recycling.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use reclaim_bench::path_lengths;
use reclaim_pool::RecyclePool;
use reclaim_test_utils::Node;

const ROUNDS: usize = 1_000;
const MAX_LIVE: usize = 64;

/// Benchmark: allocate and free boxed nodes directly.
fn bench_box_churn(c: &mut Criterion) {
    let batches = path_lengths(7, ROUNDS, MAX_LIVE);
    c.bench_function("box_churn", |b| {
        let mut live: Vec<Box<Node>> = Vec::with_capacity(MAX_LIVE);
        b.iter(|| {
            for &n in &batches {
                for i in 0..n {
                    live.push(Box::new(Node::new(i as i32)));
                }
                black_box(live.len());
                live.clear();
            }
        });
    });
}

/// Benchmark: the same loop through a recycle pool.
fn bench_pool_churn(c: &mut Criterion) {
    let batches = path_lengths(7, ROUNDS, MAX_LIVE);
    c.bench_function("recycle_pool_churn", |b| {
        let mut pool = RecyclePool::<Node>::new();
        let mut live: Vec<Box<Node>> = Vec::with_capacity(MAX_LIVE);
        b.iter(|| {
            for &n in &batches {
                for i in 0..n {
                    let mut node = pool.grab();
                    node.value = i as i32;
                    live.push(node);
                }
                black_box(live.len());
                for node in live.drain(..) {
                    pool.recycle(node);
                }
            }
        });
    });
}

criterion_group!(benches, bench_box_churn, bench_pool_churn);
criterion_main!(benches);
