//! Benchmark workloads for the reclaim memory-reuse primitives.
//!
//! Provides deterministic, seeded inputs so that allocation-churn
//! benchmarks compare the same work across runs:
//!
//! - [`path_lengths`]: per-round array lengths for build-and-discard loops
//! - [`coords`]: coordinate pairs for emplacement

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic lengths in `1..=max_len` for `rounds` build-and-discard rounds.
pub fn path_lengths(seed: u64, rounds: usize, max_len: usize) -> Vec<usize> {
    assert!(max_len > 0, "max_len must be > 0");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..rounds)
        .map(|_| (rng.next_u64() % max_len as u64) as usize + 1)
        .collect()
}

/// Deterministic coordinate pairs with each component in `-extent..extent`.
pub fn coords(seed: u64, count: usize, extent: i64) -> Vec<(i64, i64)> {
    assert!(extent > 0, "extent must be > 0");
    let span = (extent * 2) as u64;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let x = (rng.next_u64() % span) as i64 - extent;
            let y = (rng.next_u64() % span) as i64 - extent;
            (x, y)
        })
        .collect()
}
