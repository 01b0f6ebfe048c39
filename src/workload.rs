//! Random workload generation.
//!
//! Produces valid arrival/burst sequences for demos, classroom exercises and
//! property tests. Pass a seeded RNG for reproducible workloads.

use rand::Rng;

/// Generates `count` processes with arrivals in `0..=max_arrival` and
/// bursts in `1..=max_burst`.
///
/// Returns `(arrivals, bursts)` in process order. `max_burst` below 1 is
/// treated as 1.
pub fn random_workload<R: Rng>(
    rng: &mut R,
    count: usize,
    max_arrival: i64,
    max_burst: i64,
) -> (Vec<i64>, Vec<i64>) {
    let max_arrival = max_arrival.max(0);
    let max_burst = max_burst.max(1);

    (0..count)
        .map(|_| {
            (
                rng.random_range(0..=max_arrival),
                rng.random_range(1..=max_burst),
            )
        })
        .unzip()
}

/// Generates `count` priorities in `0..=max_priority`.
pub fn random_priorities<R: Rng>(rng: &mut R, count: usize, max_priority: i32) -> Vec<i32> {
    let max_priority = max_priority.max(0);
    (0..count)
        .map(|_| rng.random_range(0..=max_priority))
        .collect()
}
