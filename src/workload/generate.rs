use rand::prelude::*;

use super::task::TaskRecord;
use crate::core::Ticks;

/// Generate `count` tasks with a short or long burst drawn by a Bernoulli
/// trial and a uniform priority in `0..=max_priority`. Deterministic for a
/// given seed.
pub fn bernoulli_batch(
    count: usize,
    p_short: f64,
    short_burst: Ticks,
    long_burst: Ticks,
    max_priority: i64,
    seed: u64,
) -> Vec<TaskRecord> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let burst_time = if rng.random::<f64>() < p_short {
                short_burst
            } else {
                long_burst
            };
            let priority = rng.random_range(0..=max_priority);

            TaskRecord::new(format!("T{i}"), priority, burst_time)
        })
        .collect()
}
