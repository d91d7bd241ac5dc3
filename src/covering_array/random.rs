//! Randomized parameter-set generation for property-style tests and
//! benchmarks. Not part of the generator itself — seeded so callers get
//! reproducible parameter sets across runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Build `num_parameters` parameters named `p0, p1, ...`, each with a
/// domain of `domain_size` distinct integers `0..domain_size`, using a
/// seeded RNG so callers get reproducible inputs across runs.
pub fn random_parameters(num_parameters: usize, domain_size: usize, seed: u64) -> Vec<(String, Vec<i32>)> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..num_parameters)
        .map(|i| {
            // Vary domain size slightly per parameter so the generated
            // parameter set isn't perfectly uniform, which is closer to
            // realistic test-design inputs than every domain being equal.
            let jitter = rng.random_range(0..=1);
            let size = (domain_size + jitter).max(1);
            (format!("p{i}"), (0..size as i32).collect())
        })
        .collect()
}
