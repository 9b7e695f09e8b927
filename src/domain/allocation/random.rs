//! Per-run randomness

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Builds the generator for one allocation run.
///
/// A fixed seed makes the run reproducible; `None` draws a fresh entropy
/// seed so no generator state is shared between runs.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
