//! Simulation-level RNG wrapper.
//!
//! Randomised dispatch draws from a single `SimRng` owned by the policy.  A
//! seeded `SimRng` makes a run reproducible; an entropy-seeded one gives the
//! non-deterministic behaviour the random policy is meant to model.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
///
/// Not shared between runs: each policy instance owns its own.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy.  Two runs will not make the same choices.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Uniform index into a collection of `len` items.  `None` if `len == 0`.
    #[inline]
    pub fn index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.0.gen_range(0..len))
    }
}
