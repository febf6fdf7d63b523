use crate::RandSource;
use ::rand::{Rng, SeedableRng, rngs::StdRng};

/// A `RandSource` backed by an owned [`StdRng`].
///
/// Seed it from OS entropy with [`SeededRandom::default`] or with a fixed
/// value through [`SeededRandom::with_seed`] to get a reproducible sequence of
/// symbols.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Creates a deterministic source from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandSource for SeededRandom {
    fn rand_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}
