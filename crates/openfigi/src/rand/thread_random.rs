use crate::RandSource;
use ::rand::{Rng, rng};

/// A `RandSource` that uses the thread-local RNG (`rand::rng()`).
///
/// This RNG is fast, cryptographically secure (ChaCha-based), and
/// automatically reseeded periodically.
///
/// The type does not store the RNG itself; it looks up the generator of the
/// calling thread on every draw, so it is `Send` and `Sync` and can live inside
/// a service shared across tasks.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    fn rand_index(&mut self, len: usize) -> usize {
        rng().random_range(0..len)
    }
}
