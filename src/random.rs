//! Randomness sources for the random string provider.
//!
//! The provider only needs "a uniform integer below `bound`". Any
//! [`rand::RngCore`] satisfies that, so tests can hand in a seeded
//! [`StdRng`] while production uses the operating system's secure source.

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};

/// Yields uniformly distributed indices.
pub trait UniformSource: Send {
    /// Returns a value drawn uniformly from `0..bound`.
    ///
    /// Callers guarantee `bound > 0`.
    fn next_below(&mut self, bound: usize) -> usize;
}

impl<R: RngCore + Send> UniformSource for R {
    fn next_below(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// The default source: the operating system's cryptographically secure RNG.
#[must_use]
pub fn secure() -> Box<dyn UniformSource> {
    Box::new(OsRng)
}

/// A reproducible source for tests. The same seed yields the same draws.
#[must_use]
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
