//! Adapter from `rand` generators to [`RandomSource`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{RandomError, RandomSource};

/// Wraps any `rand` generator. `gen_range` is unbiased for integer ranges.
pub struct RngSource<R> {
    rng: R,
    name: &'static str,
}

impl<R: Rng + Send> RngSource<R> {
    pub fn new(rng: R, name: &'static str) -> Self {
        Self { rng, name }
    }
}

impl RngSource<StdRng> {
    /// Production source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy(), "os-entropy")
    }

    /// Reproducible source. The same seed always yields the same sequence
    /// for a given `rand` release.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed), "seeded-std-rng")
    }
}

impl<R: Rng + Send> RandomSource for RngSource<R> {
    fn next_below(&mut self, bound: u64) -> Result<u64, RandomError> {
        if bound == 0 {
            return Err(RandomError::ZeroBound);
        }
        Ok(self.rng.gen_range(0..bound))
    }

    fn name(&self) -> &str {
        self.name
    }
}
