//! Randomness sources for raffle draws.
//!
//! The selector never reaches for a process-wide generator; every draw goes
//! through an injected [`RandomSource`]. Three implementations ship here:
//! - [`RngSource`] — any `rand` generator (OS-seeded or fixed-seed `StdRng`)
//! - [`BeaconSource`] — draws derived from a published seed, replayable by anyone
//!
//! Scripted sources for tests live in `rarelink-nullables`.

pub mod beacon;
pub mod error;
pub mod rng;

pub use beacon::BeaconSource;
pub use error::RandomError;
pub use rng::RngSource;

/// Trait for supplying uniform random integers to the selector.
///
/// Takes `&mut self`: each caller owns its source, so concurrent raffles
/// never share generator state.
pub trait RandomSource: Send {
    /// Return an integer drawn uniformly from `[0, bound)`.
    ///
    /// Fails with [`RandomError::ZeroBound`] when `bound == 0`.
    fn next_below(&mut self, bound: u64) -> Result<u64, RandomError>;

    /// Human-readable name of this source.
    fn name(&self) -> &str;
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn next_below(&mut self, bound: u64) -> Result<u64, RandomError> {
        (**self).next_below(bound)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
