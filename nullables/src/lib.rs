//! Nullable infrastructure for deterministic testing.
//!
//! External dependencies of the raffle (today: randomness) are abstracted
//! behind traits. This crate provides test-friendly implementations that
//! return scripted values and record how they were called.
//!
//! Usage: swap real implementations for nullables in tests.

pub mod random;

pub use random::{FailingRandom, NullRandom};
