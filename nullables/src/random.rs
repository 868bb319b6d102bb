//! Nullable random — scripted draws.

use rarelink_random::{RandomError, RandomSource};

/// A deterministic random source for testing.
///
/// Returns pre-configured values in order, cycling when exhausted. A scripted
/// value outside the requested range is reported as an error rather than
/// silently wrapped, so a test never passes by accident.
pub struct NullRandom {
    outputs: Vec<u64>,
    index: usize,
    requested: Vec<u64>,
}

impl NullRandom {
    /// Create with a sequence of draws.
    pub fn new(outputs: Vec<u64>) -> Self {
        Self {
            outputs,
            index: 0,
            requested: Vec::new(),
        }
    }

    /// Create with a single value that will be returned for every call.
    pub fn constant(value: u64) -> Self {
        Self::new(vec![value])
    }

    /// Bounds passed to `next_below`, in call order.
    pub fn requested_bounds(&self) -> &[u64] {
        &self.requested
    }
}

impl RandomSource for NullRandom {
    fn next_below(&mut self, bound: u64) -> Result<u64, RandomError> {
        if bound == 0 {
            return Err(RandomError::ZeroBound);
        }
        if self.outputs.is_empty() {
            return Err(RandomError::Unavailable("no scripted outputs".into()));
        }
        self.requested.push(bound);
        let value = self.outputs[self.index % self.outputs.len()];
        self.index += 1;
        if value >= bound {
            return Err(RandomError::Unavailable(format!(
                "scripted value {value} out of range for bound {bound}"
            )));
        }
        Ok(value)
    }

    fn name(&self) -> &str {
        "null-random"
    }
}

/// A random source that always fails, for exercising error propagation.
pub struct FailingRandom;

impl RandomSource for FailingRandom {
    fn next_below(&mut self, _bound: u64) -> Result<u64, RandomError> {
        Err(RandomError::Unavailable("failing test source".into()))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_scripted_values_in_order() {
        let mut rng = NullRandom::new(vec![3, 1, 4]);
        assert_eq!(rng.next_below(10), Ok(3));
        assert_eq!(rng.next_below(10), Ok(1));
        assert_eq!(rng.next_below(10), Ok(4));
        assert_eq!(rng.next_below(10), Ok(3));
        assert_eq!(rng.requested_bounds(), &[10, 10, 10, 10]);
    }

    #[test]
    fn out_of_range_value_is_an_error() {
        let mut rng = NullRandom::constant(8);
        assert!(matches!(rng.next_below(8), Err(RandomError::Unavailable(_))));
    }

    #[test]
    fn empty_script_is_an_error() {
        let mut rng = NullRandom::new(Vec::new());
        assert!(rng.next_below(1).is_err());
    }

    #[test]
    fn failing_always_fails() {
        assert!(FailingRandom.next_below(5).is_err());
    }
}
