//! Hash-beacon randomness — draws anyone can replay from a published seed.
//!
//! The operator publishes [`BeaconSource::commitment`] before the window
//! closes, then reveals the seed (for example a block hash) at draw time.
//! Candidate `k` is the first 8 bytes, big-endian, of
//! `SHA-256(seed || context || k as BE u64)`. Candidates in the biased tail
//! of the `u64` range are rejected so every slot is equally likely.

use sha2::{Digest, Sha256};

use crate::{RandomError, RandomSource};

/// Upper bound on consecutive rejected candidates for a single draw.
///
/// Each candidate is rejected with probability below 1/2, so hitting this
/// limit means the hash is broken, not that the draw was unlucky.
const MAX_REJECTIONS: u32 = 64;

pub struct BeaconSource {
    seed: Vec<u8>,
    context: Vec<u8>,
    counter: u64,
}

impl BeaconSource {
    /// Create a beacon from raw seed bytes and a domain-separation context
    /// (e.g. `b"raffle:2025-08-01"`).
    pub fn new(
        seed: impl Into<Vec<u8>>,
        context: impl Into<Vec<u8>>,
    ) -> Result<Self, RandomError> {
        let seed = seed.into();
        if seed.is_empty() {
            return Err(RandomError::InvalidSeed("seed must not be empty".into()));
        }
        Ok(Self {
            seed,
            context: context.into(),
            counter: 0,
        })
    }

    /// Create a beacon from a hex-encoded seed. A leading `0x` is accepted.
    pub fn from_hex(seed_hex: &str, context: impl Into<Vec<u8>>) -> Result<Self, RandomError> {
        let trimmed = seed_hex.strip_prefix("0x").unwrap_or(seed_hex);
        let seed = hex::decode(trimmed)
            .map_err(|e| RandomError::InvalidSeed(format!("hex decode: {e}")))?;
        Self::new(seed, context)
    }

    /// Hex-encoded `SHA-256(seed)`, suitable for publishing ahead of the draw.
    pub fn commitment(&self) -> String {
        hex::encode(Sha256::digest(&self.seed))
    }

    /// Number of candidates consumed so far.
    pub fn candidates_used(&self) -> u64 {
        self.counter
    }

    fn next_candidate(&mut self) -> u64 {
        let mut hasher = Sha256::new();
        hasher.update(&self.seed);
        hasher.update(&self.context);
        hasher.update(self.counter.to_be_bytes());
        self.counter = self.counter.wrapping_add(1);
        let digest = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&digest[..8]);
        u64::from_be_bytes(bytes)
    }
}

impl RandomSource for BeaconSource {
    fn next_below(&mut self, bound: u64) -> Result<u64, RandomError> {
        if bound == 0 {
            return Err(RandomError::ZeroBound);
        }
        // 2^64 mod bound, computed without leaving u64.
        let remainder = (u64::MAX % bound + 1) % bound;
        let max_accepted = u64::MAX - remainder;

        for _ in 0..MAX_REJECTIONS {
            let candidate = self.next_candidate();
            if candidate <= max_accepted {
                return Ok(candidate % bound);
            }
        }
        Err(RandomError::Exhausted(MAX_REJECTIONS))
    }

    fn name(&self) -> &str {
        "sha256-beacon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commitment_is_sha256_of_seed() {
        let beacon = BeaconSource::from_hex("616263", b"ctx".to_vec()).unwrap();
        assert_eq!(
            beacon.commitment(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn accepts_0x_prefix() {
        let a = BeaconSource::from_hex("0xdeadbeef", b"ctx".to_vec()).unwrap();
        let b = BeaconSource::from_hex("deadbeef", b"ctx".to_vec()).unwrap();
        assert_eq!(a.commitment(), b.commitment());
    }

    #[test]
    fn invalid_hex_rejected() {
        let err = BeaconSource::from_hex("not-hex", b"ctx".to_vec()).err();
        assert!(matches!(err, Some(RandomError::InvalidSeed(_))));
    }

    #[test]
    fn empty_seed_rejected() {
        let err = BeaconSource::new(Vec::new(), b"ctx".to_vec()).err();
        assert!(matches!(err, Some(RandomError::InvalidSeed(_))));
    }

    #[test]
    fn replay_is_deterministic() {
        let mut a = BeaconSource::new(b"block-hash".to_vec(), b"week-31".to_vec()).unwrap();
        let mut b = BeaconSource::new(b"block-hash".to_vec(), b"week-31".to_vec()).unwrap();
        for bound in [1u64, 7, 1_000, 1 << 40, u64::MAX] {
            assert_eq!(a.next_below(bound), b.next_below(bound));
        }
    }

    #[test]
    fn context_separates_draws() {
        let mut a = BeaconSource::new(b"seed".to_vec(), b"week-31".to_vec()).unwrap();
        let mut b = BeaconSource::new(b"seed".to_vec(), b"week-32".to_vec()).unwrap();
        let xs: Vec<u64> = (0..8).map(|_| a.next_below(u64::MAX).unwrap()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.next_below(u64::MAX).unwrap()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn draws_stay_below_bound() {
        let mut beacon = BeaconSource::new(b"seed".to_vec(), Vec::new()).unwrap();
        for bound in [1u64, 2, 3, 255, 256, 257, 1 << 63, (1 << 63) + 1] {
            for _ in 0..50 {
                assert!(beacon.next_below(bound).unwrap() < bound);
            }
        }
    }

    #[test]
    fn zero_bound_rejected_without_consuming() {
        let mut beacon = BeaconSource::new(b"seed".to_vec(), Vec::new()).unwrap();
        assert_eq!(beacon.next_below(0), Err(RandomError::ZeroBound));
        assert_eq!(beacon.candidates_used(), 0);
    }
}
