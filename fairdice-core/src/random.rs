//! Randomness sources for fair rounds
//!
//! The engine only sees the [`RandomSource`] trait. [`OsRandom`] is backed by
//! the operating system CSPRNG; [`FixedRandom`] replays a known key and number
//! so digests can be asserted exactly.

use rand::rngs::OsRng;
use rand::RngCore;

/// Source of the secret key and the computer's number
pub trait RandomSource {
    /// Fill `key` with fresh secret bytes
    fn fill_key(&mut self, key: &mut [u8]);

    /// Uniform integer in `[0, max)`.
    ///
    /// # Panics
    ///
    /// Implementations may panic when `max` is 0. [`FairnessEngine::commit`]
    /// rejects an empty range before calling this.
    ///
    /// [`FairnessEngine::commit`]: crate::FairnessEngine::commit
    fn uniform_below(&mut self, max: u32) -> u32;
}

/// Operating system CSPRNG
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill_key(&mut self, key: &mut [u8]) {
        OsRng.fill_bytes(key);
    }

    fn uniform_below(&mut self, max: u32) -> u32 {
        sample_below(&mut OsRng, max)
    }
}

/// Rejection sampling over 32-bit draws.
///
/// Only draws below the largest multiple of `max` are kept, so every residue
/// has the same number of preimages.
///
/// # Panics
///
/// Panics if `max` is 0.
pub fn sample_below<R: RngCore + ?Sized>(rng: &mut R, max: u32) -> u32 {
    assert!(max > 0, "sample range must be non-empty");

    let zone = u32::MAX - (u32::MAX - max + 1) % max;
    loop {
        let draw = rng.next_u32();
        if draw <= zone {
            return draw % max;
        }
    }
}

/// Replays the same key and number on every round
#[derive(Debug, Clone)]
pub struct FixedRandom {
    key: Vec<u8>,
    number: u32,
}

impl FixedRandom {
    pub fn new(key: Vec<u8>, number: u32) -> Self {
        Self { key, number }
    }
}

impl RandomSource for FixedRandom {
    fn fill_key(&mut self, key: &mut [u8]) {
        for (dst, src) in key.iter_mut().zip(self.key.iter().cycle()) {
            *dst = *src;
        }
    }

    fn uniform_below(&mut self, max: u32) -> u32 {
        self.number % max
    }
}
