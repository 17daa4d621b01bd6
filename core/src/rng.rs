//! Deterministic random number generation.
//!
//! RULE: Nothing in the engine may call any platform RNG.
//! All randomness flows through a ReportRng seeded from the
//! subject key of the report being generated.
//!
//! The generator is mulberry32 over a single u32 state word. This is a
//! portability contract, not a style choice: reports generated years ago
//! must reproduce bit-for-bit, so every intermediate step wraps at 32
//! bits and the float mapping divides the final word by 2^32. Do not
//! swap in an ecosystem generator here.

use crate::types::Seed;

const FNV_OFFSET: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 16_777_619;

/// FNV-1a hash of a string key to a 32-bit seed.
/// Stable across runs and platforms (unlike std's randomized hasher).
/// Total: any string, including the empty one, maps to a valid seed.
pub fn hash_to_seed(key: &str) -> Seed {
    let mut hash = FNV_OFFSET;
    for byte in key.as_bytes() {
        hash ^= u32::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// A deterministic stream of floats in [0.0, 1.0) for a single report.
///
/// Each generation owns exactly one stream; streams are never shared or
/// pooled across requests. Restartable only by reseeding.
pub struct ReportRng {
    state: u32,
}

impl ReportRng {
    pub fn new(seed: Seed) -> Self {
        Self { state: seed }
    }

    /// Seed a stream directly from a string key.
    pub fn from_key(key: &str) -> Self {
        Self::new(hash_to_seed(key))
    }

    /// Advance the state and return the next raw 32-bit word.
    /// mulberry32: fixed odd increment, two xorshift-multiply rounds,
    /// all arithmetic wrapping at 32 bits.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}
