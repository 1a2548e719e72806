//! 48-bit linear congruential generator compatible with `java.util.Random`
//!
//! # Algorithm
//!
//! ```text
//! state = (state * 0x5DEECE66D + 0xB) & ((1 << 48) - 1)
//! next(bits) = (state >> (48 - bits)) as i32
//! ```
//!
//! Every derived value (ints, floats, longs, doubles, booleans, bounded
//! ints, Gaussians) is built from one or more `next` calls, in a fixed order.
//!
//! # Determinism
//!
//! Same seed → same sequence, bit for bit, as any other conforming
//! implementation. The only exception is `nextGaussian`, whose `ln`/`sqrt`
//! may differ by a few ULP between math libraries.

use thiserror::Error;

use super::seed::{entropy_seed, scramble};
use super::{ADDEND, MULTIPLIER, STATE_MASK};
use crate::checkpoint::RandomSnapshot;

/// 2^-24, the spacing of `next_float` outputs
const FLOAT_UNIT: f32 = 1.0 / (1u32 << 24) as f32;

/// 2^-53, the spacing of `next_double` outputs
const DOUBLE_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// Errors raised by generator operations
#[derive(Debug, Error, PartialEq)]
pub enum RngError {
    #[error("bound must be positive, got {0}")]
    InvalidBound(i32),

    #[error("state {0:#x} does not fit in 48 bits")]
    StateOutOfRange(u64),
}

/// Bit-exact reproduction of `java.util.Random`
///
/// Not cryptographically secure. It exists so that sequences produced here
/// can be diffed against sequences produced by other runtimes.
///
/// # Example
/// ```
/// use jrandom_core::JavaRandom;
///
/// let mut rng = JavaRandom::new(12345);
/// assert_eq!(rng.next_int(), 1553932502);
/// assert_eq!(rng.next_int_bounded(100), Ok(80));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JavaRandom {
    /// Internal state, always within 48 bits
    state: u64,

    /// Second deviate of the last polar-method pair, if not yet returned
    pending_gaussian: Option<f64>,
}

impl JavaRandom {
    /// Create a generator from a 64-bit seed
    ///
    /// Matches `new java.util.Random(seed)`.
    pub fn new(seed: i64) -> Self {
        Self {
            state: scramble(seed),
            pending_gaussian: None,
        }
    }

    /// Create a generator from a time-dependent seed
    ///
    /// Convenience only: the resulting sequence is not reproducible.
    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }

    /// Reseed in place, discarding any cached Gaussian
    pub fn set_seed(&mut self, seed: i64) {
        self.state = scramble(seed);
        self.pending_gaussian = None;
    }

    /// Current 48-bit state word
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Whether the next `next_gaussian` call will return a cached value
    pub fn has_pending_gaussian(&self) -> bool {
        self.pending_gaussian.is_some()
    }

    /// Advance the state and return its top `bits` bits (1..=32)
    ///
    /// With `bits == 32` the result uses the full signed range.
    fn next(&mut self, bits: u32) -> i32 {
        debug_assert!((1..=32).contains(&bits), "bits out of range: {}", bits);
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(ADDEND) & STATE_MASK;
        (self.state >> (48 - bits)) as i32
    }

    /// Uniform `i32` over the full signed range
    pub fn next_int(&mut self) -> i32 {
        self.next(32)
    }

    /// Uniform `f32` in `[0.0, 1.0)` with 24 bits of precision
    pub fn next_float(&mut self) -> f32 {
        self.next(24) as f32 * FLOAT_UNIT
    }

    /// Uniform `i64` built from two 32-bit draws
    ///
    /// The low half is sign-extended and added, not OR-ed.
    pub fn next_long(&mut self) -> i64 {
        let high = i64::from(self.next(32));
        let low = i64::from(self.next(32));
        (high << 32).wrapping_add(low)
    }

    /// Uniform `f64` in `[0.0, 1.0)` with 53 bits of precision
    pub fn next_double(&mut self) -> f64 {
        let high = i64::from(self.next(26));
        let low = i64::from(self.next(27));
        ((high << 27) + low) as f64 * DOUBLE_UNIT
    }

    /// Uniform boolean from a single bit
    pub fn next_boolean(&mut self) -> bool {
        self.next(1) != 0
    }

    /// Uniform `i32` in `[0, bound)`
    ///
    /// # Errors
    /// Returns `RngError::InvalidBound` if `bound <= 0`; no state is consumed.
    pub fn next_int_bounded(&mut self, bound: i32) -> Result<i32, RngError> {
        if bound <= 0 {
            return Err(RngError::InvalidBound(bound));
        }
        Ok(self.next_below(bound))
    }

    /// `next_int_bounded` for a bound already known to be positive
    pub(crate) fn next_below(&mut self, bound: i32) -> i32 {
        debug_assert!(bound > 0);

        let m = bound - 1;
        let mut r = self.next(31);

        // Power of two: take the high bits, never rejects
        if bound & m == 0 {
            return ((i64::from(bound) * i64::from(r)) >> 31) as i32;
        }

        // Reject draws from the incomplete final bucket. The retry test is
        // the 32-bit overflow of `u - r + m`, which fixes how many `next`
        // calls are consumed.
        let mut u = r;
        loop {
            r = u % bound;
            if u.wrapping_sub(r).wrapping_add(m) >= 0 {
                return r;
            }
            u = self.next(31);
        }
    }

    /// Standard normal deviate (polar method)
    ///
    /// Deviates are generated in pairs: the first call of a pair consumes
    /// at least two `next_double` draws and caches the second deviate; the
    /// following call returns the cached value without touching the state.
    pub fn next_gaussian(&mut self) -> f64 {
        if let Some(cached) = self.pending_gaussian.take() {
            return cached;
        }

        loop {
            let v1 = 2.0 * self.next_double() - 1.0;
            let v2 = 2.0 * self.next_double() - 1.0;
            let s = v1 * v1 + v2 * v2;
            if s < 1.0 && s != 0.0 {
                let multiplier = (-2.0 * s.ln() / s).sqrt();
                self.pending_gaussian = Some(v2 * multiplier);
                return v1 * multiplier;
            }
        }
    }

    /// Capture the full generator state
    pub fn snapshot(&self) -> RandomSnapshot {
        RandomSnapshot {
            state: self.state,
            pending_gaussian_bits: self.pending_gaussian.map(f64::to_bits),
        }
    }

    /// Rebuild a generator from a snapshot
    ///
    /// # Errors
    /// Returns `RngError::StateOutOfRange` if the snapshot state exceeds 48 bits.
    pub fn restore(snapshot: &RandomSnapshot) -> Result<Self, RngError> {
        if snapshot.state & !STATE_MASK != 0 {
            return Err(RngError::StateOutOfRange(snapshot.state));
        }
        Ok(Self {
            state: snapshot.state,
            pending_gaussian: snapshot.pending_gaussian_bits.map(f64::from_bits),
        })
    }
}

impl Default for JavaRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}
