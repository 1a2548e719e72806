//! Deterministic random number generation
//!
//! Reproduces the `java.util.Random` 48-bit LCG exactly.
//! CRITICAL: Every derived value funnels through `JavaRandom::next`, and the
//! order of those calls is part of the output contract.

mod java_random;
pub mod seed;
mod shared;

pub use java_random::{JavaRandom, RngError};
pub use shared::SharedJavaRandom;

/// LCG multiplier (`0x5DEECE66D`)
pub const MULTIPLIER: u64 = 0x5_DEEC_E66D;

/// LCG increment
pub const ADDEND: u64 = 0xB;

/// Mask keeping the state inside 48 bits
pub const STATE_MASK: u64 = (1 << 48) - 1;
