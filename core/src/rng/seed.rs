//! Seed handling
//!
//! `scramble` is the reproducible seeding path. `entropy_seed` is the
//! default-constructor path: a process-wide uniquifier mixed with the wall
//! clock, so two generators built in the same nanosecond still diverge.
//! Nothing that needs reproducible output should go through it.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use super::{MULTIPLIER, STATE_MASK};

/// Starting value of the seed uniquifier
const UNIQUIFIER_INIT: i64 = 8_682_522_807_148_012;

/// Multiplier applied to the uniquifier on every default construction
const UNIQUIFIER_STEP: i64 = 1_181_783_497_276_652_981;

static SEED_UNIQUIFIER: AtomicI64 = AtomicI64::new(UNIQUIFIER_INIT);

/// Map a raw 64-bit seed to the initial 48-bit state
///
/// # Example
/// ```
/// use jrandom_core::rng::seed::scramble;
///
/// assert_eq!(scramble(0), 0x5DEECE66D);
/// assert!(scramble(-1) < 1 << 48);
/// ```
pub fn scramble(seed: i64) -> u64 {
    (seed as u64 ^ MULTIPLIER) & STATE_MASK
}

/// Advance the process-wide uniquifier and return its new value
///
/// Lock-free: retried until this caller wins the compare-exchange, so
/// concurrent callers never observe the same value.
fn next_uniquifier() -> i64 {
    let mut current = SEED_UNIQUIFIER.load(Ordering::Relaxed);
    loop {
        let next = current.wrapping_mul(UNIQUIFIER_STEP);
        match SEED_UNIQUIFIER.compare_exchange_weak(
            current,
            next,
            Ordering::SeqCst,
            Ordering::Relaxed,
        ) {
            Ok(_) => return next,
            Err(observed) => current = observed,
        }
    }
}

/// Non-reproducible seed for the default constructor
pub fn entropy_seed() -> i64 {
    // A clock before the epoch just contributes nothing
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as i64)
        .unwrap_or(0);
    next_uniquifier() ^ nanos
}
