//! Thread-safe generator
//!
//! One `parking_lot::Mutex` guards both the state word and the cached
//! Gaussian, and it is held for the whole derived operation. Two-draw
//! operations (`next_long`, `next_double`) and the polar Gaussian are
//! therefore indivisible: concurrent callers each consume a distinct,
//! globally ordered run of state transitions.

use parking_lot::Mutex;

use super::{JavaRandom, RngError};
use crate::checkpoint::RandomSnapshot;

/// `JavaRandom` shareable across threads (wrap in `Arc`)
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use jrandom_core::SharedJavaRandom;
///
/// let rng = Arc::new(SharedJavaRandom::new(12345));
/// let worker = {
///     let rng = Arc::clone(&rng);
///     std::thread::spawn(move || rng.next_long())
/// };
/// rng.next_int();
/// worker.join().unwrap();
/// ```
#[derive(Debug)]
pub struct SharedJavaRandom {
    inner: Mutex<JavaRandom>,
}

impl SharedJavaRandom {
    /// Create a generator seeded exactly like `JavaRandom::new`
    pub fn new(seed: i64) -> Self {
        Self::from_engine(JavaRandom::new(seed))
    }

    /// Take ownership of an existing engine, keeping its state and Gaussian cache
    pub fn from_engine(engine: JavaRandom) -> Self {
        Self {
            inner: Mutex::new(engine),
        }
    }

    /// Reseed and discard any pending Gaussian
    pub fn set_seed(&self, seed: i64) {
        self.inner.lock().set_seed(seed);
    }

    /// Next 32-bit value, see [`JavaRandom::next_int`]
    pub fn next_int(&self) -> i32 {
        self.inner.lock().next_int()
    }

    /// Uniform `f32` in `[0, 1)`
    pub fn next_float(&self) -> f32 {
        self.inner.lock().next_float()
    }

    /// Next 64-bit value; both underlying draws happen under one lock
    ///
    /// # Example
    /// ```
    /// use jrandom_core::{JavaRandom, SharedJavaRandom};
    ///
    /// let shared = SharedJavaRandom::new(42);
    /// assert_eq!(shared.next_long(), JavaRandom::new(42).next_long());
    /// ```
    pub fn next_long(&self) -> i64 {
        self.inner.lock().next_long()
    }

    /// Uniform `f64` in `[0, 1)` built from two draws under one lock
    pub fn next_double(&self) -> f64 {
        self.inner.lock().next_double()
    }

    /// Fair coin from a single 1-bit draw
    pub fn next_boolean(&self) -> bool {
        self.inner.lock().next_boolean()
    }

    /// Uniform value in `[0, bound)`
    ///
    /// Fails with [`RngError::InvalidBound`] for `bound <= 0` and leaves the
    /// state untouched.
    pub fn next_int_bounded(&self, bound: i32) -> Result<i32, RngError> {
        self.inner.lock().next_int_bounded(bound)
    }

    /// Standard normal value; the spare of each generated pair is cached
    pub fn next_gaussian(&self) -> f64 {
        self.inner.lock().next_gaussian()
    }

    /// Run several operations under a single lock acquisition
    ///
    /// Use this when a caller needs a reproducible multi-value draw (e.g. a
    /// full canonical round) that no other thread may interleave with.
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut JavaRandom) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Capture state and Gaussian cache for a later [`JavaRandom::restore`]
    pub fn snapshot(&self) -> RandomSnapshot {
        self.inner.lock().snapshot()
    }

    /// Unwrap the engine without changing its state
    pub fn into_inner(self) -> JavaRandom {
        self.inner.into_inner()
    }
}

impl From<JavaRandom> for SharedJavaRandom {
    fn from(engine: JavaRandom) -> Self {
        Self::from_engine(engine)
    }
}
