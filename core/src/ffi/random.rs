//! PyO3 wrapper for JavaRandom

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::rng::JavaRandom;

/// Python wrapper for the Rust generator
///
/// # Example (from Python)
///
/// ```python
/// from jrandom_core import JavaRandom
///
/// rng = JavaRandom(12345)
/// assert rng.next_int() == 1553932502
/// roll = rng.next_int_bounded(6)
/// ```
#[pyclass(name = "JavaRandom")]
pub struct PyJavaRandom {
    inner: JavaRandom,
}

#[pymethods]
impl PyJavaRandom {
    /// Create a generator; without a seed the sequence is not reproducible
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<i64>) -> Self {
        let inner = match seed {
            Some(seed) => JavaRandom::new(seed),
            None => JavaRandom::from_entropy(),
        };
        PyJavaRandom { inner }
    }

    fn set_seed(&mut self, seed: i64) {
        self.inner.set_seed(seed);
    }

    fn next_int(&mut self) -> i32 {
        self.inner.next_int()
    }

    /// Raises ValueError if `bound` is not positive
    fn next_int_bounded(&mut self, bound: i32) -> PyResult<i32> {
        self.inner
            .next_int_bounded(bound)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn next_float(&mut self) -> f32 {
        self.inner.next_float()
    }

    fn next_long(&mut self) -> i64 {
        self.inner.next_long()
    }

    fn next_double(&mut self) -> f64 {
        self.inner.next_double()
    }

    fn next_boolean(&mut self) -> bool {
        self.inner.next_boolean()
    }

    fn next_gaussian(&mut self) -> f64 {
        self.inner.next_gaussian()
    }

    /// Current 48-bit state (for debugging divergences)
    fn state(&self) -> u64 {
        self.inner.state()
    }
}
