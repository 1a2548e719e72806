//! jrandom Core - Rust Engine
//!
//! Bit-exact reimplementation of the `java.util.Random` 48-bit linear
//! congruential generator, plus the tooling used to verify it against
//! other runtimes.
//!
//! # Architecture
//!
//! - **rng**: The generator itself (single-owner and mutex-shared forms)
//! - **canonical**: Canonical text stream of generator rounds, and tolerant comparison
//! - **checkpoint**: Serializable engine snapshots for pause/resume
//!
//! # Critical Invariants
//!
//! 1. Generator state is always masked to 48 bits
//! 2. Same seed + same call sequence = same output, bit for bit
//! 3. The generator is NOT cryptographically secure

// Module declarations
pub mod canonical;
pub mod checkpoint;
pub mod rng;

// Re-exports for convenience
pub use canonical::{
    compare::{compare_streams, CompareError, CompareReport, StreamSide, DEFAULT_ULP_TOLERANCE},
    render_stream, stream_digest, write_stream, ConfigError, Round, StreamConfig, StreamError,
    ROUND_BOUND, VALUES_PER_ROUND,
};
pub use checkpoint::{CheckpointError, RandomSnapshot};
pub use rng::{JavaRandom, RngError, SharedJavaRandom};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn jrandom_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::random::PyJavaRandom>()?;
    Ok(())
}
