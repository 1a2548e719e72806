//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings exposing the generator to Python, so that Python-side
//! harnesses can drive the exact same sequence.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: Only the generator's own operations are exposed
//! 2. **Simple types**: Python ints, floats and bools only
//! 3. **Safe errors**: Rust errors become Python exceptions

pub mod random;
