//! Checkpoint - Save/Load Generator State
//!
//! Enables serialization and deserialization of a generator mid-run for
//! pause/resume and replay.
//!
//! # Critical Invariants
//!
//! - **Determinism**: A restored generator continues the exact sequence
//! - **Exact Gaussian**: The cached deviate is stored as raw IEEE-754 bits,
//!   so the JSON round trip cannot perturb it
//! - **State Range**: A snapshot whose state exceeds 48 bits is rejected

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::rng::{JavaRandom, RngError};

/// Errors that can occur while saving or loading a checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Checkpoint serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid checkpoint: {0}")]
    InvalidState(#[from] RngError),
}

/// Complete generator state snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomSnapshot {
    /// 48-bit LCG state
    pub state: u64,

    /// Cached second Gaussian deviate, as `f64::to_bits`
    pub pending_gaussian_bits: Option<u64>,
}

impl RandomSnapshot {
    /// Serialize to compact JSON
    ///
    /// # Example
    /// ```
    /// use jrandom_core::{JavaRandom, RandomSnapshot};
    ///
    /// let mut rng = JavaRandom::new(12345);
    /// rng.next_gaussian();
    /// let json = rng.snapshot().to_json().unwrap();
    /// assert_eq!(RandomSnapshot::from_json(&json).unwrap(), rng.snapshot());
    /// ```
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a snapshot written by [`RandomSnapshot::to_json`]
    ///
    /// Only the JSON shape is checked here; a state outside 48 bits is
    /// rejected when the snapshot is restored.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate and rebuild the generator
    pub fn into_engine(self) -> Result<JavaRandom, CheckpointError> {
        Ok(JavaRandom::restore(&self)?)
    }

    /// SHA256 of the JSON form, for comparing checkpoints from different runs
    pub fn fingerprint(&self) -> Result<String, CheckpointError> {
        let json = self.to_json()?;

        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        let result = hasher.finalize();

        Ok(format!("{:x}", result))
    }
}

/// Load a generator directly from checkpoint JSON
pub fn load_engine(json: &str) -> Result<JavaRandom, CheckpointError> {
    RandomSnapshot::from_json(json)?.into_engine()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_json_field_names() {
        let snapshot = RandomSnapshot {
            state: 42,
            pending_gaussian_bits: None,
        };
        let json = snapshot.to_json().unwrap();
        assert_eq!(json, r#"{"state":42,"pending_gaussian_bits":null}"#);
    }

    #[test]
    fn test_load_engine_rejects_wide_state() {
        let json = format!(r#"{{"state":{},"pending_gaussian_bits":null}}"#, 1u64 << 48);
        let err = load_engine(&json).unwrap_err();
        assert!(matches!(
            err,
            CheckpointError::InvalidState(RngError::StateOutOfRange(_))
        ));
    }

    #[test]
    fn test_load_engine_rejects_garbage() {
        let err = load_engine("not json").unwrap_err();
        assert!(matches!(err, CheckpointError::Serialization(_)));
    }

    #[test]
    fn test_fingerprint_tracks_state() {
        let mut rng = JavaRandom::new(12345);
        let before = rng.snapshot().fingerprint().unwrap();
        assert_eq!(before, rng.snapshot().fingerprint().unwrap());

        rng.next_int();
        let after = rng.snapshot().fingerprint().unwrap();
        assert_ne!(before, after, "Advancing the generator should change the fingerprint");
        assert_eq!(after.len(), 64);
    }
}
