//! Stream comparison with ULP tolerance
//!
//! Every field must match exactly, except the two double slots of a round
//! (`next_double`, `next_gaussian`). When both sides of a double slot are
//! 16 hex digits, they are compared as `u64` bit patterns and accepted if
//! they differ by at most `tolerance`. This absorbs the few-ULP drift of
//! `ln`/`sqrt` between math libraries in the Gaussian.

use std::fmt;

use thiserror::Error;

use super::{is_hex_field, VALUES_PER_ROUND};

/// Largest bit-pattern distance accepted on double slots by default
pub const DEFAULT_ULP_TOLERANCE: u64 = 3;

/// Slots within a round that hold a 16-hex-digit double
const DOUBLE_SLOTS: [usize; 2] = [3, 6];

/// Which of the two compared streams a problem was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamSide {
    Expected,
    Actual,
}

impl fmt::Display for StreamSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamSide::Expected => write!(f, "expected"),
            StreamSide::Actual => write!(f, "actual"),
        }
    }
}

/// Reasons two streams are not considered equal
#[derive(Debug, Error, PartialEq)]
pub enum CompareError {
    /// The producer wrote nothing, most likely because it crashed
    #[error("{side} stream is empty (producer crashed?)")]
    EmptyStream { side: StreamSide },

    #[error("Mismatch at line {line}: expected '{expected}', got '{actual}'")]
    Mismatch {
        line: usize,
        expected: String,
        actual: String,
    },

    #[error("Line count differs: expected {expected} lines, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Summary of a successful comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareReport {
    /// Lines compared
    pub lines: usize,

    /// Double fields that differed but fell within tolerance
    pub tolerated: usize,
}

/// Outcome of comparing a single line pair
enum FieldMatch {
    Exact,
    Tolerated,
    Different,
}

fn is_double_slot(index: usize) -> bool {
    DOUBLE_SLOTS.contains(&(index % VALUES_PER_ROUND))
}

fn compare_field(index: usize, expected: &str, actual: &str, tolerance: u64) -> FieldMatch {
    if expected == actual {
        return FieldMatch::Exact;
    }
    if !is_double_slot(index) || !is_hex_field(expected, 16) || !is_hex_field(actual, 16) {
        return FieldMatch::Different;
    }

    match (
        u64::from_str_radix(expected, 16),
        u64::from_str_radix(actual, 16),
    ) {
        (Ok(a), Ok(b)) if a.abs_diff(b) <= tolerance => FieldMatch::Tolerated,
        _ => FieldMatch::Different,
    }
}

/// Compare two canonical streams line by line
///
/// Stops at the first difference and reports its 1-based line number.
///
/// # Errors
/// - `EmptyStream` if either side has no content
/// - `Mismatch` on the first differing line
/// - `LengthMismatch` if one stream is a strict prefix of the other
///
/// # Example
/// ```
/// use jrandom_core::{compare_streams, CompareError};
///
/// let report = compare_streams("1\n3ff0000000000000\n", "1\n3ff0000000000000\n", 3).unwrap();
/// assert_eq!(report.lines, 2);
///
/// let err = compare_streams("1\n2\n", "1\n5\n", 3).unwrap_err();
/// assert!(matches!(err, CompareError::Mismatch { line: 2, .. }));
/// ```
pub fn compare_streams(
    expected: &str,
    actual: &str,
    tolerance: u64,
) -> Result<CompareReport, CompareError> {
    if expected.trim().is_empty() {
        return Err(CompareError::EmptyStream {
            side: StreamSide::Expected,
        });
    }
    if actual.trim().is_empty() {
        return Err(CompareError::EmptyStream {
            side: StreamSide::Actual,
        });
    }

    let expected_lines: Vec<&str> = expected.lines().collect();
    let actual_lines: Vec<&str> = actual.lines().collect();

    let mut tolerated = 0;
    for (index, (e, a)) in expected_lines.iter().zip(&actual_lines).enumerate() {
        match compare_field(index, e, a, tolerance) {
            FieldMatch::Exact => {}
            FieldMatch::Tolerated => tolerated += 1,
            FieldMatch::Different => {
                return Err(CompareError::Mismatch {
                    line: index + 1,
                    expected: e.to_string(),
                    actual: a.to_string(),
                })
            }
        }
    }

    if expected_lines.len() != actual_lines.len() {
        return Err(CompareError::LengthMismatch {
            expected: expected_lines.len(),
            actual: actual_lines.len(),
        });
    }

    Ok(CompareReport {
        lines: expected_lines.len(),
        tolerated,
    })
}
