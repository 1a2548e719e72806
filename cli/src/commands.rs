//! Command implementations
//!
//! Each command writes its payload (stream, values, verdict) to the given
//! writer and logs progress through `tracing`, so stdout stays diffable.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use jrandom_core::canonical::DigestWriter;
use jrandom_core::{compare_streams, write_stream, CompareError, JavaRandom, StreamConfig};
use tracing::{debug, info, warn};

/// Exit code for success (and for a clean comparison)
pub const EXIT_OK: u8 = 0;

/// Exit code when the streams differ
pub const EXIT_MISMATCH: u8 = 1;

/// Exit code when a producer left no output
pub const EXIT_PRODUCER_CRASHED: u8 = 2;

/// Exit code for any other failure (bad arguments, I/O)
pub const EXIT_ERROR: u8 = 3;

/// Write the canonical stream for `config`, returning its SHA256
///
/// Rounds are written as they are drawn, so memory use does not grow with
/// the round count.
pub fn generate<W: Write>(config: &StreamConfig, out: &mut W) -> Result<String> {
    config.validate()?;
    info!(seed = config.seed, rounds = config.rounds, "generating canonical stream");

    let started = Instant::now();
    let mut writer = DigestWriter::new(out);
    let lines = write_stream(config, &mut writer).context("failed to write canonical stream")?;
    let (_, digest) = writer.finish();

    info!(
        lines,
        elapsed_ms = started.elapsed().as_millis() as u64,
        sha256 = %digest,
        "stream written"
    );
    Ok(digest)
}

/// Write `count` plain `next_int()` values, one per line
pub fn ints<W: Write>(seed: i64, count: usize, out: &mut W) -> Result<()> {
    debug!(seed, count, "emitting nextInt() sequence");

    let mut rng = JavaRandom::new(seed);
    for _ in 0..count {
        writeln!(out, "{}", rng.next_int())?;
    }
    out.flush()?;
    Ok(())
}

/// Read a producer's output, treating a missing file as a crash
fn read_output(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
    }
}

/// Compare two stream files, returning the process exit code
pub fn compare_files<W: Write>(
    expected: &Path,
    actual: &Path,
    tolerance: u64,
    out: &mut W,
) -> Result<u8> {
    let (Some(expected_text), Some(actual_text)) = (read_output(expected)?, read_output(actual)?)
    else {
        for path in [expected, actual] {
            if !path.exists() {
                warn!(path = %path.display(), "output file missing");
            }
        }
        writeln!(out, "FAIL: output file missing (producer crashed?)")?;
        return Ok(EXIT_PRODUCER_CRASHED);
    };

    compare_text(&expected_text, &actual_text, tolerance, out)
}

/// Compare two in-memory streams, returning the process exit code
pub fn compare_text<W: Write>(
    expected: &str,
    actual: &str,
    tolerance: u64,
    out: &mut W,
) -> Result<u8> {
    let code = match compare_streams(expected, actual, tolerance) {
        Ok(report) => {
            if report.tolerated > 0 {
                info!(
                    tolerated = report.tolerated,
                    tolerance, "double fields matched within ULP tolerance"
                );
            }
            writeln!(out, "OK: {} lines match", report.lines)?;
            EXIT_OK
        }
        Err(err @ CompareError::EmptyStream { .. }) => {
            writeln!(out, "FAIL: {}", err)?;
            EXIT_PRODUCER_CRASHED
        }
        Err(err) => {
            writeln!(out, "FAIL: {}", err)?;
            EXIT_MISMATCH
        }
    };
    out.flush()?;
    Ok(code)
}
