//! Canonical output stream
//!
//! A run draws N rounds of 7 values in a fixed order and writes one value
//! per line:
//!
//! | Slot | Draw               | Encoding                              |
//! |------|--------------------|---------------------------------------|
//! | 0    | `next_int()`       | signed decimal                        |
//! | 1    | `next_float()`     | 8 lowercase hex digits of the bits    |
//! | 2    | `next_long()`      | signed decimal                        |
//! | 3    | `next_double()`    | 16 lowercase hex digits of the bits   |
//! | 4    | `next_boolean()`   | `true` / `false`                      |
//! | 5    | `next_int(100)`    | signed decimal                        |
//! | 6    | `next_gaussian()`  | 16 lowercase hex digits of the bits   |
//!
//! Streams produced by different runtimes are then diffed with
//! [`compare::compare_streams`].

pub mod compare;

use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::rng::JavaRandom;

/// Bound used for the bounded-int slot of every round
pub const ROUND_BOUND: i32 = 100;

/// Lines written per round
pub const VALUES_PER_ROUND: usize = 7;

/// Errors in run configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("rounds must be at least 1")]
    ZeroRounds,
}

/// Errors while producing or decoding a stream
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("Invalid stream configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to write stream: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed field '{field}': expected {width} hex digits")]
    Malformed { field: String, width: usize },

    #[error("Stream is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Run configuration for one canonical stream
///
/// # Example
/// ```
/// use jrandom_core::StreamConfig;
///
/// let config = StreamConfig::new(12345, 10);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.line_count(), 70);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Seed passed to `JavaRandom::new`
    pub seed: i64,

    /// Number of 7-value rounds
    pub rounds: usize,
}

impl StreamConfig {
    /// Create a configuration; call [`StreamConfig::validate`] before use
    pub fn new(seed: i64, rounds: usize) -> Self {
        Self { seed, rounds }
    }

    /// Check the configuration can produce a non-empty stream
    ///
    /// # Example
    /// ```
    /// use jrandom_core::{ConfigError, StreamConfig};
    ///
    /// assert_eq!(StreamConfig::new(1, 0).validate(), Err(ConfigError::ZeroRounds));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        Ok(())
    }

    /// Lines the stream will contain (7 per round)
    pub fn line_count(&self) -> usize {
        self.rounds * VALUES_PER_ROUND
    }
}

/// One round of draws, in canonical order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Round {
    pub int: i32,
    pub float: f32,
    pub long: i64,
    pub double: f64,
    pub boolean: bool,
    pub bounded: i32,
    pub gaussian: f64,
}

impl Round {
    /// Draw the next round from the generator
    ///
    /// Fields are evaluated top to bottom; the order is part of the format.
    pub fn draw(rng: &mut JavaRandom) -> Self {
        let int = rng.next_int();
        let float = rng.next_float();
        let long = rng.next_long();
        let double = rng.next_double();
        let boolean = rng.next_boolean();
        let bounded = rng.next_below(ROUND_BOUND);
        let gaussian = rng.next_gaussian();

        Self {
            int,
            float,
            long,
            double,
            boolean,
            bounded,
            gaussian,
        }
    }

    /// Canonical text of each slot, without line terminators
    pub fn lines(&self) -> [String; VALUES_PER_ROUND] {
        [
            self.int.to_string(),
            encode_f32(self.float),
            self.long.to_string(),
            encode_f64(self.double),
            self.boolean.to_string(),
            self.bounded.to_string(),
            encode_f64(self.gaussian),
        ]
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }
}

/// 8-digit lowercase hex of the IEEE-754 single-precision bits
pub fn encode_f32(value: f32) -> String {
    format!("{:08x}", value.to_bits())
}

/// 16-digit lowercase hex of the IEEE-754 double-precision bits
pub fn encode_f64(value: f64) -> String {
    format!("{:016x}", value.to_bits())
}

/// Inverse of [`encode_f32`]
pub fn decode_f32(field: &str) -> Result<f32, StreamError> {
    parse_hex_bits(field, 8).map(|bits| f32::from_bits(bits as u32))
}

/// Inverse of [`encode_f64`]
pub fn decode_f64(field: &str) -> Result<f64, StreamError> {
    parse_hex_bits(field, 16).map(f64::from_bits)
}

/// True if `field` is exactly `width` hex digits
pub(crate) fn is_hex_field(field: &str, width: usize) -> bool {
    field.len() == width && field.bytes().all(|b| b.is_ascii_hexdigit())
}

fn parse_hex_bits(field: &str, width: usize) -> Result<u64, StreamError> {
    let malformed = || StreamError::Malformed {
        field: field.to_string(),
        width,
    };
    if !is_hex_field(field, width) {
        return Err(malformed());
    }
    u64::from_str_radix(field, 16).map_err(|_| malformed())
}

/// Seed a fresh generator and write `config.rounds` rounds
///
/// Returns the number of lines written.
pub fn write_stream<W: Write>(config: &StreamConfig, writer: &mut W) -> Result<usize, StreamError> {
    config.validate()?;

    let mut rng = JavaRandom::new(config.seed);
    for _ in 0..config.rounds {
        Round::draw(&mut rng).write_to(writer)?;
    }
    writer.flush()?;

    Ok(config.line_count())
}

/// [`write_stream`] into a `String`
pub fn render_stream(config: &StreamConfig) -> Result<String, StreamError> {
    let mut buffer = Vec::with_capacity(config.line_count() * 16);
    write_stream(config, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Lowercase hex SHA256 of a rendered stream
pub fn stream_digest(stream: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(stream.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Writer that forwards bytes and hashes them on the way through
///
/// Lets a caller stream arbitrarily many rounds to a file or stdout and
/// still report the same digest [`stream_digest`] would give for the
/// rendered text, without holding the stream in memory.
///
/// # Example
/// ```
/// use jrandom_core::canonical::DigestWriter;
/// use jrandom_core::{render_stream, stream_digest, write_stream, StreamConfig};
///
/// let config = StreamConfig::new(12345, 3);
/// let mut writer = DigestWriter::new(Vec::new());
/// write_stream(&config, &mut writer).unwrap();
/// let (bytes, digest) = writer.finish();
///
/// let rendered = render_stream(&config).unwrap();
/// assert_eq!(bytes, rendered.as_bytes());
/// assert_eq!(digest, stream_digest(&rendered));
/// ```
pub struct DigestWriter<W: Write> {
    inner: W,
    hasher: Sha256,
}

impl<W: Write> DigestWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            hasher: Sha256::new(),
        }
    }

    /// Return the wrapped writer and the lowercase hex SHA256 of all bytes written
    pub fn finish(self) -> (W, String) {
        (self.inner, format!("{:x}", self.hasher.finalize()))
    }
}

impl<W: Write> Write for DigestWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // Only hash what the inner writer accepted
        let written = self.inner.write(buf)?;
        self.hasher.update(&buf[..written]);
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
