//! # OxiLZW: Pure Rust LZW Compression for Text
//!
//! This crate provides LZW (Lempel-Ziv-Welch) dictionary compression and
//! decompression over Unicode text, with a configurable seed alphabet, a
//! table size cap and an optional encode-side table reset.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Unicode seed**: The table is seeded with code points
//!   `0..initial_dict_size`, so a seed of 256 covers Latin-1 and larger
//!   seeds cover any script
//! - **Integer codes**: Codes are returned as `u32` values, not bit-packed;
//!   persisting them is left to the caller
//! - **Strict decoding**: Codes the decoder cannot resolve are reported as
//!   [`LzwError::DesynchronizedTable`] instead of producing corrupted text
//!
//! ## Parameters
//!
//! | Parameter | Default | Constraint |
//! |-----------|---------|------------|
//! | `initial_dict_size` | 256 | `1..=0x110000` |
//! | `max_table_size` | 4096 | `>= initial_dict_size` |
//! | `reset_threshold` | none | `> initial_dict_size`, `0` disables |
//!
//! The decoder only needs `initial_dict_size`. It has no reset logic, so a
//! stream encoded with an active reset threshold cannot be decoded.
//!
//! ## Example
//!
//! ```rust
//! use oxilzw::{decode, encode};
//!
//! let encoded = encode("ABABABA", 256, 4096, None).unwrap();
//! assert_eq!(encoded.codes, vec![65, 66, 256, 258]);
//!
//! let decoded = decode(&encoded.codes, 256).unwrap();
//! assert_eq!(decoded.text, "ABABABA");
//! ```
//!
//! ## Table Reset
//!
//! With a reset threshold, the encoder discards its table whenever the next
//! code reaches the threshold and starts again from the seed:
//!
//! ```rust
//! use oxilzw::{LzwConfig, encode_with};
//!
//! let config = LzwConfig::new(256, 4096).with_reset_threshold(Some(300));
//! let text = "abcdefghij".repeat(40);
//! let encoded = encode_with(&text, &config).unwrap();
//! assert!(!encoded.stats.resets.is_empty());
//! assert!(encoded.codes.iter().all(|&code| code < 300));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod decoder;
mod dictionary;
mod encoder;
mod error;
pub mod timing;

pub use config::{CODE_POINT_LIMIT, LzwConfig};
pub use decoder::{Decoded, LzwDecoder};
pub use dictionary::{DecodeTable, EncodeTable, TableState};
pub use encoder::{EncodeStats, Encoded, LzwEncoder};
pub use error::{LzwError, Result};

/// A dictionary code.
pub type Code = u32;

/// Encode text with explicit parameters.
///
/// `reset_threshold` of `None` or `Some(0)` disables table resets.
///
/// # Example
///
/// ```rust
/// use oxilzw::encode;
///
/// let encoded = encode("", 256, 4096, None).unwrap();
/// assert!(encoded.codes.is_empty());
/// ```
pub fn encode(
    input: &str,
    initial_dict_size: Code,
    max_table_size: Code,
    reset_threshold: Option<Code>,
) -> Result<Encoded> {
    let config =
        LzwConfig::new(initial_dict_size, max_table_size).with_reset_threshold(reset_threshold);
    encode_with(input, &config)
}

/// Encode text with the given configuration.
pub fn encode_with(input: &str, config: &LzwConfig) -> Result<Encoded> {
    LzwEncoder::new(*config)?.encode(input)
}

/// Decode a code sequence produced with the same `initial_dict_size`.
///
/// # Example
///
/// ```rust
/// use oxilzw::{LzwError, decode};
///
/// assert_eq!(decode(&[97], 256).unwrap().text, "a");
/// assert_eq!(decode(&[], 256).unwrap_err(), LzwError::EmptyCodeSequence);
/// ```
pub fn decode(codes: &[Code], initial_dict_size: Code) -> Result<Decoded> {
    LzwDecoder::new(initial_dict_size)?.decode(codes)
}

/// Decode a code sequence produced with `config`.
///
/// Unlike [`decode`], codes at or above `max_table_size` are rejected, and a
/// configuration with a reachable reset threshold is refused up front.
pub fn decode_with(codes: &[Code], config: &LzwConfig) -> Result<Decoded> {
    LzwDecoder::from_config(config)?.decode(codes)
}
