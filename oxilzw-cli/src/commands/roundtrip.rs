//! Roundtrip command implementation.

use super::warn_reset_policy;
use crate::codes::serialized_len;
use crate::error::{CliError, Result};
use crate::utils::{compression_ratio, first_difference, read_text_as};
use encoding_rs::Encoding;
use log::warn;
use oxilzw::{LzwConfig, LzwEncoder};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct RoundtripReport {
    input: String,
    config: LzwConfig,
    original_chars: usize,
    codes: usize,
    compressed_size: usize,
    ratio: f64,
    lossless: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_difference: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    decode_error: Option<String>,
    encode_ms: f64,
    decode_ms: f64,
}

/// Compress a file, decompress the codes with the seed size alone, and
/// check that the text survives.
pub fn cmd_roundtrip(
    input: &Path,
    config: &LzwConfig,
    encoding: Option<&'static Encoding>,
    json: bool,
) -> Result<()> {
    let encoder = LzwEncoder::new(*config)?;
    warn_reset_policy(config);

    let text = read_text_as(input, encoding)?;
    let original_chars = text.chars().count();
    let encoded = encoder.encode(&text)?;
    let compressed_size = serialized_len(&encoded.codes);

    let (lossless, difference, decode_error, decode_ms) = if encoded.codes.is_empty() {
        (true, None, None, 0.0)
    } else {
        match oxilzw::decode(&encoded.codes, config.initial_dict_size) {
            Ok(decoded) => {
                let difference = first_difference(&decoded.text, &text);
                (difference.is_none(), difference, None, decoded.elapsed_ms())
            }
            Err(e) => {
                warn!("decoding the roundtrip codes failed: {}", e);
                (false, None, Some(e.to_string()), 0.0)
            }
        }
    };

    let report = RoundtripReport {
        input: input.display().to_string(),
        config: *config,
        original_chars,
        codes: encoded.codes.len(),
        compressed_size,
        ratio: compression_ratio(original_chars, compressed_size),
        lossless,
        first_difference: difference,
        decode_error,
        encode_ms: encoded.elapsed_ms(),
        decode_ms,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Roundtrip {}", report.input);
        println!("  Original size:     {} characters", report.original_chars);
        println!(
            "  Compressed size:   {} characters ({} codes)",
            report.compressed_size, report.codes
        );
        println!("  Compression ratio: {:.2}", report.ratio);
        println!("  Encode time:       {:.2} ms", report.encode_ms);
        println!("  Decode time:       {:.2} ms", report.decode_ms);
        if report.lossless {
            println!("  Lossless:          yes");
        } else if let Some(error) = &report.decode_error {
            println!("  Lossless:          no ({})", error);
        } else if let Some(position) = report.first_difference {
            println!("  Lossless:          no (first difference at character {})", position);
        }
    }

    if lossless {
        Ok(())
    } else {
        // A stream that fails to decode counts as differing from the start.
        Err(CliError::VerificationFailed {
            reference: report.input,
            position: difference.unwrap_or_default(),
        })
    }
}
