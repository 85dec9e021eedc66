//! Decompress command implementation.

use crate::codes::parse_codes;
use crate::error::{CliError, Result};
use crate::session::SessionStore;
use crate::utils::{first_difference, read_text_as, write_stdout_as, write_text_as};
use encoding_rs::Encoding;
use log::info;
use oxilzw::{Code, LzwConfig, LzwDecoder};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Where the codes to decompress come from.
pub enum CodeSource<'a> {
    /// A file holding a serialized code stream.
    File(&'a Path),
    /// A stored session, decoded with the configuration it was encoded with.
    Session(&'a str),
}

/// Options for decompressing a code stream.
pub struct DecompressOptions<'a> {
    pub output: Option<&'a Path>,
    pub initial_dict_size: Code,
    /// Decode with the table capped at this size.
    pub max_table_size: Option<Code>,
    /// Compare the result against this text file.
    pub verify: Option<&'a Path>,
    /// Encoding for the output and reference files; `None` means UTF-8.
    pub encoding: Option<&'static Encoding>,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct DecompressReport {
    source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    codes: usize,
    chars: usize,
    verified: bool,
    elapsed_ms: f64,
}

pub fn cmd_decompress(
    source: &CodeSource,
    store: &SessionStore,
    options: &DecompressOptions,
) -> Result<()> {
    let (label, codes, decoder) = match source {
        CodeSource::File(path) => {
            let codes = parse_codes(&fs::read_to_string(path)?)?;
            let decoder = match options.max_table_size {
                Some(max) => {
                    LzwDecoder::from_config(&LzwConfig::new(options.initial_dict_size, max))?
                }
                None => LzwDecoder::new(options.initial_dict_size)?,
            };
            (path.display().to_string(), codes, decoder)
        }
        CodeSource::Session(id) => {
            let record = store.load(id)?;
            let decoder = LzwDecoder::from_config(&record.config)?;
            (format!("session {}", record.id), record.codes, decoder)
        }
    };

    let decoded = decoder.decode(&codes)?;
    info!(
        "decoded {} codes into {} characters",
        codes.len(),
        decoded.text.chars().count()
    );

    let verified = match options.verify {
        Some(reference) => {
            let expected = read_text_as(reference, options.encoding)?;
            if let Some(position) = first_difference(&decoded.text, &expected) {
                return Err(CliError::VerificationFailed {
                    reference: reference.display().to_string(),
                    position,
                });
            }
            true
        }
        None => false,
    };

    if let Some(path) = options.output {
        write_text_as(path, &decoded.text, options.encoding)?;
    }

    if options.json {
        let report = DecompressReport {
            source: label,
            output: options.output.map(|p| p.display().to_string()),
            codes: codes.len(),
            chars: decoded.text.chars().count(),
            verified,
            elapsed_ms: decoded.elapsed_ms(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match options.output {
        Some(path) => {
            println!(
                "Decompressed {} in {:.2} ms -> {}",
                label,
                decoded.elapsed_ms(),
                path.display()
            );
            println!("  Codes:      {}", codes.len());
            println!("  Characters: {}", decoded.text.chars().count());
            if verified {
                println!("  Verified:   identical to reference");
            }
        }
        None => write_stdout_as(&decoded.text, options.encoding)?,
    }

    Ok(())
}
