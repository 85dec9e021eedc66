//! Compress command implementation.

use super::warn_reset_policy;
use crate::codes::{format_codes, serialized_len};
use crate::error::Result;
use crate::session::{SessionRecord, SessionStore};
use crate::utils::{compression_ratio, read_text_as, write_output};
use encoding_rs::Encoding;
use log::info;
use oxilzw::{LzwConfig, LzwEncoder};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Options for compressing a text file.
pub struct CompressOptions<'a> {
    pub output: Option<&'a Path>,
    pub session: Option<&'a str>,
    /// Input encoding; `None` reads UTF-8.
    pub encoding: Option<&'static Encoding>,
    pub json: bool,
}

/// JSON output for a compress run.
#[derive(Debug, Serialize)]
struct CompressReport {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    session: Option<String>,
    config: LzwConfig,
    original_chars: usize,
    codes: usize,
    compressed_size: usize,
    ratio: f64,
    learned_entries: usize,
    resets: usize,
    elapsed_ms: f64,
}

pub fn cmd_compress(
    input: &Path,
    config: &LzwConfig,
    store: &SessionStore,
    options: &CompressOptions,
) -> Result<()> {
    let encoder = LzwEncoder::new(*config)?;
    if let Some(id) = options.session {
        SessionStore::validate_id(id)?;
    }
    warn_reset_policy(config);

    let text = read_text_as(input, options.encoding)?;
    let original_chars = text.chars().count();
    let encoded = encoder.encode(&text)?;
    info!(
        "encoded {} characters into {} codes ({} entries learned, {} resets)",
        original_chars,
        encoded.codes.len(),
        encoded.stats.learned_entries,
        encoded.stats.resets.len()
    );

    let output = match (options.output, options.session) {
        (Some(path), _) => Some(path.to_path_buf()),
        (None, None) => Some(default_output(input)),
        (None, Some(_)) => None,
    };
    if let Some(path) = &output {
        write_output(path, &format_codes(&encoded.codes))?;
    }

    let compressed_size = serialized_len(&encoded.codes);
    let report = CompressReport {
        input: input.display().to_string(),
        output: output.as_ref().map(|p| p.display().to_string()),
        session: options.session.map(str::to_string),
        config: *config,
        original_chars,
        codes: encoded.codes.len(),
        compressed_size,
        ratio: compression_ratio(original_chars, compressed_size),
        learned_entries: encoded.stats.learned_entries,
        resets: encoded.stats.resets.len(),
        elapsed_ms: encoded.elapsed_ms(),
    };

    if let Some(id) = options.session {
        let record = SessionRecord::new(id, *config, encoded.codes, original_chars)
            .with_source(input.display().to_string());
        store.save(&record)?;
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Compressed {} in {:.2} ms", report.input, report.elapsed_ms);
    println!("  Original size:     {} characters", report.original_chars);
    println!(
        "  Compressed size:   {} characters ({} codes)",
        report.compressed_size, report.codes
    );
    println!("  Compression ratio: {:.2}", report.ratio);
    if report.resets > 0 {
        println!("  Table resets:      {}", report.resets);
    }
    if let Some(path) = &report.output {
        println!("  Output:            {}", path);
    }
    if let Some(id) = &report.session {
        println!("  Session:           {} ({})", id, store.root().display());
    }

    Ok(())
}

/// `<input>.lzw` next to the input file.
fn default_output(input: &Path) -> PathBuf {
    let mut name = input.file_name().unwrap_or_default().to_os_string();
    name.push(".lzw");
    input.with_file_name(name)
}
