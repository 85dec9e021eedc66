//! Sweep command: compress one file under every named preset.

use crate::codes::{format_codes, serialized_len};
use crate::error::Result;
use crate::utils::{compression_ratio, create_progress_bar, read_text_as, write_output};
use encoding_rs::Encoding;
use indicatif::ProgressBar;
use log::{debug, warn};
use oxilzw::{LzwConfig, LzwEncoder};
use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;

/// Options for a preset sweep.
pub struct SweepOptions<'a> {
    /// Write each preset's codes into this directory.
    pub write_dir: Option<&'a Path>,
    /// Input encoding; `None` reads UTF-8.
    pub encoding: Option<&'static Encoding>,
    pub json: bool,
    pub progress: bool,
}

#[derive(Debug, Serialize)]
struct SweepRow {
    preset: &'static str,
    config: LzwConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    codes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    compressed_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resets: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    elapsed_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Presets in sweep order, the default configuration first.
fn sweep_presets() -> Vec<(&'static str, LzwConfig)> {
    std::iter::once(("standard", LzwConfig::STANDARD))
        .chain(LzwConfig::PRESETS)
        .collect()
}

/// File name for one preset's codes.
fn output_name(preset: &str, config: &LzwConfig) -> String {
    format!(
        "compressed_{}_{}_{}.txt",
        preset, config.initial_dict_size, config.max_table_size
    )
}

/// Compress `text` under one preset. Encoder errors become a failed row;
/// only I/O errors abort the sweep.
fn run_preset(
    preset: &'static str,
    config: LzwConfig,
    text: &str,
    original_chars: usize,
    write_dir: Option<&Path>,
    pb: &ProgressBar,
) -> Result<SweepRow> {
    let encoded = match LzwEncoder::new(config).and_then(|encoder| encoder.encode(text)) {
        Ok(encoded) => encoded,
        Err(e) => {
            warn!("{}: {}", preset, e);
            return Ok(SweepRow {
                preset,
                config,
                codes: None,
                compressed_size: None,
                ratio: None,
                resets: None,
                elapsed_ms: None,
                error: Some(e.to_string()),
            });
        }
    };

    if let Some(dir) = write_dir {
        let path = dir.join(output_name(preset, &config));
        write_output(&path, format_codes(&encoded.codes))?;
        pb.println(format!("  Wrote: {}", path.display()));
    }
    debug!("{}: {} codes", preset, encoded.codes.len());

    let compressed_size = serialized_len(&encoded.codes);
    Ok(SweepRow {
        preset,
        config,
        codes: Some(encoded.codes.len()),
        compressed_size: Some(compressed_size),
        ratio: Some(compression_ratio(original_chars, compressed_size)),
        resets: Some(encoded.stats.resets.len()),
        elapsed_ms: Some(encoded.elapsed_ms()),
        error: None,
    })
}

pub fn cmd_sweep(input: &Path, options: &SweepOptions) -> Result<()> {
    let text = read_text_as(input, options.encoding)?;
    let original_chars = text.chars().count();

    let presets = sweep_presets();
    let pb = create_progress_bar(presets.len() as u64, options.progress && !options.json);
    pb.set_message("presets");

    // Presets are independent; rows come back in sweep order.
    let rows = presets
        .par_iter()
        .map(|&(preset, config)| {
            let row = run_preset(preset, config, &text, original_chars, options.write_dir, &pb);
            pb.inc(1);
            row
        })
        .collect::<Result<Vec<_>>>()?;
    pb.finish_with_message("Done");

    if options.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("Sweep of {} ({} characters)", input.display(), original_chars);
    println!(
        "{:<12} {:>8} {:>8} {:>8} {:>10} {:>8} {:>10}",
        "Preset", "Initial", "Max", "Reset", "Size", "Ratio", "Time (ms)"
    );
    println!("{}", "-".repeat(72));
    for row in &rows {
        let reset = row
            .config
            .active_reset_threshold()
            .map_or_else(|| "-".to_string(), |t| t.to_string());
        match (&row.error, row.compressed_size, row.ratio, row.elapsed_ms) {
            (None, Some(size), Some(ratio), Some(ms)) => println!(
                "{:<12} {:>8} {:>8} {:>8} {:>10} {:>8.2} {:>10.2}",
                row.preset,
                row.config.initial_dict_size,
                row.config.max_table_size,
                reset,
                size,
                ratio,
                ms
            ),
            (error, ..) => println!(
                "{:<12} {:>8} {:>8} {:>8}  failed: {}",
                row.preset,
                row.config.initial_dict_size,
                row.config.max_table_size,
                reset,
                error.as_deref().unwrap_or("unknown error")
            ),
        }
    }

    Ok(())
}
