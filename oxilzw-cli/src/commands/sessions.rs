//! Session store commands.

use crate::codes::{format_codes, serialized_len};
use crate::error::Result;
use crate::session::SessionStore;
use crate::utils::compression_ratio;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SessionSummary<'a> {
    id: &'a str,
    initial_dict_size: u32,
    max_table_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    reset_threshold: Option<u32>,
    codes: usize,
    original_chars: usize,
    ratio: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    created: u64,
}

pub fn cmd_sessions_list(store: &SessionStore, json: bool) -> Result<()> {
    let records = store.list()?;

    if json {
        let summaries: Vec<_> = records
            .iter()
            .map(|record| SessionSummary {
                id: &record.id,
                initial_dict_size: record.config.initial_dict_size,
                max_table_size: record.config.max_table_size,
                reset_threshold: record.config.active_reset_threshold(),
                codes: record.codes.len(),
                original_chars: record.original_chars,
                ratio: compression_ratio(record.original_chars, serialized_len(&record.codes)),
                source: record.source.as_deref(),
                created: record.created,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No sessions in {}", store.root().display());
        return Ok(());
    }

    println!(
        "{:<24} {:>8} {:>8} {:>8} {:>10} {:>10}  Source",
        "Id", "Initial", "Max", "Reset", "Chars", "Codes"
    );
    println!("{}", "-".repeat(80));
    for record in &records {
        let reset = record
            .config
            .active_reset_threshold()
            .map_or_else(|| "-".to_string(), |t| t.to_string());
        println!(
            "{:<24} {:>8} {:>8} {:>8} {:>10} {:>10}  {}",
            record.id,
            record.config.initial_dict_size,
            record.config.max_table_size,
            reset,
            record.original_chars,
            record.codes.len(),
            record.source.as_deref().unwrap_or("-")
        );
    }
    println!("{}", "-".repeat(80));
    println!("{} session(s)", records.len());

    Ok(())
}

pub fn cmd_sessions_show(store: &SessionStore, id: &str, json: bool) -> Result<()> {
    let record = store.load(id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!("Session {}", record.id);
    println!("  Initial dictionary size: {}", record.config.initial_dict_size);
    println!("  Max table size:          {}", record.config.max_table_size);
    match record.config.active_reset_threshold() {
        Some(threshold) => println!("  Reset threshold:         {}", threshold),
        None => println!("  Reset threshold:         disabled"),
    }
    if let Some(source) = &record.source {
        println!("  Source:                  {}", source);
    }
    println!("  Original size:           {} characters", record.original_chars);
    println!("  Codes:                   {}", record.codes.len());
    println!("{}", format_codes(&record.codes));

    Ok(())
}

pub fn cmd_sessions_remove(store: &SessionStore, id: &str) -> Result<()> {
    store.remove(id)?;
    println!("Removed session {}", id);
    Ok(())
}
