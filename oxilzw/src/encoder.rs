//! LZW encoder (compression).

use crate::Code;
use crate::config::LzwConfig;
use crate::dictionary::{EncodeTable, TableState};
use crate::error::{LzwError, Result};
use crate::timing::{Stopwatch, millis};
use std::time::Duration;

/// Counters collected during one encode pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodeStats {
    /// Input characters consumed.
    pub symbols: usize,
    /// Multi-character entries learned over the whole pass.
    pub learned_entries: usize,
    /// Most multi-character entries held by a single table generation.
    pub peak_learned: Code,
    /// Number of codes emitted at the moment of each table reset.
    pub resets: Vec<usize>,
}

/// Result of an encode pass.
#[derive(Debug, Clone)]
pub struct Encoded {
    /// Emitted codes, in order.
    pub codes: Vec<Code>,
    /// Table statistics.
    pub stats: EncodeStats,
    /// Time spent in the encode loop.
    pub elapsed: Duration,
}

impl Encoded {
    /// Elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        millis(self.elapsed)
    }

    /// Input characters per emitted code.
    pub fn symbols_per_code(&self) -> f64 {
        if self.codes.is_empty() {
            0.0
        } else {
            self.stats.symbols as f64 / self.codes.len() as f64
        }
    }
}

/// LZW encoder for compression.
///
/// The encoder only holds its configuration; every call to
/// [`LzwEncoder::encode`] builds and drops its own table.
#[derive(Debug, Clone)]
pub struct LzwEncoder {
    config: LzwConfig,
}

impl LzwEncoder {
    /// Create a new LZW encoder with the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &LzwConfig {
        &self.config
    }

    /// Encode text with greedy longest-match LZW.
    ///
    /// # Algorithm
    ///
    /// 1. Seed the table with code points `0..initial_dict_size`
    /// 2. Extend the current match while `match + c` is in the table
    /// 3. Otherwise emit the code of the match, learn `match + c` if the
    ///    table has room, reseed if the reset threshold was reached, and
    ///    restart the match at `c`
    /// 4. Emit the code of the final match
    ///
    /// # Errors
    ///
    /// [`LzwError::UnknownSymbol`] for the first character whose code point
    /// is not below `initial_dict_size`.
    pub fn encode(&self, input: &str) -> Result<Encoded> {
        let watch = Stopwatch::start();
        let mut table = EncodeTable::new(&self.config);
        let mut codes = Vec::new();
        let mut stats = EncodeStats::default();
        let mut current = String::new();

        for (position, symbol) in input.chars().enumerate() {
            if !table.is_seeded(symbol) {
                return Err(LzwError::unknown_symbol(symbol, position));
            }
            stats.symbols += 1;

            current.push(symbol);
            if table.contains(&current) {
                continue;
            }

            // `current` is now the candidate: the longest match plus `symbol`.
            let candidate = std::mem::take(&mut current);
            let matched = &candidate[..candidate.len() - symbol.len_utf8()];
            let code = table
                .code_of(matched)
                .ok_or_else(|| LzwError::unknown_symbol(symbol, position))?;
            codes.push(code);

            if table.learn(candidate).is_some() {
                stats.learned_entries += 1;
                stats.peak_learned = stats.peak_learned.max(table.learned());
            }
            if table.check_reset() == TableState::JustReset {
                stats.resets.push(codes.len());
            }

            current.push(symbol);
        }

        if let Some(last) = current.chars().last() {
            let code = table
                .code_of(&current)
                .ok_or_else(|| LzwError::unknown_symbol(last, stats.symbols - 1))?;
            codes.push(code);
        }

        Ok(Encoded {
            codes,
            stats,
            elapsed: watch.elapsed(),
        })
    }
}
