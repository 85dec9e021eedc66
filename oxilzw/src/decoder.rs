//! LZW decoder (decompression).
//!
//! The decoder rebuilds the encoder's table one entry per code, always one
//! step behind it. The only code it may see before learning it is the very
//! next one, which resolves to `previous + first(previous)`. Anything else
//! that cannot be resolved means the stream came from a different table and
//! is reported instead of being decoded into garbage.

use crate::Code;
use crate::config::LzwConfig;
use crate::dictionary::DecodeTable;
use crate::error::{LzwError, Result};
use crate::timing::{Stopwatch, millis};
use std::time::Duration;

/// Result of a decode pass.
#[derive(Debug, Clone)]
pub struct Decoded {
    /// Reconstructed text.
    pub text: String,
    /// Time spent in the decode loop.
    pub elapsed: Duration,
}

impl Decoded {
    /// Elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        millis(self.elapsed)
    }
}

/// LZW decoder for decompression.
#[derive(Debug, Clone)]
pub struct LzwDecoder {
    initial_dict_size: Code,
    limit: Option<Code>,
}

impl LzwDecoder {
    /// Create an uncapped decoder for streams seeded with `initial_dict_size`
    /// code points.
    pub fn new(initial_dict_size: Code) -> Result<Self> {
        LzwConfig::new(initial_dict_size, initial_dict_size).validate()?;
        Ok(Self {
            initial_dict_size,
            limit: None,
        })
    }

    /// Create a decoder matching an encoder configuration.
    ///
    /// Table growth is capped at `max_table_size`, so codes the encoder could
    /// never have emitted are rejected. A configuration whose reset threshold
    /// can fire is refused: the decoder does not follow table resets.
    pub fn from_config(config: &LzwConfig) -> Result<Self> {
        config.validate()?;
        if let Some(threshold) = config.active_reset_threshold()
            && config.reset_reachable()
        {
            return Err(LzwError::desync(
                0,
                format!(
                    "stream was encoded with reset threshold {threshold}; table resets cannot be followed"
                ),
            ));
        }
        Ok(Self {
            initial_dict_size: config.initial_dict_size,
            limit: Some(config.max_table_size),
        })
    }

    /// Seed size this decoder expects.
    pub fn initial_dict_size(&self) -> Code {
        self.initial_dict_size
    }

    /// Decode a code sequence back into text.
    ///
    /// # Errors
    ///
    /// - [`LzwError::EmptyCodeSequence`] if `codes` is empty
    /// - [`LzwError::DesynchronizedTable`] if a code is neither in the table
    ///   nor the next code to be assigned, or names an unassigned seed code
    ///   point
    pub fn decode(&self, codes: &[Code]) -> Result<Decoded> {
        let watch = Stopwatch::start();
        let (&first, rest) = codes.split_first().ok_or(LzwError::EmptyCodeSequence)?;
        let mut table = DecodeTable::new(self.initial_dict_size).with_limit(self.limit);

        let mut previous = table
            .get(first)
            .ok_or_else(|| Self::unresolved(&table, first, 0))?
            .to_string();
        let mut text = previous.clone();

        for (offset, &code) in rest.iter().enumerate() {
            let position = offset + 1;
            let current = match table.get(code) {
                Some(entry) => entry.to_string(),
                None if code == table.next_code() && !table.is_full() => {
                    with_first_of(previous.clone(), &previous)
                }
                None => return Err(Self::unresolved(&table, code, position)),
            };

            text.push_str(&current);
            table.learn(with_first_of(previous, &current));
            previous = current;
        }

        Ok(Decoded {
            text,
            elapsed: watch.elapsed(),
        })
    }

    fn unresolved(table: &DecodeTable, code: Code, position: usize) -> LzwError {
        match table.limit() {
            _ if code < table.next_code() => LzwError::desync(
                position,
                format!("code {code} is a seed code point with no character"),
            ),
            Some(limit) if code >= limit => LzwError::desync(
                position,
                format!("code {code} is beyond the table limit of {limit}"),
            ),
            _ => LzwError::unresolved_code(position, code, table.next_code()),
        }
    }
}

/// Append the first character of `source` to `base`.
fn with_first_of(mut base: String, source: &str) -> String {
    base.extend(source.chars().next());
    base
}
