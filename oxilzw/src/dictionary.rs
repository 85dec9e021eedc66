//! LZW dictionaries (code tables) for both directions.
//!
//! Encoding looks strings up by content, decoding looks them up by code, so
//! each direction gets its own strongly-typed table. Both are seeded with one
//! entry per code point below `initial_dict_size` and assign learned codes
//! densely from there in insertion order.

use crate::Code;
use crate::config::LzwConfig;
use std::collections::HashMap;

/// Transition tag of the encode-side reset machine.
///
/// `JustReset` is only ever observed for the emission that crossed the
/// threshold; the table is back to growing from the very next insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableState {
    /// Learned entries are kept.
    Growing,
    /// The table was discarded and reseeded.
    JustReset,
}

/// Seed symbol for a code. Surrogate code points have none.
fn seed_symbol(code: Code) -> Option<char> {
    char::from_u32(code)
}

/// Encode-direction table: string -> code.
#[derive(Debug)]
pub struct EncodeTable {
    entries: HashMap<String, Code>,
    initial_dict_size: Code,
    max_table_size: Code,
    reset_threshold: Option<Code>,
    next_code: Code,
}

impl EncodeTable {
    /// Create a seeded table. The configuration is expected to be validated.
    pub fn new(config: &LzwConfig) -> Self {
        let mut table = Self {
            entries: HashMap::with_capacity(config.initial_dict_size as usize),
            initial_dict_size: config.initial_dict_size,
            max_table_size: config.max_table_size,
            reset_threshold: config.active_reset_threshold(),
            next_code: config.initial_dict_size,
        };
        table.reseed();
        table
    }

    /// Drop every learned entry and restore the single-character seed.
    pub fn reseed(&mut self) {
        self.entries.clear();
        self.entries.extend(
            (0..self.initial_dict_size)
                .filter_map(|code| seed_symbol(code).map(|symbol| (symbol.to_string(), code))),
        );
        self.next_code = self.initial_dict_size;
    }

    /// Whether a single character is part of the seed.
    pub fn is_seeded(&self, symbol: char) -> bool {
        (symbol as Code) < self.initial_dict_size
    }

    /// Find the code for a string.
    pub fn code_of(&self, string: &str) -> Option<Code> {
        self.entries.get(string).copied()
    }

    /// Check whether a string has a code.
    pub fn contains(&self, string: &str) -> bool {
        self.entries.contains_key(string)
    }

    /// Assign the next code to `string`.
    ///
    /// Returns `None` once the code counter has reached `max_table_size`;
    /// the table then stays frozen until reseeded.
    pub fn learn(&mut self, string: String) -> Option<Code> {
        if self.is_full() {
            return None;
        }
        let code = self.next_code;
        self.entries.insert(string, code);
        self.next_code += 1;
        Some(code)
    }

    /// Reseed if the code counter has reached the reset threshold.
    pub fn check_reset(&mut self) -> TableState {
        match self.reset_threshold {
            Some(threshold) if self.next_code >= threshold => {
                self.reseed();
                TableState::JustReset
            }
            _ => TableState::Growing,
        }
    }

    /// Whether no further entries can be learned.
    pub fn is_full(&self) -> bool {
        self.next_code >= self.max_table_size
    }

    /// Number of entries, seed included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of multi-character entries learned since the last reseed.
    pub fn learned(&self) -> Code {
        self.next_code - self.initial_dict_size
    }

    /// Next code that will be assigned.
    pub fn next_code(&self) -> Code {
        self.next_code
    }
}

/// Decode-direction table: code -> string.
///
/// Codes index straight into the table. Seed codes without a character
/// (surrogates) hold an empty placeholder so numbering stays dense.
#[derive(Debug)]
pub struct DecodeTable {
    entries: Vec<String>,
    limit: Option<Code>,
}

impl DecodeTable {
    /// Create a seeded, uncapped table.
    pub fn new(initial_dict_size: Code) -> Self {
        let entries = (0..initial_dict_size)
            .map(|code| seed_symbol(code).map(String::from).unwrap_or_default())
            .collect();
        Self {
            entries,
            limit: None,
        }
    }

    /// Stop learning once the table reaches `limit` codes.
    pub fn with_limit(mut self, limit: Option<Code>) -> Self {
        self.limit = limit;
        self
    }

    /// Get the string for a code, if it is assigned and not a placeholder.
    pub fn get(&self, code: Code) -> Option<&str> {
        self.entries
            .get(code as usize)
            .filter(|entry| !entry.is_empty())
            .map(String::as_str)
    }

    /// Append an entry at the next code.
    pub fn learn(&mut self, string: String) -> Option<Code> {
        if self.is_full() {
            return None;
        }
        let code = self.next_code();
        self.entries.push(string);
        Some(code)
    }

    /// Whether the growth limit has been reached.
    pub fn is_full(&self) -> bool {
        self.limit.is_some_and(|limit| self.next_code() >= limit)
    }

    /// Next code that will be assigned.
    pub fn next_code(&self) -> Code {
        self.entries.len() as Code
    }

    /// Configured growth limit.
    pub fn limit(&self) -> Option<Code> {
        self.limit
    }

    /// Number of codes, seed and placeholders included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no codes at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
