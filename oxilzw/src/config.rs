//! LZW configuration: alphabet size, table cap and reset policy.

use crate::Code;
use crate::error::{LzwError, Result};

/// Number of Unicode code points (`char::MAX as u32 + 1`).
pub const CODE_POINT_LIMIT: Code = 0x11_0000;

/// LZW configuration parameters.
///
/// The same `initial_dict_size` must be used for encoding and decoding a
/// stream. Nothing about the configuration is embedded in the output codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LzwConfig {
    /// Number of single-code-point entries seeded before compression starts.
    pub initial_dict_size: Code,
    /// Upper bound on the code counter; no entries are learned past it.
    pub max_table_size: Code,
    /// Code count at which the encode table is discarded and reseeded.
    /// `None` disables resetting.
    pub reset_threshold: Option<Code>,
}

impl Default for LzwConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl LzwConfig {
    /// Byte-seeded table with a 4096 entry cap and no reset.
    pub const STANDARD: Self = Self {
        initial_dict_size: 256,
        max_table_size: 4096,
        reset_threshold: None,
    };

    /// ASCII-only seed with a 2048 entry cap.
    pub const COMPACT: Self = Self {
        initial_dict_size: 128,
        max_table_size: 2048,
        reset_threshold: None,
    };

    /// Byte seed that discards the table every 512 codes.
    pub const BYTE_RESET: Self = Self {
        initial_dict_size: 256,
        max_table_size: 4096,
        reset_threshold: Some(512),
    };

    /// Latin seed with an 8192 entry cap, reset at 1024.
    pub const WIDE: Self = Self {
        initial_dict_size: 512,
        max_table_size: 8192,
        reset_threshold: Some(1024),
    };

    /// Named parameter combinations used for comparison runs.
    pub const PRESETS: [(&'static str, Self); 3] = [
        ("compact", Self::COMPACT),
        ("byte-reset", Self::BYTE_RESET),
        ("wide", Self::WIDE),
    ];

    /// Create a configuration without a reset threshold.
    pub fn new(initial_dict_size: Code, max_table_size: Code) -> Self {
        Self {
            initial_dict_size,
            max_table_size,
            reset_threshold: None,
        }
    }

    /// Set the reset threshold. `Some(0)` is treated as disabled.
    pub fn with_reset_threshold(mut self, threshold: Option<Code>) -> Self {
        self.reset_threshold = threshold.filter(|&t| t != 0);
        self
    }

    /// Look up a named preset.
    pub fn preset(name: &str) -> Option<Self> {
        Self::PRESETS
            .iter()
            .find(|(preset, _)| preset.eq_ignore_ascii_case(name))
            .map(|&(_, config)| config)
    }

    /// Check the parameter constraints.
    pub fn validate(&self) -> Result<()> {
        if self.initial_dict_size < 1 {
            return Err(LzwError::invalid_parameter(
                "initial_dict_size must be at least 1",
            ));
        }
        if self.initial_dict_size > CODE_POINT_LIMIT {
            return Err(LzwError::invalid_parameter(format!(
                "initial_dict_size {} exceeds the Unicode code point range ({CODE_POINT_LIMIT})",
                self.initial_dict_size
            )));
        }
        if self.max_table_size < self.initial_dict_size {
            return Err(LzwError::invalid_parameter(format!(
                "max_table_size {} < initial_dict_size {}",
                self.max_table_size, self.initial_dict_size
            )));
        }
        if let Some(threshold) = self.active_reset_threshold()
            && threshold <= self.initial_dict_size
        {
            return Err(LzwError::invalid_parameter(format!(
                "reset_threshold {threshold} must be greater than initial_dict_size {}",
                self.initial_dict_size
            )));
        }
        Ok(())
    }

    /// Reset threshold with `Some(0)` folded into `None`.
    pub fn active_reset_threshold(&self) -> Option<Code> {
        self.reset_threshold.filter(|&t| t != 0)
    }

    /// Whether the encode table will ever be reseeded mid-stream.
    pub fn reset_enabled(&self) -> bool {
        self.active_reset_threshold().is_some()
    }

    /// Whether a configured threshold can actually be reached.
    ///
    /// The code counter stops at `max_table_size`, so a larger threshold
    /// never fires.
    pub fn reset_reachable(&self) -> bool {
        self.active_reset_threshold()
            .is_some_and(|t| t <= self.max_table_size)
    }

    /// First code assigned to a learned entry.
    pub fn first_code(&self) -> Code {
        self.initial_dict_size
    }

    /// Maximum number of multi-character entries one table generation holds.
    pub fn max_learned_entries(&self) -> Code {
        self.max_table_size.saturating_sub(self.initial_dict_size)
    }
}
