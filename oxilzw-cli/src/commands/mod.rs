//! Command implementations for the OxiLZW CLI.

pub mod compress;
pub mod decompress;
pub mod roundtrip;
pub mod sessions;
pub mod sweep;

pub use compress::{CompressOptions, cmd_compress};
pub use decompress::{CodeSource, DecompressOptions, cmd_decompress};
pub use roundtrip::cmd_roundtrip;
pub use sessions::{cmd_sessions_list, cmd_sessions_remove, cmd_sessions_show};
pub use sweep::{SweepOptions, cmd_sweep};

use clap::{Args, ValueEnum};
use log::warn;
use oxilzw::LzwConfig;

/// Named parameter preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// 256 seed, 4096 cap, no reset (default)
    Standard,
    /// 128 seed (ASCII), 2048 cap, no reset
    Compact,
    /// 256 seed, 4096 cap, reset at 512
    ByteReset,
    /// 512 seed, 8192 cap, reset at 1024
    Wide,
}

impl Preset {
    pub fn config(self) -> LzwConfig {
        match self {
            Preset::Standard => LzwConfig::STANDARD,
            Preset::Compact => LzwConfig::COMPACT,
            Preset::ByteReset => LzwConfig::BYTE_RESET,
            Preset::Wide => LzwConfig::WIDE,
        }
    }
}

/// Encoder parameters shared by the compressing commands.
#[derive(Debug, Clone, Args)]
pub struct ParamArgs {
    /// Named parameter preset (overrides --initial, --max and --reset)
    #[arg(short, long, value_enum)]
    pub preset: Option<Preset>,

    /// Number of single code points seeded into the table
    #[arg(long = "initial", default_value_t = 256)]
    pub initial_dict_size: u32,

    /// Maximum table size; no entries are learned past it
    #[arg(long = "max", default_value_t = 4096)]
    pub max_table_size: u32,

    /// Reset the table when the next code reaches this value (0 disables)
    #[arg(long = "reset")]
    pub reset_threshold: Option<u32>,
}

impl ParamArgs {
    /// Resolve the arguments into an encoder configuration.
    pub fn config(&self) -> LzwConfig {
        match self.preset {
            Some(preset) => preset.config(),
            None => LzwConfig::new(self.initial_dict_size, self.max_table_size)
                .with_reset_threshold(self.reset_threshold),
        }
    }
}

/// Warn about reset settings that will surprise the user.
fn warn_reset_policy(config: &LzwConfig) {
    if let Some(threshold) = config.active_reset_threshold() {
        if config.reset_reachable() {
            warn!(
                "reset threshold {} is enabled: the output cannot be decompressed",
                threshold
            );
        } else {
            warn!(
                "reset threshold {} exceeds max table size {} and will never fire",
                threshold, config.max_table_size
            );
        }
    }
}
