//! LZW-specific error types.

use crate::Code;
use thiserror::Error;

/// LZW compression/decompression errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LzwError {
    /// Configuration rejected before any table was built.
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Which constraint was violated.
        message: String,
    },

    /// Input character outside the seeded alphabet.
    #[error("Unknown symbol {symbol:?} at position {position}: not in the seeded alphabet")]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// Character index in the input.
        position: usize,
    },

    /// Decode called with no codes.
    #[error("Empty code sequence: nothing to decode")]
    EmptyCodeSequence,

    /// Decoder table no longer matches the one that produced the stream.
    #[error("Desynchronized table at code index {position}: {message}")]
    DesynchronizedTable {
        /// Index into the code sequence.
        position: usize,
        /// Description of the mismatch.
        message: String,
    },
}

/// Result type for LZW operations.
pub type Result<T> = std::result::Result<T, LzwError>;

impl LzwError {
    /// Create an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create an unknown symbol error.
    pub fn unknown_symbol(symbol: char, position: usize) -> Self {
        Self::UnknownSymbol { symbol, position }
    }

    /// Create a desynchronized table error.
    pub fn desync(position: usize, message: impl Into<String>) -> Self {
        Self::DesynchronizedTable {
            position,
            message: message.into(),
        }
    }

    /// Create the error reported for a code beyond the decoder's next code.
    pub fn unresolved_code(position: usize, code: Code, next_code: Code) -> Self {
        Self::desync(
            position,
            format!("code {code} cannot be resolved (next assignable code is {next_code})"),
        )
    }
}
