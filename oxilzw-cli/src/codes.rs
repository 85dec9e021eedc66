//! Text form of a code stream.
//!
//! Codes are written as space-separated decimal integers. Parsing also
//! accepts newlines, commas and a surrounding `[...]`, so a list printed by
//! other tools can be pasted back in.

use crate::error::{CliError, Result};
use oxilzw::Code;

/// Format codes as space-separated decimals.
pub fn format_codes(codes: &[Code]) -> String {
    codes
        .iter()
        .map(Code::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a code stream. Blank input yields no codes.
pub fn parse_codes(text: &str) -> Result<Vec<Code>> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(trimmed);

    body.split(|c: char| c.is_ascii_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| {
            token
                .parse::<Code>()
                .map_err(|_| CliError::invalid_code(token, index))
        })
        .collect()
}

/// Length of the serialized stream, used as the compressed size.
pub fn serialized_len(codes: &[Code]) -> usize {
    let digits: usize = codes.iter().map(|&code| decimal_digits(code)).sum();
    digits + codes.len().saturating_sub(1)
}

fn decimal_digits(code: Code) -> usize {
    code.checked_ilog10().map_or(1, |log| log as usize + 1)
}
