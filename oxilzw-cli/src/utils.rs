//! Utility functions for the CLI.

use crate::error::{CliError, Result};
use encoding_rs::Encoding;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::borrow::Cow;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Create a progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("progress bar template is valid")
            .progress_chars("█▓▒░ "),
    );
    pb
}

/// Read a UTF-8 text file.
pub fn read_text(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)?;
    debug!("read {} characters from {}", text.chars().count(), path.display());
    Ok(text)
}

/// Look up a character encoding by its WHATWG label (`shift_jis`,
/// `windows-1252`, ...). `None` means UTF-8.
pub fn resolve_encoding(label: Option<&str>) -> Result<Option<&'static Encoding>> {
    label
        .map(|label| {
            Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| CliError::UnknownEncoding {
                label: label.to_string(),
            })
        })
        .transpose()
}

/// Read a text file, decoding it from `encoding` when one is given.
pub fn read_text_as(path: &Path, encoding: Option<&'static Encoding>) -> Result<String> {
    let Some(encoding) = encoding else {
        return read_text(path);
    };
    let bytes = fs::read(path)?;
    let (text, _, had_errors) = encoding.decode(&bytes);
    if had_errors {
        return Err(CliError::malformed_text(path, encoding.name()));
    }
    debug!(
        "read {} characters from {} ({})",
        text.chars().count(),
        path.display(),
        encoding.name()
    );
    Ok(text.into_owned())
}

/// Encode text into `encoding`, or UTF-8 when none is given. `target` names
/// the destination in the error for unrepresentable characters.
pub fn encode_text<'a>(
    text: &'a str,
    encoding: Option<&'static Encoding>,
    target: &Path,
) -> Result<Cow<'a, [u8]>> {
    let Some(encoding) = encoding else {
        return Ok(Cow::Borrowed(text.as_bytes()));
    };
    let (bytes, _, unmappable) = encoding.encode(text);
    if unmappable {
        return Err(CliError::malformed_text(target, encoding.name()));
    }
    Ok(bytes)
}

/// Write text to `path`, encoding it into `encoding` when one is given.
pub fn write_text_as(path: &Path, text: &str, encoding: Option<&'static Encoding>) -> Result<()> {
    write_output(path, encode_text(text, encoding, path)?)
}

/// Write text to stdout exactly as encoded, with no trailing newline.
pub fn write_stdout_as(text: &str, encoding: Option<&'static Encoding>) -> Result<()> {
    let bytes = encode_text(text, encoding, Path::new("<stdout>"))?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(&bytes)?;
    stdout.flush()?;
    Ok(())
}

/// Write `contents` to `path`, creating parent directories as needed.
pub fn write_output(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    let contents = contents.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Original size over compressed size, both in characters. Zero when the
/// compressed form is empty.
pub fn compression_ratio(original_chars: usize, compressed_chars: usize) -> f64 {
    if compressed_chars > 0 {
        original_chars as f64 / compressed_chars as f64
    } else {
        0.0
    }
}

/// Character index of the first difference between two texts, if any.
pub fn first_difference(left: &str, right: &str) -> Option<usize> {
    let mut left_chars = left.chars();
    let mut right_chars = right.chars();
    let mut index = 0;
    loop {
        match (left_chars.next(), right_chars.next()) {
            (None, None) => return None,
            (l, r) if l != r => return Some(index),
            _ => index += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compression_ratio() {
        assert_eq!(compression_ratio(100, 50), 2.0);
        assert_eq!(compression_ratio(10, 0), 0.0);
    }

    #[test]
    fn test_first_difference() {
        assert_eq!(first_difference("abc", "abc"), None);
        assert_eq!(first_difference("abc", "abd"), Some(2));
        assert_eq!(first_difference("abc", "ab"), Some(2));
        assert_eq!(first_difference("", "x"), Some(0));
        assert_eq!(first_difference("\u{e9}t\u{e9}", "\u{e9}t\u{e8}"), Some(2));
    }

    #[test]
    fn test_write_output_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.txt");
        write_output(&path, "65 66").unwrap();
        assert_eq!(read_text(&path).unwrap(), "65 66");
    }

    #[test]
    fn test_resolve_encoding() {
        assert!(resolve_encoding(None).unwrap().is_none());
        assert_eq!(
            resolve_encoding(Some("latin1")).unwrap(),
            Some(encoding_rs::WINDOWS_1252)
        );
        assert!(matches!(
            resolve_encoding(Some("klingon")),
            Err(CliError::UnknownEncoding { .. })
        ));
    }

    #[test]
    fn test_legacy_encoding_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sjis.txt");
        let encoding = resolve_encoding(Some("shift_jis")).unwrap();

        write_text_as(&path, "\u{3053}\u{3093}\u{306b}\u{3061}\u{306f}", encoding).unwrap();
        assert!(fs::read_to_string(&path).is_err());
        assert_eq!(
            read_text_as(&path, encoding).unwrap(),
            "\u{3053}\u{3093}\u{306b}\u{3061}\u{306f}"
        );
    }

    #[test]
    fn test_encode_text() {
        let target = Path::new("out.txt");
        assert_eq!(&*encode_text("\u{e9}", None, target).unwrap(), [0xc3, 0xa9]);

        let latin1 = resolve_encoding(Some("windows-1252")).unwrap();
        assert_eq!(&*encode_text("\u{e9}", latin1, target).unwrap(), [0xe9]);
        assert!(matches!(
            encode_text("\u{3042}", latin1, target),
            Err(CliError::MalformedText { .. })
        ));
    }

    #[test]
    fn test_unmappable_text_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        let encoding = resolve_encoding(Some("windows-1252")).unwrap();
        assert!(matches!(
            write_text_as(&path, "\u{3042}", encoding),
            Err(CliError::MalformedText { .. })
        ));
    }
}
