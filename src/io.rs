//! Reading and writing schematic text.
//!
//! Schematics are stored either as UTF-16LE (with or without a byte order
//! mark) or as an 8-bit encoding; symbol files are usually ASCII. The
//! decoder sniffs the encoding instead of trusting a declared one.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{AscError, Result};

/// Decode raw file bytes into lines without terminators.
///
/// Tries UTF-16LE when the data looks like it (a byte order mark, or a NUL
/// second byte). If that fails or yields at most one line, falls back to
/// UTF-8 and finally ISO-8859-1, which accepts any byte sequence.
pub fn decode_text(bytes: &[u8], origin: &str) -> Result<Vec<String>> {
    if looks_like_utf16le(bytes) {
        if let Some(text) = decode_utf16le(bytes) {
            let lines = split_lines(&text);
            if lines.len() > 1 {
                debug!("{}: decoded as UTF-16LE", origin);
                return non_empty(lines, origin);
            }
        }
    }

    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let text = match std::str::from_utf8(bytes) {
        Ok(text) => {
            debug!("{}: decoded as UTF-8", origin);
            text.to_string()
        }
        Err(_) => {
            debug!("{}: decoded as ISO-8859-1", origin);
            bytes.iter().map(|&b| b as char).collect()
        }
    };
    non_empty(split_lines(&text), origin)
}

/// Read and decode a file.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let bytes = fs::read(path).map_err(|e| AscError::file_read(display.as_str(), e))?;
    decode_text(&bytes, &display)
}

/// Encode lines as UTF-16LE, each terminated by a newline.
pub fn encode_utf16le<S: AsRef<str>>(lines: &[S]) -> Vec<u8> {
    let mut out = Vec::new();
    for line in lines {
        for unit in line.as_ref().encode_utf16().chain(std::iter::once(u16::from(b'\n'))) {
            out.extend_from_slice(&unit.to_le_bytes());
        }
    }
    out
}

/// Write lines to `path` as UTF-16LE.
pub fn write_lines<S: AsRef<str>>(path: impl AsRef<Path>, lines: &[S]) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, encode_utf16le(lines)).map_err(|source| AscError::FileWriteError {
        path: path.display().to_string(),
        source,
    })
}

fn looks_like_utf16le(bytes: &[u8]) -> bool {
    bytes.starts_with(b"\xFF\xFE") || (bytes.len() >= 2 && bytes[0] != 0 && bytes[1] == 0)
}

fn decode_utf16le(bytes: &[u8]) -> Option<String> {
    let bytes = bytes.strip_prefix(b"\xFF\xFE").unwrap_or(bytes);
    if bytes.len() % 2 != 0 {
        return None;
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).ok()
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

fn non_empty(lines: Vec<String>, origin: &str) -> Result<Vec<String>> {
    if lines.iter().all(|l| l.trim().is_empty()) {
        return Err(AscError::no_usable_text(origin));
    }
    Ok(lines)
}
