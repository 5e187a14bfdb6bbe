//! Byte canonicalization helpers shared by both codec directions

use crate::error::{AbiError, Result};

/// Position of the first occurrence of `value` in `data`
pub fn search_byte(data: &[u8], value: u8) -> Option<usize> {
    data.iter().position(|&b| b == value)
}

/// Fit `data` into exactly `width` bytes.
///
/// Longer input keeps its first `width` bytes; this is a byte slice and may
/// split a multi-byte character. Shorter input is right-padded with zeros.
pub fn truncate_or_pad(data: &[u8], width: usize) -> Vec<u8> {
    let mut buf = vec![0u8; width];
    let len = data.len().min(width);
    buf[..len].copy_from_slice(&data[..len]);
    buf
}

/// Decode a null-terminated byte sequence as UTF-8 text.
///
/// Bytes up to (not including) the first zero are decoded; without a zero
/// the whole sequence is.
pub fn decode_null_terminated(data: &[u8]) -> Result<String> {
    let end = search_byte(data, 0).unwrap_or(data.len());
    let text = &data[..end];
    std::str::from_utf8(text)
        .map(str::to_string)
        .map_err(|_| AbiError::EncodingError { len: data.len() })
}
