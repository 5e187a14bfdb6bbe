//! Name-driven parsing for display and filtering contexts
//!
//! Works on the type name string alone, without registry descriptors, and
//! never pads or truncates byte types.

use crate::error::{AbiError, Result};
use crate::types::{is_legal_bits, MAX_FIXED_BYTES};
use crate::value::{parse_bool, parse_integer, DisplayValue};

/// Parse `input` according to the type `name`
pub fn parse_by_type(name: &str, input: &str) -> Result<DisplayValue> {
    match name {
        "address" | "string" | "bytes" => Ok(DisplayValue::Text(input.to_string())),
        "bool" => Ok(DisplayValue::Bool(parse_bool(input))),
        _ if integer_bits(name).is_some() => parse_integer(input).map(DisplayValue::Integer),
        _ if fixed_bytes_width(name).is_some() => Ok(DisplayValue::Text(input.to_string())),
        _ => Err(AbiError::unsupported(name)),
    }
}

/// Bit size of an `intN` / `uintN` name
fn integer_bits(name: &str) -> Option<usize> {
    let rest = name.strip_prefix("u").unwrap_or(name).strip_prefix("int")?;
    parse_width(rest).filter(|&bits| is_legal_bits(bits))
}

/// Width of a `bytesN` name
fn fixed_bytes_width(name: &str) -> Option<usize> {
    let rest = name.strip_prefix("bytes")?;
    parse_width(rest).filter(|width| (1..=MAX_FIXED_BYTES).contains(width))
}

/// Parse a decimal width written without sign or leading zeros
fn parse_width(s: &str) -> Option<usize> {
    if s.is_empty() || s.starts_with('0') || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
