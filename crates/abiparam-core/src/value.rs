//! Values crossing the codec boundary

use std::fmt;

use num_bigint::BigInt;
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::error::{AbiError, Result};
use crate::types::TypeDescriptor;

/// Typed value ready for the byte-level ABI encoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodedValue {
    /// Address text, passed through unchecked
    Address(String),
    /// Unsigned integer with its declared bit size
    Uint {
        /// Declared bit size
        bits: usize,
        /// Parsed value
        value: BigInt,
    },
    /// Signed integer with its declared bit size
    Int {
        /// Declared bit size
        bits: usize,
        /// Parsed value
        value: BigInt,
    },
    /// Boolean
    Bool(bool),
    /// UTF-8 string
    String(String),
    /// Fixed-size bytes, always exactly the declared width
    FixedBytes(Vec<u8>),
    /// Dynamic bytes
    Bytes(Vec<u8>),
    /// Dynamic array of one element type
    Array {
        /// Element type
        element: TypeDescriptor,
        /// Encoded items
        items: Vec<EncodedValue>,
    },
}

impl EncodedValue {
    /// Integer payload, if any
    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            EncodedValue::Uint { value, .. } | EncodedValue::Int { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Byte payload, if any
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            EncodedValue::FixedBytes(data) | EncodedValue::Bytes(data) => Some(data.as_slice()),
            _ => None,
        }
    }

    /// Text payload, if any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            EncodedValue::Address(s) | EncodedValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Boolean payload, if any
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            EncodedValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl Serialize for EncodedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            EncodedValue::Address(s) | EncodedValue::String(s) => serializer.serialize_str(s),
            EncodedValue::Uint { value, .. } | EncodedValue::Int { value, .. } => {
                serializer.collect_str(value)
            }
            EncodedValue::Bool(b) => serializer.serialize_bool(*b),
            EncodedValue::FixedBytes(data) | EncodedValue::Bytes(data) => {
                serializer.serialize_str(&format!("0x{}", hex::encode(data)))
            }
            EncodedValue::Array { items, .. } => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

/// Raw value produced by the byte-level ABI decoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedValue {
    /// Integer of any width
    Integer(BigInt),
    /// Boolean
    Bool(bool),
    /// Text (strings and rendered addresses)
    Text(String),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// Items of a dynamic array
    Array(Vec<DecodedValue>),
}

impl DecodedValue {
    /// Short name of the variant, for diagnostics
    pub fn variant_name(&self) -> &'static str {
        match self {
            DecodedValue::Integer(_) => "integer",
            DecodedValue::Bool(_) => "bool",
            DecodedValue::Text(_) => "text",
            DecodedValue::Bytes(_) => "bytes",
            DecodedValue::Array(_) => "array",
        }
    }
}

/// Loopback conversion, as if the value went through a lossless wire codec
impl From<EncodedValue> for DecodedValue {
    fn from(value: EncodedValue) -> Self {
        match value {
            EncodedValue::Address(s) | EncodedValue::String(s) => DecodedValue::Text(s),
            EncodedValue::Uint { value, .. } | EncodedValue::Int { value, .. } => {
                DecodedValue::Integer(value)
            }
            EncodedValue::Bool(b) => DecodedValue::Bool(b),
            EncodedValue::FixedBytes(data) | EncodedValue::Bytes(data) => DecodedValue::Bytes(data),
            EncodedValue::Array { items, .. } => {
                DecodedValue::Array(items.into_iter().map(DecodedValue::from).collect())
            }
        }
    }
}

/// Display-friendly value returned to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayValue {
    /// Text
    Text(String),
    /// Integer of any width
    Integer(BigInt),
    /// Boolean
    Bool(bool),
    /// Items of a dynamic array
    List(Vec<DisplayValue>),
}

impl DisplayValue {
    /// Text payload, if any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DisplayValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Integer payload, if any
    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            DisplayValue::Integer(n) => Some(n),
            _ => None,
        }
    }

    /// Boolean payload, if any
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DisplayValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayValue::Text(s) => f.write_str(s),
            DisplayValue::Integer(n) => write!(f, "{}", n),
            DisplayValue::Bool(b) => write!(f, "{}", b),
            DisplayValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

// Integers are written as decimal strings so no precision is lost in JSON
impl Serialize for DisplayValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            DisplayValue::Text(s) => serializer.serialize_str(s),
            DisplayValue::Integer(n) => serializer.collect_str(n),
            DisplayValue::Bool(b) => serializer.serialize_bool(*b),
            DisplayValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

/// Parse base-10 text into an arbitrary-precision integer.
///
/// Accepts an optional leading `+` or `-` followed by one or more ASCII
/// digits; anything else (whitespace, underscores, empty digits) fails.
pub fn parse_integer(text: &str) -> Result<BigInt> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AbiError::InvalidNumericInput(text.to_string()));
    }

    let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| AbiError::InvalidNumericInput(text.to_string()))?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Lenient boolean: case-insensitive `true` is true, anything else is false
pub fn parse_bool(text: &str) -> bool {
    text.eq_ignore_ascii_case("true")
}
