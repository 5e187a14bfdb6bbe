//! Typed value to display value conversion

use crate::array::ArrayDescriptor;
use crate::bytes::decode_null_terminated;
use crate::error::{AbiError, Result};
use crate::types::TypeDescriptor;
use crate::value::{DecodedValue, DisplayValue};

/// Converts values from the byte-level decoder into display values
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueDecoder;

impl ValueDecoder {
    /// Create a decoder
    pub fn new() -> Self {
        Self
    }

    /// Decode one scalar value
    pub fn decode(&self, descriptor: &TypeDescriptor, value: DecodedValue) -> Result<DisplayValue> {
        match (*descriptor, value) {
            (TypeDescriptor::Address, DecodedValue::Text(s)) => Ok(DisplayValue::Text(s)),
            // Raw 20-byte form renders as 0x-prefixed hex
            (TypeDescriptor::Address, DecodedValue::Bytes(data)) => {
                Ok(DisplayValue::Text(format!("0x{}", hex::encode(data))))
            }
            (TypeDescriptor::Utf8String, DecodedValue::Text(s)) => Ok(DisplayValue::Text(s)),
            (
                TypeDescriptor::UnsignedInt(_) | TypeDescriptor::SignedInt(_),
                DecodedValue::Integer(n),
            ) => Ok(DisplayValue::Integer(n)),
            (TypeDescriptor::Bool, DecodedValue::Bool(b)) => Ok(DisplayValue::Bool(b)),
            (
                TypeDescriptor::FixedBytes(_) | TypeDescriptor::DynamicBytes,
                DecodedValue::Bytes(data),
            ) => decode_null_terminated(&data).map(DisplayValue::Text),
            (TypeDescriptor::UnsignedFixed(..) | TypeDescriptor::SignedFixed(..), _) => {
                Err(AbiError::unsupported_decoding(descriptor.canonical_name()))
            }
            (_, value) => {
                tracing::error!(
                    "decode failed result:{} type:{}",
                    value.variant_name(),
                    descriptor
                );
                Err(AbiError::InvalidParameter)
            }
        }
    }

    /// Decode every item of a dynamic array; the first failure aborts
    pub fn decode_array(&self, array: &ArrayDescriptor, value: DecodedValue) -> Result<DisplayValue> {
        match value {
            DecodedValue::Array(items) => items
                .into_iter()
                .map(|item| self.decode(array.element(), item))
                .collect::<Result<Vec<_>>>()
                .map(DisplayValue::List),
            other => {
                tracing::error!(
                    "decode failed result:{} type:{}",
                    other.variant_name(),
                    array
                );
                Err(AbiError::InvalidParameter)
            }
        }
    }
}

/// Decode with the default decoder
pub fn decode(descriptor: &TypeDescriptor, value: DecodedValue) -> Result<DisplayValue> {
    ValueDecoder::new().decode(descriptor, value)
}
