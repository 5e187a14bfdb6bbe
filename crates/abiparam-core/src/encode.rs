//! Text to typed value conversion

use num_bigint::{BigInt, Sign};
use serde::{Deserialize, Serialize};

use crate::array::ArrayDescriptor;
use crate::bytes::truncate_or_pad;
use crate::error::{AbiError, Result};
use crate::types::TypeDescriptor;
use crate::value::{parse_bool, parse_integer, EncodedValue};

/// Encoder settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Reject integers that do not fit the declared width
    #[serde(default)]
    pub check_int_range: bool,
}

/// Converts raw parameter text into typed values
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueEncoder {
    config: EncoderConfig,
}

impl ValueEncoder {
    /// Create an encoder with the given settings
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Encoder settings
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode one scalar value.
    ///
    /// Fixed-point kinds fail with `UnsupportedType` before any width check;
    /// other descriptors with illegal widths fail with `ConstructionFailure`.
    pub fn encode(&self, descriptor: &TypeDescriptor, input: &str) -> Result<EncodedValue> {
        if descriptor.is_fixed_point() {
            return Err(AbiError::unsupported(descriptor.canonical_name()));
        }

        if !descriptor.is_valid() {
            tracing::error!("encode failed input:{:?} type:{:?}", input, descriptor);
            return Err(AbiError::ConstructionFailure(descriptor.canonical_name()));
        }

        match *descriptor {
            TypeDescriptor::Address => Ok(EncodedValue::Address(input.to_string())),
            TypeDescriptor::UnsignedInt(bits) => {
                let value = self.encode_integer(descriptor, input)?;
                Ok(EncodedValue::Uint { bits, value })
            }
            TypeDescriptor::SignedInt(bits) => {
                let value = self.encode_integer(descriptor, input)?;
                Ok(EncodedValue::Int { bits, value })
            }
            TypeDescriptor::Bool => Ok(EncodedValue::Bool(parse_bool(input))),
            TypeDescriptor::Utf8String => Ok(EncodedValue::String(input.to_string())),
            TypeDescriptor::FixedBytes(width) => Ok(EncodedValue::FixedBytes(truncate_or_pad(
                input.as_bytes(),
                width,
            ))),
            TypeDescriptor::DynamicBytes => Ok(EncodedValue::Bytes(input.as_bytes().to_vec())),
            TypeDescriptor::UnsignedFixed(..) | TypeDescriptor::SignedFixed(..) => {
                Err(AbiError::unsupported(descriptor.canonical_name()))
            }
        }
    }

    /// Encode every item of a dynamic array; the first failure aborts
    pub fn encode_array<S: AsRef<str>>(
        &self,
        array: &ArrayDescriptor,
        inputs: &[S],
    ) -> Result<EncodedValue> {
        let element = array.element();
        let items = inputs
            .iter()
            .map(|input| self.encode(element, input.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(EncodedValue::Array {
            element: *element,
            items,
        })
    }

    fn encode_integer(&self, descriptor: &TypeDescriptor, input: &str) -> Result<BigInt> {
        let value = parse_integer(input)?;

        if self.config.check_int_range && !fits_width(descriptor, &value) {
            return Err(AbiError::ValueOutOfRange {
                name: descriptor.canonical_name(),
                value: value.to_string(),
            });
        }

        Ok(value)
    }
}

/// Check `value` against the range of an integer descriptor
fn fits_width(descriptor: &TypeDescriptor, value: &BigInt) -> bool {
    match *descriptor {
        TypeDescriptor::UnsignedInt(bits) => {
            value.sign() != Sign::Minus && *value < (BigInt::from(1) << bits)
        }
        TypeDescriptor::SignedInt(bits) => {
            let bound = BigInt::from(1) << (bits - 1);
            *value >= -bound.clone() && *value < bound
        }
        _ => true,
    }
}

/// Encode with the default (unchecked) encoder
pub fn encode(descriptor: &TypeDescriptor, input: &str) -> Result<EncodedValue> {
    ValueEncoder::default().encode(descriptor, input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::resolve_array_element;
    use crate::registry::resolve_scalar;

    #[test]
    fn test_encode_address_passthrough() {
        let encoded = encode(&TypeDescriptor::Address, "not-an-address").unwrap();
        assert_eq!(encoded, EncodedValue::Address("not-an-address".to_string()));
    }

    #[test]
    fn test_encode_uint() {
        let encoded = encode(&TypeDescriptor::UnsignedInt(256), "100").unwrap();
        assert_eq!(
            encoded,
            EncodedValue::Uint {
                bits: 256,
                value: BigInt::from(100)
            }
        );
    }

    #[test]
    fn test_encode_int_negative() {
        let encoded = encode(&TypeDescriptor::SignedInt(64), "-100").unwrap();
        assert_eq!(encoded.as_integer(), Some(&BigInt::from(-100)));
    }

    #[test]
    fn test_encode_integer_invalid() {
        for input in ["", "abc", "-", "1e3"] {
            let err = encode(&TypeDescriptor::UnsignedInt(8), input).unwrap_err();
            assert_eq!(err, AbiError::InvalidNumericInput(input.to_string()));
        }
    }

    #[test]
    fn test_encode_integer_no_range_check_by_default() {
        // 300 does not fit uint8 and -1 is not unsigned; both pass through
        let encoded = encode(&TypeDescriptor::UnsignedInt(8), "300").unwrap();
        assert_eq!(encoded.as_integer(), Some(&BigInt::from(300)));

        let encoded = encode(&TypeDescriptor::UnsignedInt(8), "-1").unwrap();
        assert_eq!(encoded.as_integer(), Some(&BigInt::from(-1)));
    }

    #[test]
    fn test_encode_integer_range_check() {
        let encoder = ValueEncoder::new(EncoderConfig {
            check_int_range: true,
        });

        assert!(encoder.encode(&TypeDescriptor::UnsignedInt(8), "255").is_ok());
        assert!(encoder.encode(&TypeDescriptor::UnsignedInt(8), "0").is_ok());
        assert!(encoder.encode(&TypeDescriptor::SignedInt(8), "-128").is_ok());
        assert!(encoder.encode(&TypeDescriptor::SignedInt(8), "127").is_ok());

        let err = encoder.encode(&TypeDescriptor::UnsignedInt(8), "256").unwrap_err();
        assert_eq!(
            err,
            AbiError::ValueOutOfRange {
                name: "uint8".to_string(),
                value: "256".to_string()
            }
        );
        assert!(encoder.encode(&TypeDescriptor::UnsignedInt(8), "-1").is_err());
        assert!(encoder.encode(&TypeDescriptor::SignedInt(8), "128").is_err());
        assert!(encoder.encode(&TypeDescriptor::SignedInt(8), "-129").is_err());
    }

    #[test]
    fn test_encode_bool_lenient() {
        for (input, expected) in [
            ("true", true),
            ("TRUE", true),
            ("tRuE", true),
            ("false", false),
            ("garbage", false),
            ("", false),
            ("1", false),
        ] {
            let encoded = encode(&TypeDescriptor::Bool, input).unwrap();
            assert_eq!(encoded, EncodedValue::Bool(expected), "input {:?}", input);
        }
    }

    #[test]
    fn test_encode_string_passthrough() {
        let encoded = encode(&TypeDescriptor::Utf8String, "héllo wörld").unwrap();
        assert_eq!(encoded.as_text(), Some("héllo wörld"));
    }

    #[test]
    fn test_encode_bytes32_pads() {
        let encoded = encode(resolve_scalar("bytes32").unwrap(), "hello").unwrap();
        let bytes = encoded.as_bytes().unwrap();
        assert_eq!(bytes.len(), 32);
        assert_eq!(&bytes[..5], b"hello");
        assert!(bytes[5..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_encode_bytes4_truncates() {
        let encoded = encode(&TypeDescriptor::FixedBytes(4), "abcdefgh").unwrap();
        assert_eq!(encoded, EncodedValue::FixedBytes(b"abcd".to_vec()));

        // Byte-wise, not character-wise: "日本" is 6 bytes
        let encoded = encode(&TypeDescriptor::FixedBytes(4), "日本").unwrap();
        assert_eq!(encoded.as_bytes().unwrap(), &"日本".as_bytes()[..4]);
    }

    #[test]
    fn test_encode_dynamic_bytes() {
        let long = "x".repeat(100);
        let encoded = encode(&TypeDescriptor::DynamicBytes, &long).unwrap();
        assert_eq!(encoded, EncodedValue::Bytes(long.into_bytes()));
    }

    #[test]
    fn test_encode_fixed_point_unsupported() {
        let err = encode(&TypeDescriptor::UnsignedFixed(128, 128), "1").unwrap_err();
        assert_eq!(err, AbiError::unsupported("ufixed128x128"));
        assert!(err.to_string().contains("ufixed128x128"));

        // Fixed-point takes precedence over the width check
        let err = encode(&TypeDescriptor::UnsignedFixed(8, 240), "1").unwrap_err();
        assert_eq!(err, AbiError::unsupported("ufixed8x240"));
        let err = encode(&TypeDescriptor::SignedFixed(7, 9), "1").unwrap_err();
        assert_eq!(err, AbiError::unsupported("fixed7x9"));
    }

    #[test]
    fn test_encode_invalid_descriptor() {
        let err = encode(&TypeDescriptor::FixedBytes(40), "x").unwrap_err();
        assert_eq!(err, AbiError::ConstructionFailure("bytes40".to_string()));

        let err = encode(&TypeDescriptor::UnsignedInt(7), "1").unwrap_err();
        assert_eq!(err, AbiError::ConstructionFailure("uint7".to_string()));
    }

    #[test]
    fn test_encode_array() {
        let array = resolve_array_element("uint16").unwrap();
        let encoded = ValueEncoder::default()
            .encode_array(&array, &["1", "2", "3"])
            .unwrap();
        match encoded {
            EncodedValue::Array { element, items } => {
                assert_eq!(element, TypeDescriptor::UnsignedInt(16));
                assert_eq!(items.len(), 3);
                assert_eq!(items[2].as_integer(), Some(&BigInt::from(3)));
            }
            _ => panic!("Expected Array"),
        }
    }

    #[test]
    fn test_encode_array_aborts_on_bad_item() {
        let array = resolve_array_element("int8").unwrap();
        let err = ValueEncoder::default()
            .encode_array(&array, &["1", "x", "3"])
            .unwrap_err();
        assert_eq!(err, AbiError::InvalidNumericInput("x".to_string()));
    }
}
