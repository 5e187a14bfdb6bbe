//! # abiparam-core
//!
//! Type resolution and value codec for contract-call parameters.
//!
//! ## Features
//!
//! - **TypeRegistry**: closed table of canonical ABI type names
//! - **Arrays**: dynamic-array descriptors over any scalar type
//! - **ValueEncoder**: parameter text to typed values for the wire encoder
//! - **ValueDecoder**: wire decoder output to display values
//! - **Lexical parsing**: name-driven parsing for display and filtering
//!
//! Byte-level ABI packing is left to an external codec.
//!
//! ## Quick Start
//!
//! ```rust
//! use abiparam_core::{decode, encode, resolve_scalar, DecodedValue, DisplayValue};
//!
//! let bytes32 = resolve_scalar("bytes32").unwrap();
//! let encoded = encode(bytes32, "hello").unwrap();
//! assert_eq!(encoded.as_bytes().unwrap().len(), 32);
//!
//! let shown = decode(bytes32, DecodedValue::from(encoded)).unwrap();
//! assert_eq!(shown, DisplayValue::Text("hello".to_string()));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod array;
mod bytes;
mod decode;
mod encode;
mod error;
mod lexical;
pub mod params;
mod registry;
mod types;
mod value;

pub use array::{resolve_array_element, resolve_param, ArrayDescriptor, ParamDescriptor};
pub use bytes::{decode_null_terminated, search_byte, truncate_or_pad};
pub use decode::{decode, ValueDecoder};
pub use encode::{encode, EncoderConfig, ValueEncoder};
pub use error::{error_code, AbiError, ErrorBody, Result, TypeContext};
pub use lexical::parse_by_type;
pub use registry::{resolve_scalar, TypeRegistry};
pub use types::{is_legal_bits, TypeDescriptor, BITS_STEP, MAX_BITS, MAX_FIXED_BYTES};
pub use value::{parse_bool, parse_integer, DecodedValue, DisplayValue, EncodedValue};

// Re-export the integer type used in values
pub use num_bigint::BigInt;
