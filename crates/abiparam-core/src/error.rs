//! Codec error types

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Numeric error codes returned to callers
pub mod error_code {
    /// Invalid function parameter (generic fallback)
    pub const INVALID_PARAMETER: i64 = 201200;
    /// Type unsupported for encoding
    pub const UNSUPPORTED_ENCODING: i64 = 201201;
    /// Type unsupported for decoding
    pub const UNSUPPORTED_DECODING: i64 = 201202;
    /// Unable to construct a typed value
    pub const CONSTRUCTION_FAILURE: i64 = 201203;
}

/// Where an unsupported type name was encountered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeContext {
    /// Scalar resolution, encoding or lexical parsing
    Encoding,
    /// Dynamic-array element resolution
    ArrayEncoding,
    /// Decoding a codec result
    Decoding,
}

impl fmt::Display for TypeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeContext::Encoding => f.write_str("unsupported encoding"),
            TypeContext::ArrayEncoding => f.write_str("array unsupported encoding"),
            TypeContext::Decoding => f.write_str("unsupported decoding"),
        }
    }
}

/// ABI codec error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiError {
    /// Type name or kind outside the supported grammar
    #[error("type:{name} {context}")]
    UnsupportedType {
        /// Offending type name
        name: String,
        /// Operation that rejected it
        context: TypeContext,
    },

    /// Text is not a base-10 integer
    #[error("invalid numeric input: {0:?}")]
    InvalidNumericInput(String),

    /// A typed value could not be materialized for the given kind
    #[error("unable to create instance of type:{0}")]
    ConstructionFailure(String),

    /// Byte sequence is not valid UTF-8
    #[error("type:bytes{len} unsupported decoding")]
    EncodingError {
        /// Length of the rejected byte range
        len: usize,
    },

    /// Generic fallback; the cause is logged, never returned
    #[error("invalid function parameter")]
    InvalidParameter,

    /// Parameter list length does not match the declared types
    #[error("expected {expected} parameters, got {actual}")]
    ArgumentCount {
        /// Declared parameter count
        expected: usize,
        /// Supplied value count
        actual: usize,
    },

    /// Integer does not fit the declared width
    #[error("value {value} out of range for type:{name}")]
    ValueOutOfRange {
        /// Declared type name
        name: String,
        /// Rejected value in decimal
        value: String,
    },
}

impl AbiError {
    /// Unsupported type during resolution, encoding or parsing
    pub fn unsupported(name: impl Into<String>) -> Self {
        AbiError::UnsupportedType {
            name: name.into(),
            context: TypeContext::Encoding,
        }
    }

    /// Unsupported dynamic-array element type
    pub fn unsupported_array(name: impl Into<String>) -> Self {
        AbiError::UnsupportedType {
            name: name.into(),
            context: TypeContext::ArrayEncoding,
        }
    }

    /// Unsupported type during decoding
    pub fn unsupported_decoding(name: impl Into<String>) -> Self {
        AbiError::UnsupportedType {
            name: name.into(),
            context: TypeContext::Decoding,
        }
    }

    /// Numeric code for this error
    pub fn code(&self) -> i64 {
        match self {
            AbiError::UnsupportedType { context, .. } => match context {
                TypeContext::Decoding => error_code::UNSUPPORTED_DECODING,
                _ => error_code::UNSUPPORTED_ENCODING,
            },
            AbiError::EncodingError { .. } => error_code::UNSUPPORTED_DECODING,
            AbiError::ConstructionFailure(_) => error_code::CONSTRUCTION_FAILURE,
            AbiError::InvalidNumericInput(_)
            | AbiError::InvalidParameter
            | AbiError::ArgumentCount { .. }
            | AbiError::ValueOutOfRange { .. } => error_code::INVALID_PARAMETER,
        }
    }

    /// Structured form handed back to the caller
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

/// Serializable error payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Error code
    pub code: i64,
    /// Error message
    pub message: String,
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, AbiError>;
