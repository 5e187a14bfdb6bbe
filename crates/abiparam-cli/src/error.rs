//! CLI error types

use abiparam_core::{error_code, AbiError};
use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Codec error
    #[error(transparent)]
    Abi(#[from] AbiError),

    /// Invalid hex string
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Numeric code reported in JSON output
    pub fn code(&self) -> i64 {
        match self {
            CliError::Abi(e) => e.code(),
            _ => error_code::INVALID_PARAMETER,
        }
    }
}

impl From<hex::FromHexError> for CliError {
    fn from(e: hex::FromHexError) -> Self {
        CliError::InvalidHex(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abi_error_keeps_code_and_message() {
        let err: CliError = AbiError::unsupported("tuple").into();
        assert_eq!(err.code(), error_code::UNSUPPORTED_ENCODING);
        assert_eq!(err.to_string(), "type:tuple unsupported encoding");
    }

    #[test]
    fn test_other_errors_use_generic_code() {
        let err = CliError::InvalidInput("bad".to_string());
        assert_eq!(err.code(), error_code::INVALID_PARAMETER);
        assert!(err.to_string().contains("bad"));
    }

    #[test]
    fn test_from_hex_error() {
        let hex_err = hex::decode("zz").unwrap_err();
        let err: CliError = hex_err.into();
        assert!(matches!(err, CliError::InvalidHex(_)));
    }
}
