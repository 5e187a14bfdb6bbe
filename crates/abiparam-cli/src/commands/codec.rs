//! Encode, decode and parse commands

use abiparam_core::{
    params, parse_by_type, parse_integer, resolve_param, AbiError, DecodedValue,
    ParamDescriptor, TypeDescriptor, ValueDecoder, ValueEncoder,
};
use serde_json::Value;

use crate::{config::Config, output::Output, CliError};

/// Encode one parameter value; array types take a JSON array
pub fn encode(config: &Config, type_name: &str, input: &str, json: bool) -> Result<(), CliError> {
    let value = if type_name.ends_with("[]") {
        serde_json::from_str(input)?
    } else {
        Value::String(input.to_string())
    };

    let encoder = ValueEncoder::new(config.encoder);
    let encoded = params::encode_param(&encoder, type_name, &value)?;
    let rendered = serde_json::to_value(&encoded)?;

    Output::new(json)
        .field("type", type_name)
        .field_value("value", rendered.clone())
        .message(&plain(&rendered))
        .print();

    Ok(())
}

/// Decode a codec-side value given as text
pub fn decode(type_name: &str, input: &str, json: bool) -> Result<(), CliError> {
    let param = resolve_param(type_name).map_err(|_| AbiError::unsupported_decoding(type_name))?;
    let value = match param {
        ParamDescriptor::Scalar(descriptor) => decoded_from_text(descriptor, input)?,
        ParamDescriptor::Array(array) => {
            let items: Vec<Value> = serde_json::from_str(input)?;
            let items = items
                .iter()
                .map(|item| decoded_from_text(array.element(), &plain(item)))
                .collect::<Result<Vec<_>, _>>()?;
            DecodedValue::Array(items)
        }
    };

    let shown = params::decode_output(&ValueDecoder::new(), type_name, value)?;
    let rendered = serde_json::to_value(&shown)?;

    Output::new(json)
        .field("type", type_name)
        .field_value("value", rendered)
        .message(&shown.to_string())
        .print();

    Ok(())
}

/// Parse a value by type name without the codec pipeline
pub fn parse(type_name: &str, input: &str, json: bool) -> Result<(), CliError> {
    let parsed = parse_by_type(type_name, input)?;
    let rendered = serde_json::to_value(&parsed)?;

    Output::new(json)
        .field("type", type_name)
        .field_value("value", rendered)
        .message(&parsed.to_string())
        .print();

    Ok(())
}

/// Build the value the wire decoder would hand over for `descriptor`.
///
/// Byte kinds take `0x`-hex, integers decimal text, bool `true|false`.
fn decoded_from_text(descriptor: &TypeDescriptor, input: &str) -> Result<DecodedValue, CliError> {
    match descriptor {
        TypeDescriptor::FixedBytes(_) | TypeDescriptor::DynamicBytes => {
            let hex_str = input.strip_prefix("0x").unwrap_or(input);
            Ok(DecodedValue::Bytes(hex::decode(hex_str)?))
        }
        TypeDescriptor::UnsignedInt(_) | TypeDescriptor::SignedInt(_) => {
            Ok(DecodedValue::Integer(parse_integer(input)?))
        }
        TypeDescriptor::Bool => input
            .parse::<bool>()
            .map(DecodedValue::Bool)
            .map_err(|_| CliError::InvalidInput(format!("expected true or false, got {:?}", input))),
        _ => Ok(DecodedValue::Text(input.to_string())),
    }
}

/// Text form of a rendered value: strings unquoted, everything else as JSON
fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abiparam_core::BigInt;

    #[test]
    fn test_decoded_from_text_bytes() {
        let value = decoded_from_text(&TypeDescriptor::FixedBytes(4), "0x68690000").unwrap();
        assert_eq!(value, DecodedValue::Bytes(vec![0x68, 0x69, 0, 0]));

        let value = decoded_from_text(&TypeDescriptor::DynamicBytes, "6869").unwrap();
        assert_eq!(value, DecodedValue::Bytes(b"hi".to_vec()));

        let err = decoded_from_text(&TypeDescriptor::DynamicBytes, "0xzz").unwrap_err();
        assert!(matches!(err, CliError::InvalidHex(_)));
    }

    #[test]
    fn test_decoded_from_text_scalars() {
        assert_eq!(
            decoded_from_text(&TypeDescriptor::SignedInt(8), "-5").unwrap(),
            DecodedValue::Integer(BigInt::from(-5))
        );
        assert_eq!(
            decoded_from_text(&TypeDescriptor::Bool, "true").unwrap(),
            DecodedValue::Bool(true)
        );
        assert!(decoded_from_text(&TypeDescriptor::Bool, "TRUE").is_err());
        assert_eq!(
            decoded_from_text(&TypeDescriptor::Address, "0xabc").unwrap(),
            DecodedValue::Text("0xabc".to_string())
        );
    }

    #[test]
    fn test_decode_unknown_type_is_decoding_error() {
        let err = decode("tuple", "x", false).unwrap_err();
        assert_eq!(err.code(), abiparam_core::error_code::UNSUPPORTED_DECODING);
        assert!(err.to_string().contains("unsupported decoding"));
    }

    #[test]
    fn test_plain() {
        assert_eq!(plain(&Value::String("0xab".to_string())), "0xab");
        assert_eq!(plain(&serde_json::json!(["1", "2"])), "[\"1\",\"2\"]");
        assert_eq!(plain(&Value::Bool(true)), "true");
    }
}
