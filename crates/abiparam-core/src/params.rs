//! Whole-call parameter assembly

use serde_json::Value;

use crate::array::{resolve_param, ParamDescriptor};
use crate::decode::ValueDecoder;
use crate::encode::ValueEncoder;
use crate::error::{AbiError, Result};
use crate::value::{DecodedValue, DisplayValue, EncodedValue};

/// Encode a full parameter list.
///
/// Array parameters take a JSON array; scalars take a string, number or
/// bool. The first failing parameter aborts the whole call.
pub fn encode_params<S: AsRef<str>>(
    encoder: &ValueEncoder,
    types: &[S],
    values: &[Value],
) -> Result<Vec<EncodedValue>> {
    check_count(types.len(), values.len())?;
    tracing::debug!("Encoding {} parameters", types.len());

    types
        .iter()
        .zip(values)
        .map(|(name, value)| encode_param(encoder, name.as_ref(), value))
        .collect()
}

/// Encode one parameter of a call
pub fn encode_param(encoder: &ValueEncoder, name: &str, value: &Value) -> Result<EncodedValue> {
    match resolve_param(name)? {
        ParamDescriptor::Scalar(descriptor) => encoder.encode(descriptor, &scalar_text(name, value)?),
        ParamDescriptor::Array(array) => {
            let items = value.as_array().ok_or_else(|| {
                tracing::error!("encode failed input:{} type:{}", value, name);
                AbiError::InvalidParameter
            })?;
            let inputs = items
                .iter()
                .map(|item| scalar_text(name, item))
                .collect::<Result<Vec<_>>>()?;
            encoder.encode_array(&array, &inputs)
        }
    }
}

/// Decode a full result list
pub fn decode_outputs<S: AsRef<str>>(
    decoder: &ValueDecoder,
    types: &[S],
    values: Vec<DecodedValue>,
) -> Result<Vec<DisplayValue>> {
    check_count(types.len(), values.len())?;
    tracing::debug!("Decoding {} outputs", types.len());

    types
        .iter()
        .zip(values)
        .map(|(name, value)| decode_output(decoder, name.as_ref(), value))
        .collect()
}

/// Decode one result of a call
pub fn decode_output(
    decoder: &ValueDecoder,
    name: &str,
    value: DecodedValue,
) -> Result<DisplayValue> {
    match resolve_param(name).map_err(|_| AbiError::unsupported_decoding(name))? {
        ParamDescriptor::Scalar(descriptor) => decoder.decode(descriptor, value),
        ParamDescriptor::Array(array) => decoder.decode_array(&array, value),
    }
}

fn check_count(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(AbiError::ArgumentCount { expected, actual });
    }
    Ok(())
}

/// Raw text of a scalar JSON value
fn scalar_text(name: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => {
            tracing::error!("encode failed input:{} type:{}", other, name);
            Err(AbiError::InvalidParameter)
        }
    }
}
