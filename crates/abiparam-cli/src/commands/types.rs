//! Type listing and resolution commands

use abiparam_core::{resolve_param, ParamDescriptor, TypeDescriptor, TypeRegistry};
use serde_json::{json, Value};

use crate::{output::Output, CliError};

/// List every canonical name, or every dynamic-array name
pub fn list_types(arrays: bool, json: bool) -> Result<(), CliError> {
    let names: Vec<String> = TypeRegistry::global()
        .names()
        .map(|name| if arrays { format!("{}[]", name) } else { name })
        .collect();

    Output::new(json)
        .field_value("count", json!(names.len()))
        .field_value("types", json!(names))
        .message(&names.join("\n"))
        .print();

    Ok(())
}

/// Describe the descriptor behind a type name
pub fn resolve(name: &str, json: bool) -> Result<(), CliError> {
    let param = resolve_param(name)?;

    let (kind, details, element) = match param {
        ParamDescriptor::Scalar(descriptor) => {
            let (kind, details) = describe(descriptor);
            (kind, details, None)
        }
        ParamDescriptor::Array(array) => ("array", Value::Null, Some(array.element())),
    };

    let mut lines = vec![
        format!("Type: {}", param),
        format!("Kind: {}", kind),
        format!("Dynamic: {}", param.is_dynamic()),
    ];
    if let Some(element) = element {
        lines.push(format!("Element: {}", element));
    }
    if let Value::Object(map) = &details {
        for (key, value) in map {
            lines.push(format!("{}: {}", capitalize(key), value));
        }
    }

    Output::new(json)
        .field("type", &param.canonical_name())
        .field("kind", kind)
        .field_bool("dynamic", param.is_dynamic())
        .field_value("element", json!(element.map(TypeDescriptor::canonical_name)))
        .field_value("details", details)
        .message(&lines.join("\n"))
        .print();

    Ok(())
}

/// Kind label and width details of a scalar descriptor
fn describe(descriptor: &TypeDescriptor) -> (&'static str, Value) {
    match *descriptor {
        TypeDescriptor::Address => ("address", Value::Null),
        TypeDescriptor::Bool => ("bool", Value::Null),
        TypeDescriptor::Utf8String => ("string", Value::Null),
        TypeDescriptor::DynamicBytes => ("bytes", Value::Null),
        TypeDescriptor::FixedBytes(width) => ("fixed-bytes", json!({ "width": width })),
        TypeDescriptor::UnsignedInt(bits) => ("uint", json!({ "bits": bits })),
        TypeDescriptor::SignedInt(bits) => ("int", json!({ "bits": bits })),
        TypeDescriptor::UnsignedFixed(m, n) => {
            ("ufixed", json!({ "integer_bits": m, "fraction_bits": n }))
        }
        TypeDescriptor::SignedFixed(m, n) => {
            ("fixed", json!({ "integer_bits": m, "fraction_bits": n }))
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
