//! Dynamic-array types and parameter type resolution

use std::fmt;

use crate::error::{AbiError, Result};
use crate::registry::TypeRegistry;
use crate::types::TypeDescriptor;

/// Dynamic array of a single scalar element type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArrayDescriptor {
    element: &'static TypeDescriptor,
}

impl ArrayDescriptor {
    /// Element descriptor
    pub fn element(&self) -> &'static TypeDescriptor {
        self.element
    }

    /// Canonical name, e.g. `uint256[]`
    pub fn canonical_name(&self) -> String {
        format!("{}[]", self.element.canonical_name())
    }
}

impl fmt::Display for ArrayDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[]", self.element)
    }
}

/// Wrap the scalar type `name` into a dynamic array of that element.
///
/// Only scalar names are accepted, so `uint8[]` (an array of arrays) and
/// compound names fail like any other unknown name.
pub fn resolve_array_element(name: &str) -> Result<ArrayDescriptor> {
    TypeRegistry::global()
        .get(name)
        .map(|element| ArrayDescriptor { element })
        .ok_or_else(|| AbiError::unsupported_array(name))
}

/// Type of one function parameter: scalar or dynamic array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamDescriptor {
    /// Scalar parameter
    Scalar(&'static TypeDescriptor),
    /// Dynamic array parameter
    Array(ArrayDescriptor),
}

impl ParamDescriptor {
    /// Canonical name of the parameter type
    pub fn canonical_name(&self) -> String {
        match self {
            ParamDescriptor::Scalar(descriptor) => descriptor.canonical_name(),
            ParamDescriptor::Array(array) => array.canonical_name(),
        }
    }

    /// Check if this type is dynamic (variable length)
    pub fn is_dynamic(&self) -> bool {
        match self {
            ParamDescriptor::Scalar(descriptor) => descriptor.is_dynamic(),
            ParamDescriptor::Array(_) => true,
        }
    }
}

impl fmt::Display for ParamDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamDescriptor::Scalar(descriptor) => write!(f, "{}", descriptor),
            ParamDescriptor::Array(array) => write!(f, "{}", array),
        }
    }
}

/// Parse a parameter type string: a scalar name or `<scalar>[]`
pub fn resolve_param(name: &str) -> Result<ParamDescriptor> {
    match name.strip_suffix("[]") {
        Some(element) => resolve_array_element(element)
            .map(ParamDescriptor::Array)
            .map_err(|_| AbiError::unsupported_array(name)),
        None => TypeRegistry::global()
            .resolve_scalar(name)
            .map(ParamDescriptor::Scalar),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_array_element() {
        let array = resolve_array_element("uint256").unwrap();
        assert_eq!(array.element(), &TypeDescriptor::UnsignedInt(256));
        assert_eq!(array.canonical_name(), "uint256[]");
        assert_eq!(array.to_string(), "uint256[]");

        let array = resolve_array_element("bytes7").unwrap();
        assert_eq!(array.element(), &TypeDescriptor::FixedBytes(7));
    }

    #[test]
    fn test_resolve_array_rejects_nested() {
        let err = resolve_array_element("uint256[]").unwrap_err();
        assert_eq!(err, AbiError::unsupported_array("uint256[]"));
        assert!(err.to_string().contains("uint256[]"));

        assert!(resolve_array_element("tuple").is_err());
        assert!(resolve_array_element("(uint256,bool)").is_err());
    }

    #[test]
    fn test_resolve_param() {
        assert_eq!(
            resolve_param("address").unwrap(),
            ParamDescriptor::Scalar(&TypeDescriptor::Address)
        );

        let param = resolve_param("bool[]").unwrap();
        assert!(param.is_dynamic());
        assert_eq!(param.canonical_name(), "bool[]");
        match param {
            ParamDescriptor::Array(array) => assert_eq!(array.element(), &TypeDescriptor::Bool),
            _ => panic!("Expected array descriptor"),
        }
    }

    #[test]
    fn test_resolve_param_rejects_compound() {
        for name in ["uint8[][]", "uint8[3]", "tuple[]", "[]", "tuple"] {
            let err = resolve_param(name).unwrap_err();
            match err {
                AbiError::UnsupportedType { name: rejected, .. } => assert_eq!(rejected, name),
                other => panic!("Expected UnsupportedType, got {:?}", other),
            }
        }
    }
}
