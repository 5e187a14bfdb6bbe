//! ABI type descriptors

use std::fmt;

/// Bit-width step shared by integer and fixed-point types
pub const BITS_STEP: usize = 8;

/// Largest integer / fixed-point width in bits
pub const MAX_BITS: usize = 256;

/// Largest `bytesN` width
pub const MAX_FIXED_BYTES: usize = 32;

/// Check that `bits` is one of 8, 16, ..., 256
pub fn is_legal_bits(bits: usize) -> bool {
    bits >= BITS_STEP && bits <= MAX_BITS && bits % BITS_STEP == 0
}

/// Structural description of one legal ABI type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// Address
    Address,
    /// Boolean
    Bool,
    /// UTF-8 string
    Utf8String,
    /// Fixed-size bytes (width 1-32)
    FixedBytes(usize),
    /// Dynamic bytes
    DynamicBytes,
    /// Unsigned integer with bit size (8, 16, ..., 256)
    UnsignedInt(usize),
    /// Signed integer with bit size
    SignedInt(usize),
    /// Unsigned fixed-point (integer bits, fractional bits)
    UnsignedFixed(usize, usize),
    /// Signed fixed-point (integer bits, fractional bits)
    SignedFixed(usize, usize),
}

impl TypeDescriptor {
    /// Canonical type name, e.g. `uint256` or `ufixed128x128`
    pub fn canonical_name(&self) -> String {
        match self {
            TypeDescriptor::Address => "address".to_string(),
            TypeDescriptor::Bool => "bool".to_string(),
            TypeDescriptor::Utf8String => "string".to_string(),
            TypeDescriptor::FixedBytes(width) => format!("bytes{}", width),
            TypeDescriptor::DynamicBytes => "bytes".to_string(),
            TypeDescriptor::UnsignedInt(bits) => format!("uint{}", bits),
            TypeDescriptor::SignedInt(bits) => format!("int{}", bits),
            TypeDescriptor::UnsignedFixed(m, n) => format!("ufixed{}x{}", m, n),
            TypeDescriptor::SignedFixed(m, n) => format!("fixed{}x{}", m, n),
        }
    }

    /// Check if this type is dynamic (variable length)
    pub fn is_dynamic(&self) -> bool {
        matches!(self, TypeDescriptor::Utf8String | TypeDescriptor::DynamicBytes)
    }

    /// Check if this is an integer kind
    pub fn is_integer(&self) -> bool {
        matches!(self, TypeDescriptor::UnsignedInt(_) | TypeDescriptor::SignedInt(_))
    }

    /// Check if this is a fixed-point kind
    pub fn is_fixed_point(&self) -> bool {
        matches!(
            self,
            TypeDescriptor::UnsignedFixed(..) | TypeDescriptor::SignedFixed(..)
        )
    }

    /// Check the width invariants of this descriptor.
    ///
    /// Descriptors handed out by the registry always satisfy them; a
    /// hand-built descriptor may not.
    pub fn is_valid(&self) -> bool {
        match *self {
            TypeDescriptor::FixedBytes(width) => (1..=MAX_FIXED_BYTES).contains(&width),
            TypeDescriptor::UnsignedInt(bits) | TypeDescriptor::SignedInt(bits) => {
                is_legal_bits(bits)
            }
            TypeDescriptor::UnsignedFixed(m, n) | TypeDescriptor::SignedFixed(m, n) => {
                is_legal_bits(m) && is_legal_bits(n) && m + n == MAX_BITS
            }
            TypeDescriptor::Address
            | TypeDescriptor::Bool
            | TypeDescriptor::Utf8String
            | TypeDescriptor::DynamicBytes => true,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names() {
        assert_eq!(TypeDescriptor::Address.canonical_name(), "address");
        assert_eq!(TypeDescriptor::Utf8String.canonical_name(), "string");
        assert_eq!(TypeDescriptor::DynamicBytes.canonical_name(), "bytes");
        assert_eq!(TypeDescriptor::FixedBytes(32).canonical_name(), "bytes32");
        assert_eq!(TypeDescriptor::UnsignedInt(8).canonical_name(), "uint8");
        assert_eq!(TypeDescriptor::SignedInt(256).canonical_name(), "int256");
        assert_eq!(TypeDescriptor::UnsignedFixed(8, 248).to_string(), "ufixed8x248");
        assert_eq!(TypeDescriptor::SignedFixed(128, 128).to_string(), "fixed128x128");
    }

    #[test]
    fn test_is_dynamic() {
        assert!(!TypeDescriptor::Address.is_dynamic());
        assert!(!TypeDescriptor::UnsignedInt(256).is_dynamic());
        assert!(!TypeDescriptor::Bool.is_dynamic());
        assert!(!TypeDescriptor::FixedBytes(32).is_dynamic());

        assert!(TypeDescriptor::DynamicBytes.is_dynamic());
        assert!(TypeDescriptor::Utf8String.is_dynamic());
    }

    #[test]
    fn test_is_valid() {
        assert!(TypeDescriptor::FixedBytes(1).is_valid());
        assert!(TypeDescriptor::FixedBytes(32).is_valid());
        assert!(!TypeDescriptor::FixedBytes(0).is_valid());
        assert!(!TypeDescriptor::FixedBytes(33).is_valid());

        assert!(TypeDescriptor::UnsignedInt(8).is_valid());
        assert!(!TypeDescriptor::UnsignedInt(7).is_valid());
        assert!(!TypeDescriptor::SignedInt(264).is_valid());
        assert!(!TypeDescriptor::SignedInt(0).is_valid());

        assert!(TypeDescriptor::UnsignedFixed(8, 248).is_valid());
        assert!(!TypeDescriptor::UnsignedFixed(8, 240).is_valid());
        assert!(!TypeDescriptor::SignedFixed(0, 256).is_valid());
    }

    #[test]
    fn test_legal_bits() {
        assert!(is_legal_bits(8));
        assert!(is_legal_bits(256));
        assert!(!is_legal_bits(12));
        assert!(!is_legal_bits(264));
    }
}
