//! Process-wide table of canonical type names

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{AbiError, Result};
use crate::types::{TypeDescriptor, BITS_STEP, MAX_BITS, MAX_FIXED_BYTES};

/// Immutable mapping from canonical type name to descriptor.
///
/// The table is dense: every name of the closed grammar is enumerated once
/// at construction and lookups never compute widths.
#[derive(Debug)]
pub struct TypeRegistry {
    descriptors: Vec<TypeDescriptor>,
    by_name: HashMap<String, usize>,
}

static REGISTRY: OnceLock<TypeRegistry> = OnceLock::new();

impl TypeRegistry {
    /// Build a registry holding every legal scalar type
    pub fn new() -> Self {
        let mut descriptors = vec![
            TypeDescriptor::Address,
            TypeDescriptor::Bool,
            TypeDescriptor::Utf8String,
            TypeDescriptor::DynamicBytes,
        ];

        for bits in (BITS_STEP..=MAX_BITS).step_by(BITS_STEP) {
            descriptors.push(TypeDescriptor::UnsignedInt(bits));
            descriptors.push(TypeDescriptor::SignedInt(bits));
        }

        for int_bits in (BITS_STEP..MAX_BITS).step_by(BITS_STEP) {
            let frac_bits = MAX_BITS - int_bits;
            descriptors.push(TypeDescriptor::UnsignedFixed(int_bits, frac_bits));
            descriptors.push(TypeDescriptor::SignedFixed(int_bits, frac_bits));
        }

        for width in 1..=MAX_FIXED_BYTES {
            descriptors.push(TypeDescriptor::FixedBytes(width));
        }

        let by_name = descriptors
            .iter()
            .enumerate()
            .map(|(index, descriptor)| (descriptor.canonical_name(), index))
            .collect();

        tracing::debug!("Type registry built with {} entries", descriptors.len());

        Self {
            descriptors,
            by_name,
        }
    }

    /// Shared registry, built on first use
    pub fn global() -> &'static TypeRegistry {
        REGISTRY.get_or_init(TypeRegistry::new)
    }

    /// Resolve a canonical name to its descriptor
    pub fn resolve_scalar(&self, name: &str) -> Result<&TypeDescriptor> {
        self.get(name).ok_or_else(|| AbiError::unsupported(name))
    }

    /// Look up a canonical name
    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.by_name.get(name).map(|&index| &self.descriptors[index])
    }

    /// Check whether a name is part of the grammar
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Every descriptor, in table order
    pub fn descriptors(&self) -> &[TypeDescriptor] {
        &self.descriptors
    }

    /// Every canonical name, in table order
    pub fn names(&self) -> impl Iterator<Item = String> + '_ {
        self.descriptors.iter().map(TypeDescriptor::canonical_name)
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Always false; the grammar is never empty
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a canonical scalar name against the shared registry
pub fn resolve_scalar(name: &str) -> Result<&'static TypeDescriptor> {
    TypeRegistry::global().resolve_scalar(name)
}
