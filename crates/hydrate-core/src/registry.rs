//! Type descriptor lookup.

use crate::{Error, Result, TypeDescriptor};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Source of type descriptors, keyed by type name.
pub trait DescriptorProvider: Send + Sync {
    /// Descriptor registered under `name`.
    fn descriptor(&self, name: &str) -> Option<Arc<TypeDescriptor>>;

    /// Names of all known types, sorted.
    fn type_names(&self) -> Vec<String>;

    /// Descriptor registered under `name`, or [`Error::UnknownType`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownType`] if no descriptor is registered under `name`.
    fn require(&self, name: &str) -> Result<Arc<TypeDescriptor>> {
        self.descriptor(name)
            .ok_or_else(|| Error::unknown_type(name))
    }
}

/// In-memory [`DescriptorProvider`].
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    descriptors: BTreeMap<String, Arc<TypeDescriptor>>,
}

impl TypeRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor under its own name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateType`] if the name is already taken.
    pub fn register(&mut self, descriptor: TypeDescriptor) -> Result<Arc<TypeDescriptor>> {
        let name = descriptor.name().to_string();
        if self.descriptors.contains_key(&name) {
            return Err(Error::DuplicateType { type_name: name });
        }
        let descriptor = Arc::new(descriptor);
        self.descriptors.insert(name, Arc::clone(&descriptor));
        Ok(descriptor)
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Registered descriptors, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<TypeDescriptor>> {
        self.descriptors.values()
    }
}

impl DescriptorProvider for TypeRegistry {
    fn descriptor(&self, name: &str) -> Option<Arc<TypeDescriptor>> {
        self.descriptors.get(name).cloned()
    }

    fn type_names(&self) -> Vec<String> {
        self.descriptors.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MutabilityClass;

    fn descriptor(name: &str) -> TypeDescriptor {
        TypeDescriptor::builder(name)
            .property("Full", MutabilityClass::PublicSet)
            .parameterless_constructor()
            .build()
            .unwrap()
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = TypeRegistry::new();
        registry.register(descriptor("B")).unwrap();
        registry.register(descriptor("A")).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.type_names(), ["A", "B"]);
        assert_eq!(registry.descriptor("A").unwrap().name(), "A");
        assert!(registry.descriptor("C").is_none());
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = TypeRegistry::new();
        registry.register(descriptor("A")).unwrap();
        let err = registry.register(descriptor("A")).unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateType {
                type_name: "A".to_string()
            }
        );
    }

    #[test]
    fn test_require_unknown_type() {
        let registry = TypeRegistry::new();
        let err = registry.require("Missing").unwrap_err();
        assert!(matches!(err, Error::UnknownType { type_name } if type_name == "Missing"));
    }
}
