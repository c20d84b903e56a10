//! Type registry: the set of descriptors known to a process.
//!
//! Built-in kinds are registered by [`TypeRegistry::builtin`]; independent
//! modules add their own with [`TypeRegistry::register`] or
//! [`TypeRegistry::define`]. Registration order is preserved.

use std::collections::HashMap;
use std::sync::Arc;

use crate::model::{Object, TypeDescriptor, Value};
use crate::types::TypeDefinition;

/// Errors raised while registering or instantiating types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A descriptor with this name is already registered.
    #[error("type `{0}` is already registered")]
    DuplicateType(String),
    /// No descriptor with this name is registered.
    #[error("type `{0}` is not registered")]
    UnknownType(String),
    /// A definition names a parent that is not registered yet.
    #[error("type `{name}` names unknown parent `{parent}`")]
    UnknownParent {
        /// The definition being registered.
        name: String,
        /// The missing parent.
        parent: String,
    },
}

/// Registered type descriptors, looked up by name.
#[derive(Debug)]
pub struct TypeRegistry {
    types: Vec<Arc<TypeDescriptor>>,
    index: HashMap<String, usize>,
}

impl TypeRegistry {
    /// Creates a registry holding only the shared `Object` descriptor.
    #[must_use]
    pub fn new() -> Self {
        let object = TypeDescriptor::object();
        let mut index = HashMap::new();
        index.insert(object.name().to_owned(), 0);
        Self {
            types: vec![object],
            index,
        }
    }

    /// Adds a descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateType`] if the name is taken.
    pub fn register(
        &mut self,
        descriptor: TypeDescriptor,
    ) -> Result<Arc<TypeDescriptor>, RegistryError> {
        let name = descriptor.name().to_owned();
        if self.index.contains_key(&name) {
            return Err(RegistryError::DuplicateType(name));
        }
        let descriptor = Arc::new(descriptor);
        tracing::debug!(
            type_name = %name,
            markers = ?descriptor.markers().collect::<Vec<_>>(),
            parent = descriptor.parent().map(|p| p.name()),
            "registered type descriptor"
        );
        self.index.insert(name, self.types.len());
        self.types.push(Arc::clone(&descriptor));
        Ok(descriptor)
    }

    /// Builds a descriptor from a static definition and registers it.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownParent`] if the definition's parent is
    /// not registered, or [`RegistryError::DuplicateType`] if the name is
    /// taken.
    pub fn define(&mut self, def: &TypeDefinition) -> Result<Arc<TypeDescriptor>, RegistryError> {
        let mut builder = TypeDescriptor::builder(def.name).comment(def.comment);
        if let Some(parent) = def.parent {
            let parent = self.get(parent).ok_or_else(|| RegistryError::UnknownParent {
                name: def.name.to_owned(),
                parent: parent.to_owned(),
            })?;
            builder = builder.parent(Arc::clone(parent));
        }
        for marker in def.markers {
            builder = builder.marker(*marker);
        }
        for (name, predicate) in def.statics {
            builder = builder.static_predicate(*name, *predicate);
        }
        self.register(builder.build())
    }

    /// Looks up a descriptor by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<TypeDescriptor>> {
        self.index.get(name).map(|&i| &self.types[i])
    }

    /// Returns true if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<TypeDescriptor>> {
        self.types.iter()
    }

    /// Number of registered descriptors, `Object` included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Always false: the `Object` descriptor is registered from the start.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Creates an instance of the registered type `name` with the given own
    /// properties.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownType`] if `name` is not registered.
    pub fn instantiate<I, K>(&self, name: &str, props: I) -> Result<Value, RegistryError>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let descriptor = self
            .get(name)
            .ok_or_else(|| RegistryError::UnknownType(name.to_owned()))?;
        let mut obj = Object::with_prototype(Arc::clone(descriptor));
        for (key, value) in props {
            obj.insert(key, value);
        }
        Ok(Value::Object(obj))
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::is_complex;
    use crate::model::Marker;

    #[test]
    fn new_registry_holds_object_descriptor() {
        let registry = TypeRegistry::new();
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(TypeDescriptor::OBJECT));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut registry = TypeRegistry::new();
        assert!(registry.register(TypeDescriptor::builder("Complex").build()).is_ok());
        assert_eq!(
            registry.register(TypeDescriptor::builder("Complex").build()).err(),
            Some(RegistryError::DuplicateType("Complex".into()))
        );
    }

    #[test]
    fn define_resolves_parent_by_name() {
        let mut registry = TypeRegistry::new();
        let orphan = TypeDefinition {
            name: "DenseMatrix",
            comment: "",
            parent: Some("Matrix"),
            markers: &[Marker::Matrix, Marker::DenseMatrix],
            statics: &[],
        };
        assert_eq!(
            registry.define(&orphan).err(),
            Some(RegistryError::UnknownParent {
                name: "DenseMatrix".into(),
                parent: "Matrix".into(),
            })
        );

        let matrix = TypeDefinition {
            name: "Matrix",
            comment: "",
            parent: None,
            markers: &[Marker::Matrix],
            statics: &[],
        };
        assert!(registry.define(&matrix).is_ok());
        let dense = registry.define(&orphan);
        assert_eq!(
            dense.ok().and_then(|d| d.parent().map(|p| p.name().to_owned())),
            Some("Matrix".to_owned())
        );
    }

    #[test]
    fn instantiate_links_the_descriptor() {
        let mut registry = TypeRegistry::new();
        let defined = registry.register(
            TypeDescriptor::builder("Complex")
                .marker(Marker::Complex)
                .build(),
        );
        assert!(defined.is_ok());
        let c = registry.instantiate("Complex", [("re", Value::from(1)), ("im", Value::from(2))]);
        assert!(matches!(&c, Ok(v) if is_complex(v)));
        assert_eq!(
            registry.instantiate("Quaternion", Vec::<(String, Value)>::new()).err(),
            Some(RegistryError::UnknownType("Quaternion".into()))
        );
    }
}
