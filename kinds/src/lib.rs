//! Marker-based runtime classification for numeric value kinds.
//!
//! Value kinds (big numbers, complex numbers, fractions, units, matrices)
//! can be defined by independent modules without sharing a base type. A
//! kind is recognized by a capability marker its type descriptor declares
//! about itself, never by a flag found on the instance.
//!
//! # Entry Point
//!
//! ```
//! use mathkind::{classify, TypeRegistry, Value};
//!
//! let registry = TypeRegistry::builtin();
//! let z = registry
//!     .instantiate("Complex", [("re", Value::from(1)), ("im", Value::from(2))])
//!     .unwrap_or_default();
//! assert!(classify::is_complex(&z));
//! assert!(!classify::is_number(&z));
//! ```
//!
//! # Third-party types
//!
//! ```
//! use mathkind::{classify, Marker, Object, TypeDescriptor, TypeRegistry, Value};
//!
//! let mut registry = TypeRegistry::new();
//! let quaternion = registry
//!     .register(TypeDescriptor::builder("Quaternion").marker(Marker::Complex).build())
//!     .map(|d| Value::from(Object::with_prototype(d)))
//!     .unwrap_or_default();
//! assert!(classify::is_complex(&quaternion));
//!
//! // A flag on the instance does not make a complex number.
//! let forged = Value::from(Object::plain().with("isComplex", true));
//! assert!(!classify::is_complex(&forged));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod classify;
pub mod marker;
pub mod model;
pub mod registry;
#[cfg(feature = "serializers")]
pub mod serializer;
pub mod types;

pub use classify::Variant;
pub use marker::{has_own_marker, DECIMAL_STATIC};
pub use model::{
    Boxed, Marker, NativeFn, Object, StaticPredicate, TypeDescriptor, TypeDescriptorBuilder, Value,
};
pub use registry::{RegistryError, TypeRegistry};
pub use types::TypeDefinition;

impl TypeRegistry {
    /// Returns the process-wide registry holding every built-in type.
    ///
    /// Registration order follows [`types::all`]: BigNumber, Decimal,
    /// Complex, Fraction, Unit, Matrix, DenseMatrix, SparseMatrix.
    #[must_use]
    pub fn builtin() -> &'static TypeRegistry {
        static BUILTIN: std::sync::OnceLock<TypeRegistry> = std::sync::OnceLock::new();
        BUILTIN.get_or_init(|| {
            let mut registry = TypeRegistry::new();
            for def in types::all() {
                if let Err(err) = registry.define(&def) {
                    tracing::error!(type_name = def.name, %err, "built-in type rejected");
                }
            }
            registry
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_type_count() {
        // Object + 8 built-in kinds.
        assert_eq!(TypeRegistry::builtin().len(), 9);
    }

    #[test]
    fn builtin_names_unique() {
        let mut names = std::collections::HashSet::new();
        for def in types::all() {
            assert!(names.insert(def.name), "Duplicate type name: {}", def.name);
        }
    }

    #[test]
    fn refinements_declare_matrix() {
        for descriptor in TypeRegistry::builtin().iter() {
            if descriptor.markers().any(Marker::is_refinement) {
                assert!(
                    descriptor.declares(Marker::Matrix),
                    "{} refines Matrix without declaring it",
                    descriptor.name()
                );
            }
        }
    }

    #[test]
    fn builtin_is_shared() {
        assert!(std::ptr::eq(TypeRegistry::builtin(), TypeRegistry::builtin()));
    }
}
