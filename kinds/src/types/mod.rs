//! Built-in type definitions.
//!
//! Each sub-module declares one family of value kinds as static data. The
//! modules are listed in registration order; parents precede the types that
//! refine them. See [`crate::TypeRegistry::builtin`] for assembly.

use crate::model::{Marker, Value};

pub mod bignumber;
pub mod complex;
pub mod fraction;
pub mod matrix;
pub mod unit;

/// A static type definition, turned into a descriptor at registration.
#[derive(Debug, Clone)]
pub struct TypeDefinition {
    /// Type name, unique within a registry.
    pub name: &'static str,
    /// Description.
    pub comment: &'static str,
    /// Name of the parent type, which must be registered first.
    pub parent: Option<&'static str>,
    /// Markers the descriptor declares as its own members.
    pub markers: &'static [Marker],
    /// Static predicates, by name.
    pub statics: &'static [(&'static str, fn(&Value) -> bool)],
}

/// Every built-in definition, in registration order.
#[must_use]
pub fn all() -> Vec<TypeDefinition> {
    let mut defs = Vec::new();
    defs.extend(bignumber::definitions());
    defs.extend(complex::definitions());
    defs.extend(fraction::definitions());
    defs.extend(unit::definitions());
    defs.extend(matrix::definitions());
    defs
}
