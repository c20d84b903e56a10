//! Physical units.

use crate::model::Marker;
use crate::types::TypeDefinition;

/// Returns the unit definition.
#[must_use]
pub fn definitions() -> Vec<TypeDefinition> {
    vec![TypeDefinition {
        name: "Unit",
        comment: "A value paired with a physical unit, e.g. 5 cm.",
        parent: None,
        markers: &[Marker::Unit],
        statics: &[],
    }]
}
