//! Complex numbers.

use crate::model::Marker;
use crate::types::TypeDefinition;

/// Returns the complex number definition.
#[must_use]
pub fn definitions() -> Vec<TypeDefinition> {
    vec![TypeDefinition {
        name: "Complex",
        comment: "A complex number with real and imaginary parts.",
        parent: None,
        markers: &[Marker::Complex],
        statics: &[],
    }]
}
