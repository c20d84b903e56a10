//! Fractions.

use crate::model::Marker;
use crate::types::TypeDefinition;

/// Returns the fraction definition.
#[must_use]
pub fn definitions() -> Vec<TypeDefinition> {
    vec![TypeDefinition {
        name: "Fraction",
        comment: "An exact rational number held as numerator and denominator.",
        parent: None,
        markers: &[Marker::Fraction],
        statics: &[],
    }]
}
