//! Arbitrary-precision numbers.
//!
//! `BigNumber` declares the marker. `Decimal` stands in for third-party
//! big-decimal types that identify their instances through a static
//! `isDecimal` predicate instead.

use crate::marker::DECIMAL_STATIC;
use crate::model::{Marker, Value};
use crate::types::TypeDefinition;

const DECIMAL_STATICS: &[(&str, fn(&Value) -> bool)] = &[(DECIMAL_STATIC, is_decimal)];

/// Returns the arbitrary-precision definitions.
#[must_use]
pub fn definitions() -> Vec<TypeDefinition> {
    vec![
        TypeDefinition {
            name: "BigNumber",
            comment: "An arbitrary-precision decimal number.",
            parent: None,
            markers: &[Marker::BigNumber],
            statics: &[],
        },
        TypeDefinition {
            name: "Decimal",
            comment: "A big-decimal number recognized through its static \
                      isDecimal predicate rather than a marker.",
            parent: None,
            markers: &[],
            statics: DECIMAL_STATICS,
        },
    ]
}

fn is_decimal(x: &Value) -> bool {
    x.is_instance_of("Decimal")
}
