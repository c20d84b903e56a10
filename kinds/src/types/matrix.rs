//! Matrices.
//!
//! `Matrix` is the supertype. The dense and sparse refinements point at it
//! as their parent, but still declare the Matrix marker themselves: markers
//! are read from a value's own descriptor only, never inherited.

use crate::model::Marker;
use crate::types::TypeDefinition;

/// Returns the matrix definitions, supertype first.
#[must_use]
pub fn definitions() -> Vec<TypeDefinition> {
    vec![
        TypeDefinition {
            name: "Matrix",
            comment: "Any two-or-more dimensional matrix.",
            parent: None,
            markers: &[Marker::Matrix],
            statics: &[],
        },
        TypeDefinition {
            name: "DenseMatrix",
            comment: "A matrix storing every element in a nested array.",
            parent: Some("Matrix"),
            markers: &[Marker::Matrix, Marker::DenseMatrix],
            statics: &[],
        },
        TypeDefinition {
            name: "SparseMatrix",
            comment: "A matrix storing only non-zero elements in compressed \
                      column form.",
            parent: Some("Matrix"),
            markers: &[Marker::Matrix, Marker::SparseMatrix],
            statics: &[],
        },
    ]
}
