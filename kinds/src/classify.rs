//! Variant predicates.
//!
//! `is_number`, `is_string` and `is_array` test the representation directly.
//! Every other predicate asks the value's type descriptor whether it declares
//! the matching marker (see [`crate::marker`]). All predicates are total.

use crate::marker::{has_instance_flag, has_own_marker, static_predicate_holds, DECIMAL_STATIC};
use crate::model::{Marker, Value};

/// True for primitive numbers, including `NaN` and the infinities.
#[must_use]
pub fn is_number(x: &Value) -> bool {
    matches!(x, Value::Number(_))
}

/// True for arbitrary-precision numbers.
///
/// Besides the `isBigNumber` marker, a descriptor may expose a static
/// `isDecimal` predicate that accepts the value. No other variant has an
/// alternate recognition path.
#[must_use]
pub fn is_big_number(x: &Value) -> bool {
    has_own_marker(x, Marker::BigNumber) || static_predicate_holds(x, DECIMAL_STATIC)
}

/// True for complex numbers.
#[must_use]
pub fn is_complex(x: &Value) -> bool {
    has_own_marker(x, Marker::Complex)
}

/// True for fractions.
#[must_use]
pub fn is_fraction(x: &Value) -> bool {
    has_own_marker(x, Marker::Fraction)
}

/// True for units.
#[must_use]
pub fn is_unit(x: &Value) -> bool {
    has_own_marker(x, Marker::Unit)
}

/// True for primitive text. Boxed strings are not strings.
#[must_use]
pub fn is_string(x: &Value) -> bool {
    matches!(x, Value::Str(_))
}

/// True for native arrays only; array-like objects do not count.
#[must_use]
pub fn is_array(x: &Value) -> bool {
    matches!(x, Value::Array(_))
}

/// True for any matrix.
#[must_use]
pub fn is_matrix(x: &Value) -> bool {
    has_own_marker(x, Marker::Matrix)
}

/// True for dense matrices.
#[must_use]
pub fn is_dense_matrix(x: &Value) -> bool {
    is_refined_matrix(x, Marker::DenseMatrix)
}

/// True for sparse matrices.
#[must_use]
pub fn is_sparse_matrix(x: &Value) -> bool {
    is_refined_matrix(x, Marker::SparseMatrix)
}

/// True for arrays and matrices.
#[must_use]
pub fn is_collection(x: &Value) -> bool {
    is_array(x) || is_matrix(x)
}

// The Matrix marker must come from the descriptor. The refinement flag may
// be declared there or stamped on the instance by the constructor.
fn is_refined_matrix(x: &Value, refinement: Marker) -> bool {
    is_matrix(x) && (has_own_marker(x, refinement) || has_instance_flag(x, refinement.as_str()))
}

/// One recognized case of the value taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// Primitive number.
    Number,
    /// Arbitrary-precision number.
    BigNumber,
    /// Complex number.
    Complex,
    /// Fraction.
    Fraction,
    /// Unit.
    Unit,
    /// Primitive text.
    String,
    /// Native array.
    Array,
    /// Any matrix.
    Matrix,
    /// Dense matrix.
    DenseMatrix,
    /// Sparse matrix.
    SparseMatrix,
    /// Array or matrix.
    Collection,
}

impl Variant {
    /// Every variant, in reporting order.
    pub const ALL: [Variant; 11] = [
        Variant::Number,
        Variant::BigNumber,
        Variant::Complex,
        Variant::Fraction,
        Variant::Unit,
        Variant::String,
        Variant::Array,
        Variant::Matrix,
        Variant::DenseMatrix,
        Variant::SparseMatrix,
        Variant::Collection,
    ];

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Variant::Number => "Number",
            Variant::BigNumber => "BigNumber",
            Variant::Complex => "Complex",
            Variant::Fraction => "Fraction",
            Variant::Unit => "Unit",
            Variant::String => "String",
            Variant::Array => "Array",
            Variant::Matrix => "Matrix",
            Variant::DenseMatrix => "DenseMatrix",
            Variant::SparseMatrix => "SparseMatrix",
            Variant::Collection => "Collection",
        }
    }

    /// The predicate for this variant.
    #[must_use]
    pub fn predicate(self) -> fn(&Value) -> bool {
        match self {
            Variant::Number => is_number,
            Variant::BigNumber => is_big_number,
            Variant::Complex => is_complex,
            Variant::Fraction => is_fraction,
            Variant::Unit => is_unit,
            Variant::String => is_string,
            Variant::Array => is_array,
            Variant::Matrix => is_matrix,
            Variant::DenseMatrix => is_dense_matrix,
            Variant::SparseMatrix => is_sparse_matrix,
            Variant::Collection => is_collection,
        }
    }

    /// Applies this variant's predicate.
    #[must_use]
    pub fn matches(self, x: &Value) -> bool {
        (self.predicate())(x)
    }
}

impl From<Marker> for Variant {
    fn from(marker: Marker) -> Self {
        match marker {
            Marker::BigNumber => Variant::BigNumber,
            Marker::Complex => Variant::Complex,
            Marker::Fraction => Variant::Fraction,
            Marker::Unit => Variant::Unit,
            Marker::Matrix => Variant::Matrix,
            Marker::DenseMatrix => Variant::DenseMatrix,
            Marker::SparseMatrix => Variant::SparseMatrix,
        }
    }
}

/// Every variant `x` belongs to, in [`Variant::ALL`] order.
#[must_use]
pub fn variants_of(x: &Value) -> Vec<Variant> {
    Variant::ALL.into_iter().filter(|v| v.matches(x)).collect()
}
