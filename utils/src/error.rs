//! Error type for the array helpers.

/// Input rejected by one of the [`crate::array`] helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UtilError {
    /// Chunk size was zero.
    #[error("Chunk size must be a positive integer")]
    InvalidChunkSize,
    /// Input length is not a multiple of the chunk size.
    #[error("Array length must be divisible by chunk size")]
    IndivisibleLength,
    /// No values to reduce.
    #[error("Values must be a non-empty array")]
    EmptyValues,
    /// A value to reduce was NaN or infinite.
    #[error("Values must be finite numbers")]
    NonFiniteValues,
    /// Reduction mode was neither `sum` nor `product`.
    #[error("Unknown reduction mode: {0}")]
    UnknownMode(String),
    /// Shape had no dimensions.
    #[error("Shape must be a non-empty array")]
    EmptyShape,
    /// A dimension was zero or negative.
    #[error("Shape values must be positive integers")]
    InvalidShapeValue,
    /// The product of the dimensions does not fit in `u64`.
    #[error("Shape length overflows")]
    ShapeOverflow,
    /// No indexes to normalize.
    #[error("Indexes must be a non-empty array")]
    EmptyIndexes,
    /// Range did not have exactly two bounds.
    #[error("Range must be an array of two numbers")]
    InvalidRangeLength,
    /// A range bound was NaN or infinite.
    #[error("Range values must be finite numbers")]
    NonFiniteRange,
}
