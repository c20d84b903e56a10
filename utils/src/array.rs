//! Array and shape helpers.

use std::str::FromStr;

use crate::error::UtilError;

/// Splits `items` into chunks of exactly `size` elements.
///
/// # Errors
///
/// Returns [`UtilError::InvalidChunkSize`] if `size` is zero and
/// [`UtilError::IndivisibleLength`] if `items.len()` is not a multiple of
/// `size`.
pub fn chunk_array<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>, UtilError> {
    if size == 0 {
        return Err(UtilError::InvalidChunkSize);
    }
    if items.len() % size != 0 {
        return Err(UtilError::IndivisibleLength);
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

/// How [`reduce_values`] folds its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReductionMode {
    /// Add every value, starting from 0.
    Sum,
    /// Multiply every value, starting from 1.
    Product,
}

impl FromStr for ReductionMode {
    type Err = UtilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sum" => Ok(ReductionMode::Sum),
            "product" => Ok(ReductionMode::Product),
            other => Err(UtilError::UnknownMode(other.to_owned())),
        }
    }
}

/// Sums or multiplies `values`.
///
/// # Errors
///
/// Returns [`UtilError::EmptyValues`] for an empty slice and
/// [`UtilError::NonFiniteValues`] if any value is NaN or infinite.
pub fn reduce_values(values: &[f64], mode: ReductionMode) -> Result<f64, UtilError> {
    if values.is_empty() {
        return Err(UtilError::EmptyValues);
    }
    if !values.iter().all(|v| v.is_finite()) {
        return Err(UtilError::NonFiniteValues);
    }
    Ok(match mode {
        ReductionMode::Sum => values.iter().sum(),
        ReductionMode::Product => values.iter().product(),
    })
}

/// Total number of elements in a shape.
///
/// # Errors
///
/// Returns [`UtilError::EmptyShape`] for an empty shape,
/// [`UtilError::InvalidShapeValue`] if any dimension is not positive and
/// [`UtilError::ShapeOverflow`] if the product does not fit in `u64`.
pub fn compute_shape_length(shape: &[i64]) -> Result<u64, UtilError> {
    if shape.is_empty() {
        return Err(UtilError::EmptyShape);
    }
    shape.iter().try_fold(1u64, |acc, &dim| {
        let dim = u64::try_from(dim)
            .ok()
            .filter(|d| *d > 0)
            .ok_or(UtilError::InvalidShapeValue)?;
        acc.checked_mul(dim).ok_or(UtilError::ShapeOverflow)
    })
}

/// True if both shapes hold the same number of elements.
///
/// # Errors
///
/// Propagates any error from [`compute_shape_length`] on either shape.
pub fn are_shapes_compatible(a: &[i64], b: &[i64]) -> Result<bool, UtilError> {
    Ok(compute_shape_length(a)? == compute_shape_length(b)?)
}

/// Shifts `indexes` so that the smallest becomes zero.
///
/// # Errors
///
/// Returns [`UtilError::EmptyIndexes`] for an empty slice.
pub fn normalize_indexes(indexes: &[i64]) -> Result<Vec<u64>, UtilError> {
    let min = indexes.iter().copied().min().ok_or(UtilError::EmptyIndexes)?;
    // i - min lies in 0..=u64::MAX for any pair of i64.
    Ok(indexes
        .iter()
        .map(|&i| i.abs_diff(min))
        .collect())
}

/// Orders a two-element range as `[min, max]`.
///
/// # Errors
///
/// Returns [`UtilError::InvalidRangeLength`] unless exactly two values are
/// given and [`UtilError::NonFiniteRange`] if either is NaN or infinite.
pub fn normalize_range(range: &[f64]) -> Result<[f64; 2], UtilError> {
    let &[a, b] = range else {
        return Err(UtilError::InvalidRangeLength);
    };
    if !a.is_finite() || !b.is_finite() {
        return Err(UtilError::NonFiniteRange);
    }
    Ok(if a <= b { [a, b] } else { [b, a] })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_array_splits_evenly() {
        assert_eq!(
            chunk_array(&[1, 2, 3, 4, 5, 6], 3),
            Ok(vec![vec![1, 2, 3], vec![4, 5, 6]])
        );
        assert_eq!(chunk_array::<i32>(&[], 2), Ok(vec![]));
    }

    #[test]
    fn chunk_array_rejects_bad_sizes() {
        assert_eq!(chunk_array(&[1, 2], 0), Err(UtilError::InvalidChunkSize));
        assert_eq!(chunk_array(&[1, 2, 3], 2), Err(UtilError::IndivisibleLength));
        assert_eq!(
            UtilError::IndivisibleLength.to_string(),
            "Array length must be divisible by chunk size"
        );
    }

    #[test]
    fn reduce_values_sum_and_product() {
        assert_eq!(reduce_values(&[1.0, 2.0, 3.0], ReductionMode::Sum), Ok(6.0));
        assert_eq!(reduce_values(&[2.0, 3.0, 4.0], ReductionMode::Product), Ok(24.0));
    }

    #[test]
    fn reduce_values_validates_input() {
        assert_eq!(reduce_values(&[], ReductionMode::Sum), Err(UtilError::EmptyValues));
        assert_eq!(
            reduce_values(&[1.0, f64::NAN], ReductionMode::Sum),
            Err(UtilError::NonFiniteValues)
        );
        assert_eq!(
            "mean".parse::<ReductionMode>(),
            Err(UtilError::UnknownMode("mean".into()))
        );
        assert_eq!(
            UtilError::UnknownMode("mean".into()).to_string(),
            "Unknown reduction mode: mean"
        );
        assert_eq!("product".parse::<ReductionMode>(), Ok(ReductionMode::Product));
    }

    #[test]
    fn shape_length_and_compatibility() {
        assert_eq!(compute_shape_length(&[2, 3, 4]), Ok(24));
        assert_eq!(compute_shape_length(&[]), Err(UtilError::EmptyShape));
        assert_eq!(compute_shape_length(&[2, 0]), Err(UtilError::InvalidShapeValue));
        assert_eq!(compute_shape_length(&[2, -3]), Err(UtilError::InvalidShapeValue));
        assert_eq!(
            compute_shape_length(&[i64::MAX, i64::MAX, 4]),
            Err(UtilError::ShapeOverflow)
        );
        assert_eq!(are_shapes_compatible(&[2, 6], &[3, 4]), Ok(true));
        assert_eq!(are_shapes_compatible(&[2, 6], &[3, 3]), Ok(false));
        assert_eq!(are_shapes_compatible(&[2], &[]), Err(UtilError::EmptyShape));
    }

    #[test]
    fn indexes_shift_to_zero() {
        assert_eq!(normalize_indexes(&[3, 5, 4]), Ok(vec![0, 2, 1]));
        assert_eq!(normalize_indexes(&[-2, 0]), Ok(vec![0, 2]));
        assert_eq!(normalize_indexes(&[i64::MIN, i64::MAX]), Ok(vec![0, u64::MAX]));
        assert_eq!(normalize_indexes(&[]), Err(UtilError::EmptyIndexes));
    }

    #[test]
    fn range_is_ordered() {
        assert_eq!(normalize_range(&[5.0, 1.0]), Ok([1.0, 5.0]));
        assert_eq!(normalize_range(&[1.0, 1.0]), Ok([1.0, 1.0]));
        assert_eq!(normalize_range(&[1.0]), Err(UtilError::InvalidRangeLength));
        assert_eq!(normalize_range(&[1.0, 2.0, 3.0]), Err(UtilError::InvalidRangeLength));
        assert_eq!(
            normalize_range(&[1.0, f64::INFINITY]),
            Err(UtilError::NonFiniteRange)
        );
    }
}
