//! Helpers that sit next to the classifier but do not depend on it.
//!
//! - [`array`]: chunking, reduction, shape and index/range normalization.
//!   These validate eagerly and return a [`UtilError`] with a descriptive
//!   message on bad input.
//! - [`validate`]: one-off boolean checks over [`mathkind::Value`] (range
//!   objects, help text, result sets, ...). These never fail.
//!
//! ```
//! use mathkind_utils::array::{chunk_array, normalize_range};
//!
//! assert_eq!(chunk_array(&[1, 2, 3, 4], 2).ok(), Some(vec![vec![1, 2], vec![3, 4]]));
//! assert_eq!(normalize_range(&[5.0, 1.0]).ok(), Some([1.0, 5.0]));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod array;
pub mod error;
pub mod validate;

pub use error::UtilError;
