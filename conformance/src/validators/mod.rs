//! Registry validators.

pub mod classification;
pub mod taxonomy;
