//! Error types for pdfgrid box geometry.

use thiserror::Error;

/// Errors raised when a caller breaks the contract of a geometry operation.
///
/// Degenerate geometry (inverted rectangles, negative widths) is never an
/// error; it is carried as an ordinary value such as [`Rectangle::EMPTY`].
///
/// [`Rectangle::EMPTY`]: crate::rectangle::Rectangle::EMPTY
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("cannot compute the bounds of an empty box list")]
    EmptyBoxList,

    #[error("rounding tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),
}

/// Convenience Result type alias for GeometryError.
pub type Result<T> = std::result::Result<T, GeometryError>;
