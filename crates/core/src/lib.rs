//! pdfgrid - box geometry primitives for PDF table detection.
//!
//! Models the axis-aligned boxes produced by a PDF layout pass (glyphs,
//! text lines, rects) and the operations used to rebuild structure from
//! them: clipping, merging adjacent text fragments, bounding extents,
//! containment and type filters, and edge histograms with tolerance-based
//! rounding for finding candidate table rulings.

pub mod boxes;
pub mod error;
pub mod histogram;
pub mod rectangle;
pub mod utils;

pub use boxes::{
    BoxList, EMPTY_BOX, LayoutBox, LineSegment, MergeParams, TEXT_LINE_HORIZONTAL,
    adjacency_tolerance,
};
pub use error::{GeometryError, Result};
pub use histogram::Histogram;
pub use rectangle::{Edge, Rectangle};
pub use utils::{FromRect, HasRect};
