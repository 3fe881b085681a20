//! Boxes extracted from a page and the operations that rebuild structure
//! from them.
//!
//! - LayoutBox: a rectangle with optional text, class label and barycenter
//! - MergeParams: tolerances deciding when two text fragments join
//! - BoxList: ordered collection with bounds, filters and histograms
//! - LineSegment: per-axis (start, end, owner) spans for interval lookup

pub mod item;
pub mod list;
pub mod params;
pub mod segments;

pub use item::{EMPTY_BOX, LayoutBox, TEXT_LINE_HORIZONTAL};
pub use list::BoxList;
pub use params::{MergeParams, adjacency_tolerance};
pub use segments::LineSegment;
