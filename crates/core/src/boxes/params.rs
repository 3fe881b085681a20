//! Merge parameters.
//!
//! Contains MergeParams, the tolerances used by
//! [`LayoutBox::is_connected_to`](super::LayoutBox::is_connected_to).

use super::item::LayoutBox;

/// Default gap, in page units, allowed between two adjacent fragments.
pub const DEFAULT_ADJACENCY_TOLERANCE: f64 = 0.5;

/// Gap allowed after a fragment ending in `(`.
///
/// Some producers place the token after an opening parenthesis well past the
/// glyph advance; this wider gap is applied only in that case.
pub const DEFAULT_OPEN_PAREN_TOLERANCE: f64 = 10.0;

/// Parameters for merging text fragments into runs.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeParams {
    /// Largest (exclusive) distance between one fragment's right edge and the
    /// next fragment's left edge.
    pub tolerance: f64,

    /// Replaces `tolerance` when the left fragment's text ends with `(`.
    pub open_paren_tolerance: f64,
}

impl Default for MergeParams {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_ADJACENCY_TOLERANCE,
            open_paren_tolerance: DEFAULT_OPEN_PAREN_TOLERANCE,
        }
    }
}

impl MergeParams {
    /// Gap allowed after `item`, which depends on its trailing character.
    pub fn adjacency_tolerance(&self, item: &LayoutBox) -> f64 {
        if item.text.ends_with('(') {
            self.open_paren_tolerance
        } else {
            self.tolerance
        }
    }
}

/// Gap allowed after `item` under the default parameters: 10 when its text
/// ends with `(`, 0.5 otherwise.
pub fn adjacency_tolerance(item: &LayoutBox) -> f64 {
    MergeParams::default().adjacency_tolerance(item)
}
