//! BoxList - an ordered collection of boxes.
//!
//! Filters keep the input order and never mutate the input. Operations that
//! only need geometry work for any box kind `B: HasRect` and return the same
//! kind; operations that read text or class labels are defined on
//! `BoxList<LayoutBox>`.

use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;

use smol_str::SmolStr;
use tracing::{debug, trace};

use super::item::{LayoutBox, TEXT_LINE_HORIZONTAL};
use super::params::MergeParams;
use super::segments::LineSegment;
use crate::error::{GeometryError, Result};
use crate::histogram::Histogram;
use crate::rectangle::Edge;
use crate::utils::{HasRect, key_f64};

/// Horizontal and vertical spans, one of each per box, in list order.
pub type SegmentPair<'a, B> = (Vec<LineSegment<'a, B>>, Vec<LineSegment<'a, B>>);

#[derive(Debug, Clone, PartialEq)]
pub struct BoxList<B = LayoutBox> {
    items: Vec<B>,
}

impl<B> Default for BoxList<B> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<B> BoxList<B> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vec(items: Vec<B>) -> Self {
        Self { items }
    }

    pub fn push(&mut self, item: B) {
        self.items.push(item);
    }

    pub fn into_vec(self) -> Vec<B> {
        self.items
    }
}

impl<B: HasRect> BoxList<B> {
    /// One horizontal span `[left, right]` and one vertical span
    /// `[top, bottom]` per box, each pointing back at its box.
    pub fn line_segments(&self) -> SegmentPair<'_, B> {
        let horizontal = self
            .items
            .iter()
            .map(|b| LineSegment::new(b.left(), b.right(), b))
            .collect();
        let vertical = self
            .items
            .iter()
            .map(|b| LineSegment::new(b.top(), b.bottom(), b))
            .collect();
        (horizontal, vertical)
    }

    /// Tightest box enclosing every element.
    ///
    /// # Errors
    /// [`GeometryError::EmptyBoxList`] if the list has no elements.
    pub fn bounds(&self) -> Result<LayoutBox> {
        let mut iter = self.items.iter();
        let first = iter.next().ok_or(GeometryError::EmptyBoxList)?;
        let rect = iter.fold(first.rect(), |acc, item| acc.union(&item.rect()));
        Ok(LayoutBox::new(rect))
    }
}

impl<B: HasRect + Clone> BoxList<B> {
    /// The boxes lying entirely within `rect`, edges included.
    ///
    /// A box crossing the boundary is left out.
    pub fn inside<R: HasRect + ?Sized>(&self, rect: &R) -> Self {
        let bounds = rect.rect();
        self.items
            .iter()
            .filter(|item| bounds.contains(*item))
            .cloned()
            .collect()
    }
}

impl BoxList<LayoutBox> {
    /// Drops horizontal text lines whose text is blank. Boxes of any other
    /// class are kept whatever their text.
    ///
    /// Neighbouring boxes are not widened to cover what was removed, so the
    /// result can leave gaps in a line's geometry.
    pub fn purge_empty_text(&self) -> Self {
        let kept: Self = self
            .items
            .iter()
            .filter(|item| item.has_text() || item.classname() != Some(TEXT_LINE_HORIZONTAL))
            .cloned()
            .collect();
        trace!(removed = self.len() - kept.len(), "purged blank text lines");
        kept
    }

    /// The boxes whose class is one of `types`. An empty `types` applies no
    /// filter and borrows `self`.
    pub fn filter_by_type(&self, types: &[&str]) -> Cow<'_, Self> {
        if types.is_empty() {
            return Cow::Borrowed(self);
        }
        Cow::Owned(
            self.items
                .iter()
                .filter(|item| item.classname().is_some_and(|c| types.contains(&c)))
                .cloned()
                .collect(),
        )
    }

    /// Counts `direction(box)` over every box.
    pub fn histogram<F>(&self, direction: F) -> Histogram
    where
        F: Fn(&LayoutBox) -> f64,
    {
        self.items.iter().map(|item| key_f64(direction(item))).collect()
    }

    /// Counts one edge coordinate over every box.
    pub fn edge_histogram(&self, edge: Edge) -> Histogram {
        self.histogram(|item| edge.of(item))
    }

    /// How many boxes carry each class label.
    pub fn count(&self) -> Histogram<Option<SmolStr>> {
        self.items.iter().map(|item| item.classname.clone()).collect()
    }

    /// Joins runs of connected boxes left to right with default parameters.
    pub fn merge_connected(self) -> Self {
        self.merge_connected_with(&MergeParams::default())
    }

    /// Walks the boxes in order and folds each one into the previous merged
    /// box when that box [connects](LayoutBox::is_connected_to_with) to it.
    pub fn merge_connected_with(self, params: &MergeParams) -> Self {
        let input = self.items.len();
        let mut merged: Vec<LayoutBox> = Vec::with_capacity(input);
        for item in self.items {
            match merged.last_mut() {
                Some(last) if last.is_connected_to_with(&item, params) => {
                    trace!(left = %last.text, right = %item.text, "merging fragments");
                    last.extend(&item);
                }
                _ => merged.push(item),
            }
        }
        debug!(input, output = merged.len(), "merged connected boxes");
        Self::from_vec(merged)
    }
}

impl<B> Deref for BoxList<B> {
    type Target = [B];

    fn deref(&self) -> &[B] {
        &self.items
    }
}

impl<B> From<Vec<B>> for BoxList<B> {
    fn from(items: Vec<B>) -> Self {
        Self::from_vec(items)
    }
}

impl<B> FromIterator<B> for BoxList<B> {
    fn from_iter<I: IntoIterator<Item = B>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<B> Extend<B> for BoxList<B> {
    fn extend<I: IntoIterator<Item = B>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<B> IntoIterator for BoxList<B> {
    type Item = B;
    type IntoIter = std::vec::IntoIter<B>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, B> IntoIterator for &'a BoxList<B> {
    type Item = &'a B;
    type IntoIter = std::slice::Iter<'a, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<B> fmt::Display for BoxList<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoxList(len={})", self.items.len())
    }
}
