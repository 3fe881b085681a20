//! LayoutBox - a rectangle with the text and labels a layout pass attached.

use std::fmt;

use smol_str::SmolStr;

use super::params::MergeParams;
use crate::rectangle::{Edge, Rectangle};
use crate::utils::{FromRect, HasRect, Point, approx_eq};

/// Class label of a horizontal text line, as produced by pdfminer-style
/// layout analysis.
pub const TEXT_LINE_HORIZONTAL: &str = "LTTextLineHorizontal";

/// The box with no area. Clipping it against anything returns it again, and
/// every clip that leaves nothing returns a box equal to it.
pub static EMPTY_BOX: LayoutBox = LayoutBox::empty();

/// A box on the page.
///
/// Geometry is a [`Rectangle`]; `text`, `classname` and the barycenters are
/// filled in by whoever produced the box and are dropped by clipping.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutBox {
    rect: Rectangle,
    pub text: String,
    pub classname: Option<SmolStr>,
    pub barycenter: Option<Point>,
    /// Vertical centerline; fragments on the same text line share it exactly.
    pub barycenter_y: Option<f64>,
}

impl LayoutBox {
    pub const fn new(rect: Rectangle) -> Self {
        Self {
            rect,
            text: String::new(),
            classname: None,
            barycenter: None,
            barycenter_y: None,
        }
    }

    pub const fn empty() -> Self {
        Self::new(Rectangle::EMPTY)
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_classname(mut self, classname: impl Into<SmolStr>) -> Self {
        self.classname = Some(classname.into());
        self
    }

    pub fn with_barycenter(mut self, barycenter: Point) -> Self {
        self.barycenter = Some(barycenter);
        self
    }

    pub fn with_barycenter_y(mut self, barycenter_y: f64) -> Self {
        self.barycenter_y = Some(barycenter_y);
        self
    }

    /// True for a box equal to [`EMPTY_BOX`]'s geometry.
    pub fn is_empty(&self) -> bool {
        self.rect.is_empty()
    }

    /// True if the text has at least one non-whitespace character.
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub fn classname(&self) -> Option<&str> {
        self.classname.as_deref()
    }

    /// Whether `next` continues this box's text run to the right.
    ///
    /// Needs non-blank text on both boxes, identical `barycenter_y`, and this
    /// box's right edge within [`adjacency_tolerance`] of `next`'s left edge.
    /// The tolerance depends on this box's text only, so the relation is not
    /// symmetric.
    ///
    /// [`adjacency_tolerance`]: super::params::adjacency_tolerance
    pub fn is_connected_to(&self, next: &LayoutBox) -> bool {
        self.is_connected_to_with(next, &MergeParams::default())
    }

    pub fn is_connected_to_with(&self, next: &LayoutBox, params: &MergeParams) -> bool {
        // Whitespace never joins a word.
        if !self.has_text() || !next.has_text() {
            return false;
        }

        let shared_barycenter = self.barycenter_y == next.barycenter_y;
        let shared_boundary = approx_eq(
            self.right(),
            next.left(),
            params.adjacency_tolerance(self),
        );

        shared_barycenter && shared_boundary
    }

    /// Absorbs `next` into this box: appends its text and moves the right
    /// edge to `next.right()`. Call only after [`is_connected_to`] holds.
    ///
    /// [`is_connected_to`]: LayoutBox::is_connected_to
    pub fn extend(&mut self, next: &LayoutBox) {
        self.text.push_str(&next.text);
        self.rect = self.rect.replace(Edge::Right, next.right());
    }
}

impl HasRect for LayoutBox {
    fn rect(&self) -> Rectangle {
        self.rect
    }
}

impl FromRect for LayoutBox {
    fn from_rect(rect: Rectangle) -> Self {
        Self::new(rect)
    }
}

impl From<Rectangle> for LayoutBox {
    fn from(rect: Rectangle) -> Self {
        Self::new(rect)
    }
}

impl fmt::Display for LayoutBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "<Box rect=empty>");
        }
        let text = format!("{:?}", self.text);
        write!(f, "<Box rect={} text={:<5}>", self.rect, text)
    }
}
