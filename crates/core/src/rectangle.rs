//! Axis-aligned rectangle value type.
//!
//! Coordinates follow the source document: `x1`/`y1` are left/top and
//! `x2`/`y2` are right/bottom. Nothing forces `x1 <= x2` or `y1 <= y2`;
//! the [`Rectangle::EMPTY`] sentinel relies on that.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use crate::utils::{HasRect, KeyF64, Rect, key_f64};

/// Names the four rectangle fields in positional order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Top, Edge::Right, Edge::Bottom];

    /// Positional index: 0=left, 1=top, 2=right, 3=bottom.
    pub fn index(self) -> usize {
        match self {
            Edge::Left => 0,
            Edge::Top => 1,
            Edge::Right => 2,
            Edge::Bottom => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Reads this edge from any box-like value.
    pub fn of<R: HasRect + ?Sized>(self, item: &R) -> f64 {
        let rect = item.rect();
        rect[self]
    }
}

/// An axis-aligned rectangle: left, top, right, bottom.
#[derive(Clone, Copy, Debug)]
pub struct Rectangle {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rectangle {
    /// The rectangle with no area.
    ///
    /// Left and top sit at +inf, right and bottom at -inf, so intersecting
    /// it with anything gives it back. Every clip that inverts collapses to
    /// exactly this value.
    pub const EMPTY: Rectangle = Rectangle {
        x1: f64::INFINITY,
        y1: f64::INFINITY,
        x2: f64::NEG_INFINITY,
        y2: f64::NEG_INFINITY,
    };

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn left(&self) -> f64 {
        self.x1
    }

    pub fn top(&self) -> f64 {
        self.y1
    }

    pub fn right(&self) -> f64 {
        self.x2
    }

    pub fn bottom(&self) -> f64 {
        self.y2
    }

    /// Positional access; `None` past index 3.
    pub fn get(&self, index: usize) -> Option<f64> {
        Edge::from_index(index).map(|edge| self[edge])
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// Returns a copy with one field replaced.
    pub fn replace(self, edge: Edge, value: f64) -> Self {
        match edge {
            Edge::Left => Self { x1: value, ..self },
            Edge::Top => Self { y1: value, ..self },
            Edge::Right => Self { x2: value, ..self },
            Edge::Bottom => Self { y2: value, ..self },
        }
    }

    /// True if left is past right or top is past bottom.
    pub fn is_inverted(&self) -> bool {
        self.x1 > self.x2 || self.y1 > self.y2
    }

    /// True only for [`Rectangle::EMPTY`].
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Collapses any inverted rectangle to [`Rectangle::EMPTY`].
    pub fn normalized(self) -> Self {
        if self.is_inverted() { Self::EMPTY } else { self }
    }

    /// Intersection of two rectangles, or [`Rectangle::EMPTY`] when they do
    /// not meet. Rectangles sharing only an edge intersect in a zero-area
    /// rectangle, which is kept.
    pub fn intersect(&self, other: &Rectangle) -> Self {
        Self {
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
            x2: self.x2.min(other.x2),
            y2: self.y2.min(other.y2),
        }
        .normalized()
    }

    /// Intersects with each rectangle in order, stopping at the first empty
    /// result.
    pub fn clip<I>(self, rectangles: I) -> Self
    where
        I: IntoIterator<Item = Rectangle>,
    {
        let mut acc = self;
        for rectangle in rectangles {
            acc = acc.intersect(&rectangle);
            if acc.is_empty() {
                break;
            }
        }
        acc
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &Rectangle) -> Self {
        Self {
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
            x2: self.x2.max(other.x2),
            y2: self.y2.max(other.y2),
        }
    }

    /// Inclusive containment on all four edges.
    ///
    /// An inverted `other` is never contained.
    pub fn contains<R: HasRect + ?Sized>(&self, other: &R) -> bool {
        let o = other.rect();
        self.x1 <= o.x1
            && o.x1 <= o.x2
            && o.x2 <= self.x2
            && self.y1 <= o.y1
            && o.y1 <= o.y2
            && o.y2 <= self.y2
    }

    fn keys(&self) -> [KeyF64; 4] {
        [
            key_f64(self.x1),
            key_f64(self.y1),
            key_f64(self.x2),
            key_f64(self.y2),
        ]
    }
}

impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        self.keys() == other.keys()
    }
}

impl Eq for Rectangle {}

impl Hash for Rectangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.keys().hash(state);
    }
}

impl Index<Edge> for Rectangle {
    type Output = f64;

    fn index(&self, edge: Edge) -> &f64 {
        match edge {
            Edge::Left => &self.x1,
            Edge::Top => &self.y1,
            Edge::Right => &self.x2,
            Edge::Bottom => &self.y2,
        }
    }
}

/// Positional access: 0=left, 1=top, 2=right, 3=bottom.
///
/// # Panics
/// Panics if `index` is greater than 3. Use [`Rectangle::get`] for a
/// checked lookup.
impl Index<usize> for Rectangle {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match Edge::from_index(index) {
            Some(edge) => &self[edge],
            None => panic!("rectangle index out of range: {index}"),
        }
    }
}

impl From<Rect> for Rectangle {
    fn from(rect: Rect) -> Self {
        let (x1, y1, x2, y2) = rect;
        Self { x1, y1, x2, y2 }
    }
}

impl From<Rectangle> for Rect {
    fn from(rect: Rectangle) -> Self {
        (rect.x1, rect.y1, rect.x2, rect.y2)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rectangle(x1={:6.2} y1={:6.2} x2={:6.2} y2={:6.2})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}
