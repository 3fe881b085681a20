//! Shared geometric aliases and traits.
//!
//! Provides:
//! - Tuple aliases (Point, Rect) used at the boundary with layout producers
//! - Ordered float keys for hashing page coordinates
//! - Tolerance helpers (approx_eq, round_to)
//! - HasRect / FromRect traits implemented by every box kind

use ordered_float::OrderedFloat;

use crate::rectangle::Rectangle;

/// A 2D point (x, y).
pub type Point = (f64, f64);

/// A rectangle as a bare (x1, y1, x2, y2) tuple: left, top, right, bottom.
pub type Rect = (f64, f64, f64, f64);

/// Hashable key for page coordinates.
pub type KeyF64 = OrderedFloat<f64>;

pub fn key_f64(v: f64) -> KeyF64 {
    OrderedFloat(v)
}

/// Compares two floats for approximate equality.
///
/// The comparison is strict: values exactly `epsilon` apart are not equal.
#[inline]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Snaps `value` to the nearest multiple of `tolerance`.
///
/// Halfway cases round away from zero. `tolerance` must be non-zero; callers
/// validate it (see [`Histogram::rounded`](crate::histogram::Histogram::rounded)).
#[inline]
pub fn round_to(value: f64, tolerance: f64) -> f64 {
    (value / tolerance).round() * tolerance
}

/// Trait for objects that occupy an axis-aligned rectangle.
pub trait HasRect {
    fn rect(&self) -> Rectangle;

    fn left(&self) -> f64 {
        self.rect().x1
    }

    fn top(&self) -> f64 {
        self.rect().y1
    }

    fn right(&self) -> f64 {
        self.rect().x2
    }

    fn bottom(&self) -> f64 {
        self.rect().y2
    }

    fn center_x(&self) -> f64 {
        (self.left() + self.right()) / 2.0
    }

    fn center_y(&self) -> f64 {
        (self.bottom() + self.top()) / 2.0
    }

    /// `right - left`. Negative for malformed input; never clamped.
    fn width(&self) -> f64 {
        self.right() - self.left()
    }

    /// `bottom - top`. Negative for malformed input; never clamped.
    fn height(&self) -> f64 {
        self.bottom() - self.top()
    }
}

/// Box kinds that can be rebuilt from a bare rectangle.
///
/// This is the factory that lets geometry-producing operations return the
/// same kind they were called on.
pub trait FromRect: HasRect + Sized {
    fn from_rect(rect: Rectangle) -> Self;

    /// Intersects this box with every rectangle in turn.
    ///
    /// Stops at the first empty intersection and returns a box built from
    /// [`Rectangle::EMPTY`]. The result carries geometry only.
    fn clip<I>(&self, rectangles: I) -> Self
    where
        I: IntoIterator<Item = Rectangle>,
    {
        Self::from_rect(self.rect().clip(rectangles))
    }
}

impl HasRect for Rectangle {
    fn rect(&self) -> Rectangle {
        *self
    }
}

impl FromRect for Rectangle {
    fn from_rect(rect: Rectangle) -> Self {
        rect
    }
}

impl<T: HasRect + ?Sized> HasRect for &T {
    fn rect(&self) -> Rectangle {
        (**self).rect()
    }
}
