//! Per-axis spans handed to interval-overlap lookups.

/// A span along one axis, tagged with the box it came from.
#[derive(Debug, PartialEq)]
pub struct LineSegment<'a, B> {
    pub start: f64,
    pub end: f64,
    pub object: &'a B,
}

impl<B> Clone for LineSegment<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B> Copy for LineSegment<'_, B> {}

impl<'a, B> LineSegment<'a, B> {
    pub fn new(start: f64, end: f64, object: &'a B) -> Self {
        Self { start, end, object }
    }

    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// The (start, end, owner) triple.
    pub fn as_tuple(&self) -> (f64, f64, &'a B) {
        (self.start, self.end, self.object)
    }
}
