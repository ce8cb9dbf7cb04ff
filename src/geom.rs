//! Geometry primitives.

/// A point in surface-local coordinates: pixels from the canvas padding edge,
/// as reported by the host's `offsetX` / `offsetY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
