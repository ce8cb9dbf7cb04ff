//! The rendering abstraction the painter draws through.
//!
//! `Surface` is the only seam between event-handling logic and pixels. The
//! production implementation is [`crate::render::Canvas2dSurface`]; tests use
//! a recording implementation so stroke logic is verified by inspecting
//! draw-call parameters instead of pixels.

use crate::geom::Point;

/// An immediate-mode raster target. Mutated by draw calls, never read back.
pub trait Surface {
    /// Error produced by a failed draw call. `JsValue` for the browser
    /// canvas; infallible implementations use an uninhabited type.
    type Error;

    /// Fill a disc of `radius` pixels centered at `center`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the underlying draw call fails.
    fn fill_disc(&mut self, center: Point, radius: f64, color: &str) -> Result<(), Self::Error>;

    /// Stroke a straight segment from `from` to `to`, `width` pixels wide.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the underlying draw call fails.
    fn stroke_segment(
        &mut self,
        from: Point,
        to: Point,
        width: f64,
        color: &str,
    ) -> Result<(), Self::Error>;

    /// Erase the full surface extent back to its blank state.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the underlying clear call fails.
    fn clear(&mut self) -> Result<(), Self::Error>;
}
