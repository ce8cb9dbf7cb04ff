//! The stroke painter: turns pointer samples and control inputs into draw
//! calls and brush mutations.
//!
//! `PainterCore` holds all logic that doesn't depend on the browser, so the
//! full event contract is unit-testable natively. The wasm-facing wrapper in
//! [`crate::widget`] binds it to a real canvas element.

#[cfg(test)]
#[path = "painter_test.rs"]
mod painter_test;

use crate::brush::Brush;
use crate::geom::Point;
use crate::session::StrokeSession;
use crate::surface::Surface;

/// Core painter state: the brush plus the active-stroke machine.
#[derive(Debug, Clone, Default)]
pub struct PainterCore {
    brush: Brush,
    session: StrokeSession,
}

impl PainterCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Pointer events ---

    /// Begin a stroke at `p`. Draws nothing; the first segment appears on the
    /// next pointer-move. Re-anchors the stroke if one is already active.
    pub fn pointer_down(&mut self, p: Point) {
        self.session = StrokeSession::Active { last: p };
    }

    /// End the current stroke. Later pointer-moves draw nothing until the
    /// next pointer-down.
    pub fn pointer_up(&mut self) {
        self.session = StrokeSession::Idle;
    }

    /// Extend the active stroke to `p2`. No-op while no stroke is active.
    ///
    /// Fills an end-cap disc at `p2`, strokes a segment from the previous
    /// sample, then re-anchors at `p2` so segments chain tail-to-head instead
    /// of radiating from the pointer-down point. The segment width is twice
    /// the brush size so its thickness matches the disc diameter; without the
    /// cap, wide strokes look railroad-tracked at direction changes.
    ///
    /// # Errors
    ///
    /// Propagates the surface's draw error.
    pub fn pointer_move<S: Surface>(&mut self, surface: &mut S, p2: Point) -> Result<(), S::Error> {
        let StrokeSession::Active { last } = self.session else {
            return Ok(());
        };
        let radius = f64::from(self.brush.size());
        surface.fill_disc(p2, radius, self.brush.color())?;
        surface.stroke_segment(last, p2, radius * 2.0, self.brush.color())?;
        self.session = StrokeSession::Active { last: p2 };
        Ok(())
    }

    // --- Brush controls ---

    /// Step the brush size up one notch, saturating at the maximum. Returns
    /// the new size for the host's size display.
    pub fn increase_size(&mut self) -> u32 {
        self.brush.grow()
    }

    /// Step the brush size down one notch, saturating at the minimum.
    /// Returns the new size for the host's size display.
    pub fn decrease_size(&mut self) -> u32 {
        self.brush.shrink()
    }

    /// Set the color for subsequently drawn primitives. An in-progress
    /// stroke continues in the new color from the next sample on.
    pub fn set_color(&mut self, color: &str) {
        self.brush.set_color(color);
    }

    // --- Queries ---

    /// Current brush size (disc radius in pixels).
    #[must_use]
    pub fn size(&self) -> u32 {
        self.brush.size()
    }

    /// Current brush color.
    #[must_use]
    pub fn color(&self) -> &str {
        self.brush.color()
    }

    /// Whether a stroke is currently in progress.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.session.is_active()
    }
}
