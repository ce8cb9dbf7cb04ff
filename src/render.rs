//! [`Surface`] implementation backed by the browser's 2D canvas context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. Fallible canvas calls propagate
//! errors via `Result<(), JsValue>`; the wasm wrapper surfaces them to the
//! host.

use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::geom::Point;
use crate::surface::Surface;

/// Draws onto a `<canvas>` element's persistent bitmap.
pub struct Canvas2dSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    /// Bind to the given canvas element's 2D context.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element has no 2D context, e.g. because the
    /// context was already requested in a different mode.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for Canvas2dSurface {
    type Error = JsValue;

    fn fill_disc(&mut self, center: Point, radius: f64, color: &str) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI)?;
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        Ok(())
    }

    fn stroke_segment(&mut self, from: Point, to: Point, width: f64, color: &str) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.stroke();
        Ok(())
    }

    fn clear(&mut self) -> Result<(), JsValue> {
        let w = f64::from(self.canvas.width());
        let h = f64::from(self.canvas.height());
        self.ctx.clear_rect(0.0, 0.0, w, h);
        Ok(())
    }
}
