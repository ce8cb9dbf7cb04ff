//! The wasm-facing widget: binds [`PainterCore`] to a browser canvas.
//!
//! The host page owns the DOM and forwards events here. Pointer events carry
//! `offsetX` / `offsetY` (surface-local coordinates), the size buttons call
//! the size steppers and write the returned value to the size display, and
//! the color input forwards its committed value. The widget never reaches
//! into the DOM beyond the canvas it is given.

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::geom::Point;
use crate::painter::PainterCore;
use crate::render::Canvas2dSurface;
use crate::surface::Surface;

/// Console logging and readable panic messages for the browser.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("sketchpad: logger already initialized"));
    }
}

/// The drawing widget exported to the host page.
#[wasm_bindgen]
pub struct Painter {
    core: PainterCore,
    surface: Canvas2dSurface,
}

#[wasm_bindgen]
impl Painter {
    /// Bind a new painter to `canvas`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element's 2D context is unavailable.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<Painter, JsValue> {
        let surface = Canvas2dSurface::new(canvas)?;
        log::debug!("painter bound to canvas");
        Ok(Self { core: PainterCore::new(), surface })
    }

    /// Host `pointerdown` handler. `x` / `y` are surface-local.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.core.pointer_down(Point::new(x, y));
    }

    /// Host `pointermove` handler. Draws only while a stroke is active.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a canvas draw call fails.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        self.core.pointer_move(&mut self.surface, Point::new(x, y))
    }

    /// Host `pointerup` handler.
    pub fn pointer_up(&mut self) {
        self.core.pointer_up();
    }

    /// Step the brush size up one notch. Returns the new size for the host's
    /// size display.
    pub fn increase_size(&mut self) -> u32 {
        self.core.increase_size()
    }

    /// Step the brush size down one notch. Returns the new size for the
    /// host's size display.
    pub fn decrease_size(&mut self) -> u32 {
        self.core.decrease_size()
    }

    /// Host color-input `change` handler. Takes effect on the next drawn
    /// primitive.
    pub fn set_color(&mut self, color: &str) {
        self.core.set_color(color);
    }

    /// Erase the whole canvas. Brush size, color, and any in-progress stroke
    /// are unaffected.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas clear call fails.
    pub fn clear(&mut self) -> Result<(), JsValue> {
        log::debug!("clearing canvas");
        self.surface.clear()
    }

    /// Current brush size (disc radius in pixels).
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn size(&self) -> u32 {
        self.core.size()
    }

    /// Current brush color.
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn color(&self) -> String {
        self.core.color().to_owned()
    }
}
